//! Partitioning rows into named groups.
//!
//! Every splitter applies the same missing-value rule: a row contributes
//! to a sample only if the grouping cell and the value cell are both
//! present (and, for ordinal splits, the ordinal label maps onto the
//! scale). The rule runs here, before any test sees the data.

use crate::dataset::Dataset;
use crate::error::AnalysisError;
use crate::prepare::ordinal::OrdinalScale;
use crate::stats::ContingencyTable;

/// Split a numeric column into the requested groups of a categorical
/// column.
///
/// Returns one `(group value, sample)` pair per requested group, in
/// request order. A group with no matching rows yields an empty sample;
/// rejecting it is the downstream test's job.
///
/// # Errors
///
/// Returns [`AnalysisError::ColumnNotFound`] if either column is absent.
pub fn split(
    dataset: &Dataset,
    grouping_column: &str,
    value_column: &str,
    group_values: &[&str],
) -> Result<Vec<(String, Vec<f64>)>, AnalysisError> {
    let groups = dataset.column(grouping_column)?;
    let values = dataset.column(value_column)?;

    let mut out: Vec<(String, Vec<f64>)> = group_values
        .iter()
        .map(|g| (g.to_string(), Vec::new()))
        .collect();

    for (group_cell, value_cell) in groups.iter().zip(values) {
        let label = match group_cell.label() {
            Some(l) => l,
            None => continue,
        };
        let value = match value_cell.as_f64() {
            Some(v) => v,
            None => continue,
        };
        if let Some((_, sample)) = out.iter_mut().find(|(g, _)| *g == label.as_ref()) {
            sample.push(value);
        }
    }
    Ok(out)
}

/// Split a numeric column by every distinct value of a categorical
/// column, in first-appearance order.
///
/// Used by the ANOVA path, where the group set is whatever categories the
/// survey actually contains.
///
/// # Errors
///
/// Returns [`AnalysisError::ColumnNotFound`] if either column is absent.
pub fn split_by_category(
    dataset: &Dataset,
    grouping_column: &str,
    value_column: &str,
) -> Result<Vec<(String, Vec<f64>)>, AnalysisError> {
    let groups = dataset.column(grouping_column)?;
    let values = dataset.column(value_column)?;

    let mut out: Vec<(String, Vec<f64>)> = Vec::new();
    for (group_cell, value_cell) in groups.iter().zip(values) {
        let label = match group_cell.label() {
            Some(l) => l.into_owned(),
            None => continue,
        };
        let value = match value_cell.as_f64() {
            Some(v) => v,
            None => continue,
        };
        match out.iter_mut().find(|(g, _)| *g == label) {
            Some((_, sample)) => sample.push(value),
            None => out.push((label, vec![value])),
        }
    }
    Ok(out)
}

/// Split an ordinal-encoded column into the requested groups.
///
/// Each row contributes the rank of its ordinal label to the sample of
/// its group; rows whose label falls outside the scale's vocabulary are
/// dropped along with rows missing either cell.
///
/// # Errors
///
/// Returns [`AnalysisError::ColumnNotFound`] if either column is absent.
pub fn split_ranks(
    dataset: &Dataset,
    ordinal_column: &str,
    scale: &OrdinalScale,
    grouping_column: &str,
    group_values: &[&str],
) -> Result<Vec<(String, Vec<f64>)>, AnalysisError> {
    let groups = dataset.column(grouping_column)?;
    let ordinals = dataset.column(ordinal_column)?;

    let mut out: Vec<(String, Vec<f64>)> = group_values
        .iter()
        .map(|g| (g.to_string(), Vec::new()))
        .collect();

    for (group_cell, ordinal_cell) in groups.iter().zip(ordinals) {
        let label = match group_cell.label() {
            Some(l) => l,
            None => continue,
        };
        let rank = match ordinal_cell.label().and_then(|l| scale.rank(&l)) {
            Some(r) => r,
            None => continue,
        };
        if let Some((_, sample)) = out.iter_mut().find(|(g, _)| *g == label.as_ref()) {
            sample.push(rank);
        }
    }
    Ok(out)
}

/// Cross-tabulate two categorical columns into a contingency table.
///
/// Rows missing either cell are excluded, so the table's marginal totals
/// equal the count of rows present in both variables.
///
/// # Errors
///
/// Returns [`AnalysisError::ColumnNotFound`] if either column is absent.
pub fn crosstab(
    dataset: &Dataset,
    row_column: &str,
    col_column: &str,
) -> Result<ContingencyTable, AnalysisError> {
    let rows = dataset.column(row_column)?;
    let cols = dataset.column(col_column)?;

    let pairs = rows.iter().zip(cols).filter_map(|(r, c)| {
        let r = r.label()?;
        let c = c.label()?;
        Some((r.into_owned(), c.into_owned()))
    });
    Ok(ContingencyTable::from_pairs(pairs))
}
