//! Contingency tables for categorical cross-tabulation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Cross-tabulation of counts for two categorical variables.
///
/// Labels are sorted lexicographically on both axes so the table layout
/// is deterministic regardless of row order in the source. All counts are
/// non-negative by construction and the marginal totals equal the number
/// of observation pairs fed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Build a table from (row category, column category) observations.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut cells: BTreeMap<(String, String), u64> = BTreeMap::new();
        for (r, c) in pairs {
            *cells.entry((r, c)).or_insert(0) += 1;
        }

        let mut row_labels: Vec<String> = Vec::new();
        let mut col_labels: Vec<String> = Vec::new();
        for (r, c) in cells.keys() {
            if !row_labels.contains(r) {
                row_labels.push(r.clone());
            }
            if !col_labels.contains(c) {
                col_labels.push(c.clone());
            }
        }
        row_labels.sort();
        col_labels.sort();

        let counts = row_labels
            .iter()
            .map(|r| {
                col_labels
                    .iter()
                    .map(|c| {
                        cells
                            .get(&(r.clone(), c.clone()))
                            .copied()
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();

        Self {
            row_labels,
            col_labels,
            counts,
        }
    }

    /// Row category labels, sorted.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column category labels, sorted.
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Count matrix, row-major, aligned with the label vectors.
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Number of row categories.
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of column categories.
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Per-row marginal totals.
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Per-column marginal totals.
    pub fn col_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.n_cols()];
        for row in &self.counts {
            for (j, &c) in row.iter().enumerate() {
                totals[j] += c;
            }
        }
        totals
    }

    /// Grand total of all cells.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Row-normalized percentages (each row sums to 100).
    ///
    /// Rows with a zero total yield all-zero percentages.
    pub fn row_percentages(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let total: u64 = row.iter().sum();
                row.iter()
                    .map(|&c| {
                        if total == 0 {
                            0.0
                        } else {
                            c as f64 / total as f64 * 100.0
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
