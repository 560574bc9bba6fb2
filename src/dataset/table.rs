//! Immutable tabular view of the survey dataset.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::AnalysisError;

/// A single cell of the dataset.
///
/// Values are typed once at load time; empty fields and NA markers become
/// [`Value::Missing`] so downstream code never has to guess.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Categorical or free-text field.
    Str(String),
    /// Finite numeric field.
    Num(f64),
    /// Empty field or recognized missing-value marker.
    Missing,
}

impl Value {
    /// Parse a raw CSV field into a typed value.
    ///
    /// Empty fields and the common NA spellings map to `Missing`. Fields
    /// that parse to a finite number become `Num`; non-finite parses
    /// (`"NaN"`, `"inf"`) are treated as missing rather than smuggled in
    /// as numbers. Everything else stays `Str`.
    pub(crate) fn parse(field: &str) -> Value {
        let trimmed = field.trim();
        if trimmed.is_empty() || is_missing_marker(trimmed) {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Num(n),
            Ok(_) => Value::Missing,
            Err(_) => Value::Str(trimmed.to_string()),
        }
    }

    /// Numeric view of the value, `None` for strings and missing cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Categorical label of the value, `None` for missing cells.
    ///
    /// Numeric cells get a formatted label so numeric-coded categories can
    /// still participate in contingency tables.
    pub fn label(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Num(n) => Some(Cow::Owned(format_numeric_label(*n))),
            Value::Missing => None,
        }
    }

    /// True for missing cells.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

fn is_missing_marker(field: &str) -> bool {
    field.eq_ignore_ascii_case("na")
        || field.eq_ignore_ascii_case("n/a")
        || field.eq_ignore_ascii_case("null")
        || field.eq_ignore_ascii_case("none")
}

fn format_numeric_label(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Immutable column-major table keyed by column name.
///
/// Constructed once from the source file and shared read-only for the
/// process lifetime; every analysis derives its samples from this view
/// without mutating it.
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Vec<Value>>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from column names and column-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DataUnavailable`] on duplicate column
    /// names or ragged columns.
    pub(crate) fn from_columns(
        names: Vec<String>,
        columns: Vec<Vec<Value>>,
    ) -> Result<Self, AnalysisError> {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(AnalysisError::DataUnavailable(format!(
                    "duplicate column name: {}",
                    name
                )));
            }
        }
        let rows = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|c| c.len() != rows) {
            return Err(AnalysisError::DataUnavailable(
                "columns have unequal lengths".to_string(),
            ));
        }
        Ok(Self {
            names,
            index,
            columns,
            rows,
        })
    }

    /// Number of data rows.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Column names in file order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// True if the dataset has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Borrow a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ColumnNotFound`] if the column is absent.
    pub fn column(&self, name: &str) -> Result<&[Value], AnalysisError> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].as_slice())
            .ok_or_else(|| AnalysisError::ColumnNotFound(name.to_string()))
    }

    /// Extract the finite numeric values of a column, dropping missing and
    /// non-numeric cells.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ColumnNotFound`] if the column is absent.
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>, AnalysisError> {
        Ok(self.column(name)?.iter().filter_map(Value::as_f64).collect())
    }
}
