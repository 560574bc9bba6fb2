//! Ordinal encoding of ranked categorical vocabularies.

use crate::constants::FREQUENCY_LEVELS;
use crate::dataset::Value;

/// An explicit ranked vocabulary mapping categories to integer ranks.
///
/// Ranks are 1-based in vocabulary order (lowest to highest). A category
/// outside the vocabulary has no rank; callers drop such rows rather than
/// substituting a default, so an unmapped label can never leak into a
/// numeric sample as zero or any other magic number.
#[derive(Debug, Clone)]
pub struct OrdinalScale {
    levels: Vec<String>,
}

impl OrdinalScale {
    /// Build a scale from levels ordered lowest to highest.
    pub fn new(levels: &[&str]) -> Self {
        Self {
            levels: levels.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// The ranked levels, lowest first.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// Rank of a category label, or `None` if it is not in the vocabulary.
    pub fn rank(&self, label: &str) -> Option<f64> {
        self.levels
            .iter()
            .position(|l| l == label)
            .map(|i| (i + 1) as f64)
    }

    /// Encode a sample of categorical values into ranks.
    ///
    /// Missing cells and labels outside the vocabulary are dropped, so the
    /// output may be shorter than the input.
    pub fn encode(&self, sample: &[Value]) -> Vec<f64> {
        sample
            .iter()
            .filter_map(|v| v.label().and_then(|l| self.rank(&l)))
            .collect()
    }
}

/// The battery's scale for "Frequency of AI Use".
pub fn frequency_scale() -> OrdinalScale {
    OrdinalScale::new(&FREQUENCY_LEVELS)
}
