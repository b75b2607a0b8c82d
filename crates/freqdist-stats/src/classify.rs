//! Variable classification and analysis-mode inference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{config::PolicyConfig, dataset::Dataset};

/// Statistical type of a variable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Text values.
    Categorical,
    /// Numeric with few distinct values.
    DiscreteNumeric,
    /// Numeric with many distinct values.
    ContinuousNumeric,
}

impl VariableKind {
    #[must_use]
    pub fn is_numeric(self) -> bool {
        !self.is_categorical()
    }

    fn to_str(self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::DiscreteNumeric => "discrete numeric",
            Self::ContinuousNumeric => "continuous numeric",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.to_str(), f)
    }
}

/// Whether statistics come from raw distinct values or from class intervals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    /// One row per distinct value.
    Simple,
    /// Equal-width class intervals.
    Grouped,
}

impl AnalysisMode {
    /// Default mode for a variable kind: continuous data is grouped, everything
    /// else is tabulated value by value.
    #[must_use]
    pub fn infer(kind: VariableKind) -> Self {
        match kind {
            VariableKind::ContinuousNumeric => Self::Grouped,
            VariableKind::Categorical | VariableKind::DiscreteNumeric => Self::Simple,
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Simple => "simple",
            Self::Grouped => "grouped",
        };
        fmt::Display::fmt(s, f)
    }
}

/// Classifies a dataset.
///
/// Numeric data with fewer than `config.discrete_threshold` distinct values is
/// discrete; otherwise it is continuous.
///
/// # Examples
///
/// ```
/// use freqdist_stats::{
///     classify::{classify, VariableKind},
///     config::PolicyConfig,
///     dataset::Dataset,
/// };
///
/// let config = PolicyConfig::default();
/// let few = Dataset::numeric([1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(classify(&few, &config), VariableKind::DiscreteNumeric);
///
/// let many = Dataset::numeric((0..20).map(f64::from)).unwrap();
/// assert_eq!(classify(&many, &config), VariableKind::ContinuousNumeric);
/// ```
#[must_use]
pub fn classify(dataset: &Dataset, config: &PolicyConfig) -> VariableKind {
    let kind = match dataset {
        Dataset::Categorical(_) => VariableKind::Categorical,
        Dataset::Numeric(values) => {
            if distinct_count(values) < config.discrete_threshold {
                VariableKind::DiscreteNumeric
            } else {
                VariableKind::ContinuousNumeric
            }
        }
    };
    tracing::debug!(n = dataset.len(), %kind, "classified variable");
    kind
}

/// Number of distinct values, compared exactly.
#[must_use]
pub fn distinct_count(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup_by(|a, b| a.total_cmp(b).is_eq());
    sorted.len()
}
