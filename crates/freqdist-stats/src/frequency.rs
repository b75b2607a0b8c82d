use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{
    classify::{AnalysisMode, VariableKind},
    config::PolicyConfig,
    dataset::Dataset,
    error::AnalysisError,
};

/// A frequency distribution of a dataset.
///
/// In simple mode there is one row per distinct value. In grouped mode the
/// value range `[min, max]` is split into equal-width classes; every class is
/// half-open except the last, which is closed so the maximum is counted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    /// How the rows were formed.
    pub mode: AnalysisMode,
    /// Sample size; the sum of all `fi`.
    pub n: usize,
    /// Class width, present only for grouped tables.
    pub amplitude: Option<f64>,
    /// Rows in ascending order of value or lower bound.
    pub rows: Vec<FrequencyRow>,
}

/// A single class of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// The distinct value or class interval this row counts.
    pub label: ClassLabel,
    /// Absolute frequency.
    pub fi: usize,
    /// Relative frequency, `fi / n`.
    pub hi: f64,
    /// Cumulative absolute frequency.
    #[serde(rename = "Fi")]
    pub cum_fi: usize,
    /// Cumulative relative frequency.
    #[serde(rename = "Hi")]
    pub cum_hi: f64,
    /// `hi` as a percentage string with two decimals.
    #[serde(rename = "hi%")]
    pub hi_percent: String,
    /// `Hi` as a percentage string with two decimals.
    #[serde(rename = "Hi%")]
    pub cum_hi_percent: String,
}

/// What a frequency row stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassLabel {
    /// A distinct numeric value.
    Value(f64),
    /// A distinct text value.
    Category(String),
    /// A class interval of a grouped table.
    Interval(ClassInterval),
}

/// Bounds and class mark of a grouped class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassInterval {
    pub lower: f64,
    pub upper: f64,
    /// Whether `upper` belongs to the class. Only the last class is closed.
    pub closed: bool,
    /// Midpoint of the class, used as its representative value.
    pub class_mark: f64,
}

impl ClassLabel {
    /// The interval of a grouped row.
    #[must_use]
    pub fn as_interval(&self) -> Option<&ClassInterval> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::Value(_) | Self::Category(_) => None,
        }
    }

    /// Numeric position of the row on a chart axis: the value itself or the
    /// class mark. `None` for categories.
    #[must_use]
    pub fn axis_value(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Interval(interval) => Some(interval.class_mark),
            Self::Category(_) => None,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, f),
            Self::Category(category) => fmt::Display::fmt(category, f),
            Self::Interval(interval) => fmt::Display::fmt(interval, f),
        }
    }
}

impl fmt::Display for ClassInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.closed { ']' } else { '>' };
        write!(f, "[ {:.2} ; {:.2} {close}", self.lower, self.upper)
    }
}

impl FrequencyTable {
    /// Builds the frequency table of a dataset.
    ///
    /// In grouped mode `bin_count` overrides the Sturges suggestion and must lie
    /// within `[config.min_bins, config.max_bins]`. It is ignored in simple mode.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::EmptyDataset`] - the dataset has no values
    /// * [`AnalysisError::UnsupportedMode`] - grouped mode on categorical data
    /// * [`AnalysisError::InvalidBinCount`] - `bin_count` out of bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use freqdist_stats::{
    ///     classify::AnalysisMode, config::PolicyConfig, dataset::Dataset,
    ///     frequency::FrequencyTable,
    /// };
    ///
    /// let dataset = Dataset::numeric([1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]).unwrap();
    /// let table =
    ///     FrequencyTable::build(&dataset, AnalysisMode::Simple, None, &PolicyConfig::default())
    ///         .unwrap();
    /// let fi = table.rows.iter().map(|row| row.fi).collect::<Vec<_>>();
    /// assert_eq!(fi, [1, 2, 3, 1, 1]);
    /// assert_eq!(table.rows.last().unwrap().cum_fi, 8);
    /// ```
    pub fn build(
        dataset: &Dataset,
        mode: AnalysisMode,
        bin_count: Option<usize>,
        config: &PolicyConfig,
    ) -> Result<Self, AnalysisError> {
        if dataset.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        let table = match (mode, dataset) {
            (AnalysisMode::Simple, Dataset::Numeric(values)) => Self::simple_numeric(values),
            (AnalysisMode::Simple, Dataset::Categorical(values)) => {
                Self::simple_categorical(values)
            }
            (AnalysisMode::Grouped, Dataset::Categorical(_)) => {
                return Err(AnalysisError::UnsupportedMode {
                    kind: VariableKind::Categorical,
                });
            }
            (AnalysisMode::Grouped, Dataset::Numeric(values)) => {
                let bins = match bin_count {
                    Some(bins) => config.check_bin_count(bins)?,
                    None => sturges_bins(values.len(), config),
                };
                Self::grouped(values, bins)
            }
        };

        tracing::debug!(
            %mode,
            n = table.n,
            rows = table.rows.len(),
            amplitude = ?table.amplitude,
            "built frequency table"
        );
        Ok(table)
    }

    /// Number of rows; the bin count for grouped tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn simple_numeric(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let counts = sorted
            .chunk_by(|a, b| a.total_cmp(b).is_eq())
            .map(|run| (ClassLabel::Value(run[0]), run.len()));
        Self::from_counts(AnalysisMode::Simple, None, counts)
    }

    fn simple_categorical(values: &[String]) -> Self {
        let mut counts = BTreeMap::<&str, usize>::new();
        for value in values {
            *counts.entry(value.as_str()).or_insert(0) += 1;
        }
        let counts = counts
            .into_iter()
            .map(|(value, count)| (ClassLabel::Category(value.to_owned()), count));
        Self::from_counts(AnalysisMode::Simple, None, counts)
    }

    #[expect(clippy::cast_precision_loss)]
    fn grouped(values: &[f64], bins: usize) -> Self {
        assert!(bins > 0, "bin count must be positive");

        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let k = bins as f64;
        let wide = !(max - min).is_finite();
        // The range of finite data can itself overflow; each half then stays finite.
        let amplitude = if wide {
            max / k - min / k
        } else {
            (max - min) / k
        };

        // Edges are computed from their index to avoid accumulating rounding
        // error; the outer edges are pinned to the observed extremes.
        let edges = (0..=bins)
            .map(|i| {
                let offset = i as f64;
                if i == 0 {
                    min
                } else if i == bins {
                    max
                } else if wide {
                    2.0 * (min / 2.0 + offset * (amplitude / 2.0))
                } else {
                    min + offset * amplitude
                }
            })
            .collect::<Vec<_>>();

        let mut counts = vec![0; bins];
        if max > min {
            let inner_edges = &edges[1..bins];
            for &value in values {
                // Index of the class whose half-open range holds the value.
                // Values at the maximum fall in the last class, which is closed.
                counts[inner_edges.partition_point(|&edge| edge <= value)] += 1;
            }
        } else {
            // All values identical: every class has zero width.
            counts[0] = values.len();
        }

        let rows = edges.windows(2).zip(counts).enumerate().map(|(i, (edge, count))| {
            let interval = ClassInterval {
                lower: edge[0],
                upper: edge[1],
                closed: i == bins - 1,
                class_mark: f64::midpoint(edge[0], edge[1]),
            };
            (ClassLabel::Interval(interval), count)
        });
        Self::from_counts(AnalysisMode::Grouped, Some(amplitude), rows)
    }

    #[expect(clippy::cast_precision_loss)]
    fn from_counts<I>(mode: AnalysisMode, amplitude: Option<f64>, counts: I) -> Self
    where
        I: IntoIterator<Item = (ClassLabel, usize)>,
    {
        let counts = counts.into_iter().collect::<Vec<_>>();
        let n = counts.iter().map(|(_, count)| count).sum::<usize>();
        let total = n as f64;

        let mut running = 0;
        let rows = counts
            .into_iter()
            .map(|(label, fi)| {
                running += fi;
                let hi = fi as f64 / total;
                let share = running as f64 / total;
                FrequencyRow {
                    label,
                    fi,
                    hi,
                    cum_fi: running,
                    cum_hi: share,
                    hi_percent: format_percent(hi),
                    cum_hi_percent: format_percent(share),
                }
            })
            .collect();

        Self {
            mode,
            n,
            amplitude,
            rows,
        }
    }
}

/// Default bin count from Sturges' rule, `floor(1 + c * log10(n))`.
///
/// Falls back to `config.default_bins` when `n` is zero or the rule yields a
/// non-positive count, and never exceeds `config.max_bins`.
///
/// # Examples
///
/// ```
/// use freqdist_stats::{config::PolicyConfig, frequency::sturges_bins};
///
/// let config = PolicyConfig::default();
/// assert_eq!(sturges_bins(100, &config), 7);
/// assert_eq!(sturges_bins(1, &config), 1);
/// assert_eq!(sturges_bins(0, &config), 5);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
#[must_use]
pub fn sturges_bins(n: usize, config: &PolicyConfig) -> usize {
    let k = if n == 0 {
        0.0
    } else {
        (1.0 + config.sturges_coefficient * (n as f64).log10()).floor()
    };
    let bins = if k >= 1.0 {
        k as usize
    } else {
        config.default_bins
    };
    bins.min(config.max_bins).max(1)
}

/// Formats a proportion as a percentage with two decimals, e.g. `"12.50%"`.
#[must_use]
pub fn format_percent(proportion: f64) -> String {
    format!("{:.2}%", proportion * 100.0)
}
