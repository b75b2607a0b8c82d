use serde::Serialize;

use crate::{
    box_plot::BoxPlotSummary,
    classify::{self, AnalysisMode, VariableKind},
    config::PolicyConfig,
    dataset::Dataset,
    descriptive::{self, SimpleStats},
    error::AnalysisError,
    frequency::{self, FrequencyTable},
    grouped::GroupedStats,
};

/// Caller-chosen parameters of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Display name of the variable, e.g. a column header.
    pub variable_name: Option<String>,
    /// Overrides the mode inferred from the variable kind.
    pub mode: Option<AnalysisMode>,
    /// Bin count for grouped mode; the Sturges suggestion when absent.
    pub bin_count: Option<usize>,
}

/// Central tendency and dispersion of a variable.
///
/// Simple and grouped analyses share this shape; only numeric data carries
/// more than a mode.
#[derive(Debug, Clone, PartialEq, Serialize, derive_more::IsVariant)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SummaryStatistics {
    Numeric(NumericSummary),
    Categorical { mode: String },
}

/// Measures of a numeric variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub median: f64,
    pub mode: f64,
    pub range: f64,
    pub min: f64,
    pub max: f64,
    pub standard_deviation: f64,
    /// Class width; present only for grouped analyses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_amplitude: Option<f64>,
}

impl From<SimpleStats> for NumericSummary {
    fn from(stats: SimpleStats) -> Self {
        Self {
            mean: stats.mean,
            median: stats.median,
            mode: stats.mode,
            range: stats.range,
            min: stats.min,
            max: stats.max,
            standard_deviation: stats.std_dev,
            class_amplitude: None,
        }
    }
}

impl From<GroupedStats> for NumericSummary {
    fn from(stats: GroupedStats) -> Self {
        Self {
            mean: stats.mean,
            median: stats.median,
            mode: stats.mode,
            range: stats.range,
            min: stats.min,
            max: stats.max,
            standard_deviation: stats.std_dev,
            class_amplitude: Some(stats.class_amplitude),
        }
    }
}

impl SummaryStatistics {
    /// The numeric measures, or `None` for categorical data.
    #[must_use]
    pub fn as_numeric(&self) -> Option<&NumericSummary> {
        match self {
            Self::Numeric(summary) => Some(summary),
            Self::Categorical { .. } => None,
        }
    }
}

/// Complete result of analyzing one variable.
///
/// This structure combines:
/// - The detected variable kind and the mode actually used
/// - The frequency table
/// - Summary statistics chosen by mode: raw-value formulas in simple mode,
///   class-interval formulas in grouped mode
/// - Box-plot quartiles and fences (numeric data only)
///
/// # Examples
///
/// ```
/// use freqdist_stats::{
///     config::PolicyConfig,
///     dataset::Dataset,
///     summary::{AnalysisReport, AnalysisRequest},
/// };
///
/// let dataset = Dataset::numeric([1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]).unwrap();
/// let report =
///     AnalysisReport::analyze(&dataset, &AnalysisRequest::default(), &PolicyConfig::default())
///         .unwrap();
///
/// let stats = report.summary_statistics.as_numeric().unwrap();
/// assert_eq!(stats.mean, 2.875);
/// assert_eq!(stats.median, 3.0);
/// assert_eq!(stats.mode, 3.0);
/// assert_eq!(report.box_plot.unwrap().q2, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    pub variable_kind: VariableKind,
    pub mode: AnalysisMode,
    /// Sample size.
    pub n: usize,
    /// Bin count suggested by Sturges' rule; grouped analyses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_bins: Option<usize>,
    pub frequency_table: FrequencyTable,
    pub summary_statistics: SummaryStatistics,
    /// Absent for categorical data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_plot: Option<BoxPlotSummary>,
}

impl AnalysisReport {
    /// Runs the whole analysis of one dataset.
    ///
    /// Validation failures abort before any table is built.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::InvalidConfig`] - `config` is inconsistent
    /// * [`AnalysisError::EmptyDataset`] - the dataset has no values
    /// * [`AnalysisError::UnsupportedMode`] - grouped mode on categorical data
    /// * [`AnalysisError::InvalidBinCount`] - requested bin count out of bounds
    pub fn analyze(
        dataset: &Dataset,
        request: &AnalysisRequest,
        config: &PolicyConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        if dataset.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }

        let variable_kind = classify::classify(dataset, config);
        let mode = request
            .mode
            .unwrap_or_else(|| AnalysisMode::infer(variable_kind));
        if mode.is_grouped() {
            if !variable_kind.is_numeric() {
                return Err(AnalysisError::UnsupportedMode {
                    kind: variable_kind,
                });
            }
            if let Some(bins) = request.bin_count {
                config.check_bin_count(bins)?;
            }
        }
        tracing::debug!(
            %variable_kind,
            %mode,
            bin_count = ?request.bin_count,
            "analysis request resolved"
        );

        let frequency_table = FrequencyTable::build(dataset, mode, request.bin_count, config)?;
        let summary_statistics = summarize(dataset, &frequency_table)?;
        let suggested_bins = mode
            .is_grouped()
            .then(|| frequency::sturges_bins(dataset.len(), config));
        let box_plot = dataset
            .as_numeric()
            .and_then(|values| BoxPlotSummary::new(values, config));

        Ok(Self {
            variable_name: request.variable_name.clone(),
            variable_kind,
            mode,
            n: dataset.len(),
            suggested_bins,
            frequency_table,
            summary_statistics,
            box_plot,
        })
    }
}

/// Picks the statistics strategy for the table's mode.
///
/// Grouped tables are summarized from their classes alone; simple tables from
/// the raw values.
fn summarize(
    dataset: &Dataset,
    table: &FrequencyTable,
) -> Result<SummaryStatistics, AnalysisError> {
    let summary = match (table.mode, dataset) {
        (_, Dataset::Categorical(values)) => SummaryStatistics::Categorical {
            mode: descriptive::categorical_mode(values).ok_or(AnalysisError::EmptyDataset)?,
        },
        (AnalysisMode::Simple, Dataset::Numeric(values)) => SummaryStatistics::Numeric(
            SimpleStats::new(values.iter().copied())
                .ok_or(AnalysisError::EmptyDataset)?
                .into(),
        ),
        (AnalysisMode::Grouped, Dataset::Numeric(_)) => SummaryStatistics::Numeric(
            GroupedStats::from_table(table)
                .ok_or(AnalysisError::EmptyDataset)?
                .into(),
        ),
    };
    Ok(summary)
}
