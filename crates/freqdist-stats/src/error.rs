use crate::classify::VariableKind;

/// Errors raised while validating an analysis request.
///
/// Numeric degeneracies (a single observation, zero variance, flat
/// frequencies) are not errors; they resolve to documented fallback values.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("no data to process")]
    EmptyDataset,
    #[display("bin count {bins} is outside the allowed range [{min}, {max}]")]
    InvalidBinCount { bins: usize, min: usize, max: usize },
    #[display("grouped mode is not supported for {kind} data")]
    UnsupportedMode { kind: VariableKind },
    #[display("invalid policy configuration: {reason}")]
    InvalidConfig { reason: String },
}
