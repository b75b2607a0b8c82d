//! One-dimensional datasets handed to the analysis pipeline.
//!
//! A [`Dataset`] is always non-empty and homogeneous: either every value is a
//! finite number or every value is text. Missing entries are dropped before a
//! dataset is built.

use crate::error::AnalysisError;

/// A non-empty, homogeneous sequence of observations.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum Dataset {
    /// Finite numeric observations.
    Numeric(Vec<f64>),
    /// Text observations.
    Categorical(Vec<String>),
}

impl Dataset {
    /// Builds a numeric dataset.
    ///
    /// Non-finite values are treated as missing and dropped. Negative zero is
    /// folded into positive zero so both count as the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqdist_stats::dataset::Dataset;
    ///
    /// let dataset = Dataset::numeric([1.0, f64::NAN, -0.0]).unwrap();
    /// assert_eq!(dataset.len(), 2);
    /// assert!(Dataset::numeric(Vec::new()).is_err());
    /// ```
    pub fn numeric<I>(values: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values
            .into_iter()
            .filter(|v| v.is_finite())
            .map(|v| v + 0.0)
            .collect::<Vec<_>>();
        if values.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        Ok(Self::Numeric(values))
    }

    /// Builds a categorical dataset, dropping blank entries.
    pub fn categorical<I, S>(values: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.trim().is_empty())
            .collect::<Vec<_>>();
        if values.is_empty() {
            return Err(AnalysisError::EmptyDataset);
        }
        Ok(Self::Categorical(values))
    }

    /// Builds a dataset from raw text tokens.
    ///
    /// Tokens are trimmed and blank ones skipped. If every remaining token
    /// parses as a finite number or `NaN` the dataset is numeric and the `NaN`
    /// entries are missing values; otherwise all tokens are kept as text,
    /// `NaN` spellings included.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqdist_stats::dataset::Dataset;
    ///
    /// let numbers = Dataset::from_tokens(["1", " 2.5", "", "nan"]).unwrap();
    /// assert_eq!(numbers, Dataset::Numeric(vec![1.0, 2.5]));
    ///
    /// let words = Dataset::from_tokens(["a", "1", "Nan"]).unwrap();
    /// assert_eq!(words.len(), 3);
    /// ```
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_owned())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();

        // `numeric` drops the NaN entries.
        let numbers = tokens
            .iter()
            .map(|t| t.parse::<f64>().ok().filter(|v| !v.is_infinite()))
            .collect::<Option<Vec<_>>>();
        match numbers {
            Some(numbers) => Self::numeric(numbers),
            None => Self::categorical(tokens),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(values) => values.len(),
            Self::Categorical(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the numeric values, or `None` for categorical data.
    #[must_use]
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Self::Numeric(values) => Some(values),
            Self::Categorical(_) => None,
        }
    }

}

/// Splits free-form manual entry into tokens.
///
/// Commas, whitespace and line breaks all separate values.
///
/// # Examples
///
/// ```
/// use freqdist_stats::dataset::split_manual_entry;
///
/// let tokens = split_manual_entry("1, 2 3\n4,,5");
/// assert_eq!(tokens, ["1", "2", "3", "4", "5"]);
/// ```
#[must_use]
pub fn split_manual_entry(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}
