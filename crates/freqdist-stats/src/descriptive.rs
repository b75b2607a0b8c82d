use std::collections::BTreeMap;

/// Descriptive statistics computed directly from raw numeric values.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f64` values. It backs the simple
/// (ungrouped) analysis mode.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleStats {
    /// The number of values.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    ///
    /// For an even number of values this is the average of the two middle values.
    pub median: f64,
    /// The most frequent value. Ties resolve to the smallest tied value.
    pub mode: f64,
    /// `max - min`.
    pub range: f64,
    /// The sample variance (divisor `n - 1`), `0.0` for a single value.
    pub variance: f64,
    /// The sample standard deviation.
    pub std_dev: f64,
}

impl SimpleStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Returns
    ///
    /// * `Some(SimpleStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqdist_stats::descriptive::SimpleStats;
    /// let values = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0];
    /// let stats = SimpleStats::new(values).unwrap();
    /// assert_eq!(stats.mean, 2.875);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.mode, 3.0);
    /// assert_eq!(stats.range, 4.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use freqdist_stats::descriptive::SimpleStats;
    /// let stats = SimpleStats::from_sorted(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(stats.std_dev, 0.0);
    /// assert_eq!(stats.mode, 1.0);
    /// assert_eq!(stats.range, 0.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;

        let mid = count / 2;
        let median = if count.is_multiple_of(2) {
            f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };

        let variance = if count > 1 {
            sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            mode: sorted_mode(sorted_values),
            range: max - min,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Most frequent value of a non-empty sorted slice.
///
/// Runs of equal values are scanned in ascending order and a later run only
/// wins with a strictly larger count, so ties go to the smallest value.
fn sorted_mode(sorted_values: &[f64]) -> f64 {
    let mut best = (sorted_values[0], 0);
    for run in sorted_values.chunk_by(|a, b| a.total_cmp(b).is_eq()) {
        if run.len() > best.1 {
            best = (run[0], run.len());
        }
    }
    best.0
}

/// Most frequent text value.
///
/// Ties resolve to the lexicographically smallest value. Returns `None` for
/// an empty input.
///
/// # Examples
///
/// ```
/// # use freqdist_stats::descriptive::categorical_mode;
/// assert_eq!(categorical_mode(["a", "b", "a", "c", "a"]), Some("a".to_owned()));
/// assert_eq!(categorical_mode(["y", "x"]), Some("x".to_owned()));
/// ```
#[must_use]
pub fn categorical_mode<I, S>(values: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = BTreeMap::<String, usize>::new();
    for value in values {
        *counts.entry(value.as_ref().to_owned()).or_insert(0) += 1;
    }
    let max_count = counts.values().copied().max()?;
    counts
        .into_iter()
        .find(|(_, count)| *count == max_count)
        .map(|(value, _)| value)
}
