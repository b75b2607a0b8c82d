use serde::Serialize;

use crate::{config::PolicyConfig, percentiles::Percentiles};

/// Quartiles and Tukey fences of a numeric dataset.
///
/// Quartiles use linear interpolation (see
/// [`compute_percentile`](crate::percentiles::compute_percentile)). The
/// whisker ends are observed values: the smallest and largest data points
/// inside `[lower_bound, upper_bound]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlotSummary {
    pub q1: f64,
    /// The median.
    pub q2: f64,
    pub q3: f64,
    /// `q3 - q1`.
    pub iqr: f64,
    /// `q1 - multiplier * iqr`.
    pub lower_bound: f64,
    /// `q3 + multiplier * iqr`.
    pub upper_bound: f64,
    /// Smallest observed value not below `lower_bound`.
    pub lower_fence: f64,
    /// Largest observed value not above `upper_bound`.
    pub upper_fence: f64,
    /// Observed values outside `[lower_bound, upper_bound]`, ascending.
    pub outliers: Vec<f64>,
}

impl BoxPlotSummary {
    /// Computes the summary from unsorted values.
    ///
    /// Returns `None` for an empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqdist_stats::{box_plot::BoxPlotSummary, config::PolicyConfig};
    ///
    /// let values = (1..=10).map(f64::from).collect::<Vec<_>>();
    /// let summary = BoxPlotSummary::new(&values, &PolicyConfig::default()).unwrap();
    /// assert_eq!((summary.q1, summary.q2, summary.q3), (3.25, 5.5, 7.75));
    /// assert_eq!((summary.lower_bound, summary.upper_bound), (-3.5, 14.5));
    /// assert_eq!((summary.lower_fence, summary.upper_fence), (1.0, 10.0));
    /// assert!(summary.outliers.is_empty());
    /// ```
    #[must_use]
    pub fn new(values: &[f64], config: &PolicyConfig) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, config)
    }

    /// Computes the summary from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], config: &PolicyConfig) -> Option<Self> {
        if sorted_values.is_empty() {
            return None;
        }
        let quartiles = Percentiles::from_sorted(sorted_values, &[25.0, 50.0, 75.0]);
        let q1 = quartiles.get(25.0)?;
        let q2 = quartiles.get(50.0)?;
        let q3 = quartiles.get(75.0)?;

        let iqr = q3 - q1;
        let lower_bound = q1 - config.tukey_multiplier * iqr;
        let upper_bound = q3 + config.tukey_multiplier * iqr;

        let mut inside = sorted_values
            .iter()
            .copied()
            .filter(|v| (lower_bound..=upper_bound).contains(v));
        let lower_fence = inside.next();
        let upper_fence = inside.next_back().or(lower_fence);
        let outliers = sorted_values
            .iter()
            .copied()
            .filter(|v| !(lower_bound..=upper_bound).contains(v))
            .collect();

        Some(Self {
            q1,
            q2,
            q3,
            iqr,
            lower_bound,
            upper_bound,
            lower_fence: lower_fence.unwrap_or(q1),
            upper_fence: upper_fence.unwrap_or(q3),
            outliers,
        })
    }
}

#[cfg(test)]
#[expect(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert_eq!(BoxPlotSummary::new(&[], &PolicyConfig::default()), None);
    }

    #[test]
    fn test_fences_exclude_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 50.0];
        let summary = BoxPlotSummary::new(&values, &PolicyConfig::default()).unwrap();
        // q1 = 3.25, q3 = 7.75, upper bound 14.5.
        assert_eq!(summary.upper_fence, 9.0);
        assert_eq!(summary.lower_fence, 1.0);
        assert_eq!(summary.outliers, [50.0]);
    }

    #[test]
    fn test_outliers_on_both_sides_are_sorted() {
        let values = [100.0, 1.0, 2.0, 3.0, 4.0, -100.0];
        let summary = BoxPlotSummary::new(&values, &PolicyConfig::default()).unwrap();
        assert_eq!((summary.lower_bound, summary.upper_bound), (-2.5, 7.5));
        assert_eq!(summary.outliers, [-100.0, 100.0]);
    }

    #[test]
    fn test_zero_iqr() {
        let values = [5.0, 5.0, 5.0, 5.0, 9.0];
        let summary = BoxPlotSummary::new(&values, &PolicyConfig::default()).unwrap();
        assert_eq!(summary.iqr, 0.0);
        assert_eq!((summary.lower_bound, summary.upper_bound), (5.0, 5.0));
        assert_eq!((summary.lower_fence, summary.upper_fence), (5.0, 5.0));
        assert_eq!(summary.outliers, [9.0]);
    }

    #[test]
    fn test_single_value() {
        let summary = BoxPlotSummary::new(&[3.0], &PolicyConfig::default()).unwrap();
        assert_eq!(summary.q1, 3.0);
        assert_eq!(summary.q3, 3.0);
        assert_eq!((summary.lower_fence, summary.upper_fence), (3.0, 3.0));
    }

    #[test]
    fn test_custom_multiplier() {
        let config = PolicyConfig {
            tukey_multiplier: 3.0,
            ..PolicyConfig::default()
        };
        let values = (1..=10).map(f64::from).collect::<Vec<_>>();
        let summary = BoxPlotSummary::new(&values, &config).unwrap();
        assert_eq!(summary.lower_bound, 3.25 - 13.5);
        assert_eq!(summary.upper_bound, 7.75 + 13.5);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn quartiles_and_fences_are_ordered(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..200),
        ) {
            let summary = BoxPlotSummary::new(&data, &PolicyConfig::default()).unwrap();
            prop_assert!(summary.q1 <= summary.q2 + 1e-6 && summary.q2 <= summary.q3 + 1e-6);
            prop_assert!(summary.lower_bound <= summary.lower_fence);
            prop_assert!(summary.upper_fence <= summary.upper_bound);
            prop_assert!(summary.lower_fence <= summary.upper_fence);
            prop_assert!(data.contains(&summary.lower_fence));
            prop_assert!(data.contains(&summary.upper_fence));
            let inside = data
                .iter()
                .filter(|v| (summary.lower_bound..=summary.upper_bound).contains(*v))
                .count();
            prop_assert_eq!(inside + summary.outliers.len(), data.len());
        }
    }
}
