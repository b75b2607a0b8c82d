//! Statistics of grouped (interval) data.
//!
//! Once values are binned only the class table is known, so every measure is
//! estimated from class marks and class bounds: the mean is weighted by
//! class marks, and the median and mode are linearly interpolated inside the
//! median class and the modal class.

use crate::frequency::{ClassInterval, FrequencyTable};

/// Measures estimated from a grouped frequency table.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedStats {
    /// `sum(class_mark * fi) / n`.
    pub mean: f64,
    /// Interpolated inside the first class whose `Fi` reaches `n / 2`.
    pub median: f64,
    /// Interpolated inside the first class with the largest `fi`.
    pub mode: f64,
    /// Lower bound of the first class; the observed minimum.
    pub min: f64,
    /// Upper bound of the last class; the observed maximum.
    pub max: f64,
    pub range: f64,
    /// Sample variance of the class marks weighted by `fi`.
    pub variance: f64,
    pub std_dev: f64,
    /// Width shared by every class.
    pub class_amplitude: f64,
}

impl GroupedStats {
    /// Estimates statistics from a grouped table.
    ///
    /// Returns `None` for tables that are not grouped.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqdist_stats::{
    ///     classify::AnalysisMode, config::PolicyConfig, dataset::Dataset,
    ///     frequency::FrequencyTable, grouped::GroupedStats,
    /// };
    ///
    /// let dataset = Dataset::numeric((0..100).map(f64::from)).unwrap();
    /// let table = FrequencyTable::build(
    ///     &dataset,
    ///     AnalysisMode::Grouped,
    ///     Some(10),
    ///     &PolicyConfig::default(),
    /// )
    /// .unwrap();
    /// let stats = GroupedStats::from_table(&table).unwrap();
    /// assert!((stats.median - 49.5).abs() < 1e-9);
    /// assert!((stats.mean - 49.5).abs() < 1e-9);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_table(table: &FrequencyTable) -> Option<Self> {
        let class_amplitude = table.amplitude?;
        let classes = table
            .rows
            .iter()
            .map(|row| Some((*row.label.as_interval()?, row.fi)))
            .collect::<Option<Vec<_>>>()?;
        let (first, _) = classes.first()?;
        let (last, _) = classes.last()?;
        let (min, max) = (first.lower, last.upper);

        let n = table.n as f64;
        // Weighting by fi / n keeps every partial sum within [min, max].
        let mean = classes
            .iter()
            .map(|(class, fi)| class.class_mark * (*fi as f64 / n))
            .sum::<f64>();

        let variance = if table.n > 1 {
            classes
                .iter()
                .map(|(class, fi)| *fi as f64 * (class.class_mark - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };

        Some(Self {
            mean,
            median: grouped_median(&classes, n, class_amplitude),
            mode: grouped_mode(&classes, class_amplitude),
            min,
            max,
            range: max - min,
            variance,
            std_dev: variance.sqrt(),
            class_amplitude,
        })
    }
}

/// `Li + ((n/2 - F_prev) / fi) * A` over the median class.
#[expect(clippy::cast_precision_loss)]
fn grouped_median(classes: &[(ClassInterval, usize)], n: f64, amplitude: f64) -> f64 {
    let half = n / 2.0;
    let mut prev_cum = 0;
    for (class, fi) in classes {
        let cum = prev_cum + fi;
        if cum as f64 >= half {
            if *fi == 0 {
                return class.lower;
            }
            return class.lower + (half - prev_cum as f64) / *fi as f64 * amplitude;
        }
        prev_cum = cum;
    }
    // Unreachable for a consistent table: the last Fi equals n.
    classes.last().map_or(f64::NAN, |(class, _)| class.lower)
}

/// `Li + d1 / (d1 + d2) * A` over the modal class, where `d1` and `d2` are the
/// frequency excesses over the previous and next classes.
#[expect(clippy::cast_precision_loss)]
fn grouped_mode(classes: &[(ClassInterval, usize)], amplitude: f64) -> f64 {
    let mut modal = 0;
    for (i, (_, fi)) in classes.iter().enumerate() {
        if *fi > classes[modal].1 {
            modal = i;
        }
    }

    let (class, fi) = classes[modal];
    let fi = fi as f64;
    let d1 = if modal == 0 {
        0.0
    } else {
        fi - classes[modal - 1].1 as f64
    };
    let d2 = classes.get(modal + 1).map_or(0.0, |(_, next)| fi - *next as f64);

    if d1 + d2 == 0.0 {
        class.class_mark
    } else {
        class.lower + d1 / (d1 + d2) * amplitude
    }
}

#[cfg(test)]
#[expect(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{
        classify::AnalysisMode, config::PolicyConfig, dataset::Dataset, descriptive::SimpleStats,
    };

    fn grouped_table(values: &[f64], bins: usize) -> FrequencyTable {
        let config = PolicyConfig {
            max_bins: 10_000,
            ..PolicyConfig::default()
        };
        let dataset = Dataset::numeric(values.iter().copied()).unwrap();
        FrequencyTable::build(&dataset, AnalysisMode::Grouped, Some(bins), &config).unwrap()
    }

    #[test]
    fn test_simple_table_has_no_grouped_stats() {
        let dataset = Dataset::numeric([1.0, 2.0]).unwrap();
        let table =
            FrequencyTable::build(&dataset, AnalysisMode::Simple, None, &PolicyConfig::default())
                .unwrap();
        assert_eq!(GroupedStats::from_table(&table), None);
    }

    #[test]
    fn test_uniform_hundred_values() {
        let values = (0..100).map(f64::from).collect::<Vec<_>>();
        let stats = GroupedStats::from_table(&grouped_table(&values, 10)).unwrap();

        assert!((stats.class_amplitude - 9.9).abs() < 1e-12);
        assert_eq!(stats.range, 99.0);
        assert_eq!((stats.min, stats.max), (0.0, 99.0));
        assert!((stats.median - 49.5).abs() < 1e-9);
        // Flat frequencies: the first class wins with d1 + d2 = 0, so the mode
        // is its class mark.
        assert!((stats.mode - 4.95).abs() < 1e-9);
    }

    #[test]
    fn test_interpolated_mode() {
        // Classes [0,2) [2,4) [4,6]: fi = 1, 4, 2.
        let values = [0.0, 2.0, 2.5, 3.0, 3.5, 5.0, 6.0];
        let stats = GroupedStats::from_table(&grouped_table(&values, 3)).unwrap();
        // Modal class [2,4): d1 = 3, d2 = 2, mode = 2 + 3/5 * 2.
        assert!((stats.mode - 3.2).abs() < 1e-12);
        // n/2 = 3.5 lands in [2,4): median = 2 + (3.5 - 1)/4 * 2.
        assert!((stats.median - 3.25).abs() < 1e-12);
        // Class marks 1, 3, 5 weighted 1, 4, 2.
        assert!((stats.mean - 23.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_class_with_zero_frequency_returns_lower_bound() {
        let classes = [
            (
                ClassInterval {
                    lower: 0.0,
                    upper: 1.0,
                    closed: false,
                    class_mark: 0.5,
                },
                0,
            ),
            (
                ClassInterval {
                    lower: 1.0,
                    upper: 2.0,
                    closed: true,
                    class_mark: 1.5,
                },
                0,
            ),
        ];
        // n = 0 makes the first class the median class with fi = 0.
        assert_eq!(grouped_median(&classes, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_standard_deviation_uses_class_marks() {
        // Classes [0,5) [5,10]: marks 2.5 and 7.5, two values each.
        let values = [0.0, 1.0, 9.0, 10.0];
        let stats = GroupedStats::from_table(&grouped_table(&values, 2)).unwrap();
        assert_eq!(stats.mean, 5.0);
        // 4 * 6.25 / 3
        assert!((stats.variance - 25.0 / 3.0).abs() < 1e-12);
        assert!((stats.std_dev - (25.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_has_zero_spread() {
        let stats = GroupedStats::from_table(&grouped_table(&[7.0], 2)).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mean, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.mode, 7.0);
        assert_eq!(stats.class_amplitude, 0.0);
    }

    #[test]
    fn test_extreme_range_keeps_location_finite() {
        let stats = GroupedStats::from_table(&grouped_table(&[-1e308, 0.0, 1e308], 2)).unwrap();
        assert_eq!((stats.min, stats.max), (-1e308, 1e308));
        assert_eq!(stats.class_amplitude, 1e308);
        // Class marks -5e307 and 5e307 weighted 1 and 2.
        assert!((stats.mean - 5e307 / 3.0).abs() < 1e295);
        assert!(stats.median.is_finite());
        assert!(stats.mode.is_finite());
    }

    #[test]
    fn test_approaches_simple_stats_with_one_value_per_class() {
        // 0, 1, ..., 9 with ten classes of width 0.9: each class holds one value.
        let values = (0..10).map(f64::from).collect::<Vec<_>>();
        let grouped = GroupedStats::from_table(&grouped_table(&values, 10)).unwrap();
        let simple = SimpleStats::new(values.iter().copied()).unwrap();

        assert!((grouped.mean - simple.mean).abs() < 0.5);
        assert!((grouped.median - simple.median).abs() < 1.0);
        assert!((grouped.std_dev - simple.std_dev).abs() < 0.5);
        assert_eq!(grouped.range, simple.range);
    }
}
