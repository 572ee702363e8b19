// Box-plot rule: anything beyond 1.5 IQR from the quartiles is an outlier.
use super::*;
use crate::error::OutlierError;
use crate::stats::Statistics;

pub struct QuantileRange;

const FENCE_FACTOR: f64 = 1.5;

impl QuantileRange {
    /// Acceptance range `[q1 - 1.5 * iqr, q3 + 1.5 * iqr]`, where `q1` and
    /// `q3` are the sample quantiles at `fractions.low` and `fractions.high`.
    /// An empty sample yields `NaN` fences.
    pub fn fences(sample: &[f64], fractions: Bounds) -> Result<Bounds> {
        for &fraction in &[fractions.low, fractions.high] {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(OutlierError::FractionOutOfRange(fraction));
            }
        }
        let q1 = sample.quantile(fractions.low);
        let q3 = sample.quantile(fractions.high);
        let iqr = q3 - q1;
        log::trace!("q1 = {}, q3 = {}, iqr = {}", q1, q3, iqr);
        Ok(Bounds::new(q1 - FENCE_FACTOR * iqr, q3 + FENCE_FACTOR * iqr))
    }
}

impl OutlierDetector for QuantileRange {
    const METHOD: Method = Method::QuantileRange;

    fn classify(sample: &[f64], fractions: Bounds) -> Result<Vec<bool>> {
        let fences = Self::fences(sample, fractions)?;
        Ok(sample
            .iter()
            .map(|&x| x < fences.low || x > fences.high)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0]
    }

    #[test]
    fn test_flags_extreme_value() {
        let mask = detect::<QuantileRange>(&sample(), None).unwrap();
        let mut expected = vec![false; 9];
        expected.push(true);
        assert_eq!(mask, expected);
    }

    #[test]
    fn test_fences() {
        let fences = QuantileRange::fences(&sample(), Bounds::new(0.25, 0.75)).unwrap();
        assert_eq!(fences, Bounds::new(-3.5, 14.5));
    }

    #[test]
    fn test_fence_edges_are_inclusive() {
        // q1 = 3.25, q3 = 7.75 -> fences (-3.5, 14.5)
        let mut values = sample();
        values[9] = 14.5;
        let fences = QuantileRange::fences(&values, Bounds::new(0.25, 0.75)).unwrap();
        assert!(fences.high >= 14.5);
        let mask = QuantileRange::classify(&values, Bounds::new(0.25, 0.75)).unwrap();
        assert!(mask.iter().all(|&flagged| !flagged));
    }

    #[test]
    fn test_translation_invariant() {
        let base = sample();
        let shifted = base.iter().map(|x| x + 1024.0).collect::<Vec<f64>>();
        assert_eq!(
            detect::<QuantileRange>(&base, None).unwrap(),
            detect::<QuantileRange>(&shifted, None).unwrap()
        );
    }

    #[test]
    fn test_zero_iqr_collapses_range() {
        let values = vec![5.0, 5.0, 5.0, 5.0, 5.0, 9.0];
        let mask = detect::<QuantileRange>(&values, None).unwrap();
        assert_eq!(mask, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(detect::<QuantileRange>(&[], None).unwrap(), Vec::<bool>::new());
        assert_eq!(detect::<QuantileRange>(&[42.0], None).unwrap(), vec![false]);
    }

    #[test]
    fn test_fraction_out_of_range() {
        let spec = BoundSpec::from(0.25);
        assert_eq!(
            detect::<QuantileRange>(&sample(), Some(&spec)),
            Err(OutlierError::FractionOutOfRange(-0.25))
        );
        let spec = BoundSpec::pair(0.25, 1.5);
        assert_eq!(
            detect::<QuantileRange>(&sample(), Some(&spec)),
            Err(OutlierError::FractionOutOfRange(1.5))
        );
    }

    #[test]
    fn test_input_untouched() {
        let values = vec![9.0, 1.0, 100.0, 4.0];
        let copy = values.clone();
        detect::<QuantileRange>(&values, None).unwrap();
        assert_eq!(values, copy);
    }
}
