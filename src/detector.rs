use crate::boundary::{self, BoundSpec, Bounds, Method};
use crate::error::Result;

pub mod quantile;
pub mod score;

pub use quantile::QuantileRange;
pub use score::StandardScore;

/// A univariate detector: maps a sample and resolved bounds to an outlier
/// mask of the same length and order. Implementations never touch the input.
pub trait OutlierDetector {
    const METHOD: Method;
    fn classify(sample: &[f64], bounds: Bounds) -> Result<Vec<bool>>;
}

/// Resolves `spec` against the detector's defaults, then classifies.
pub fn detect<D>(sample: &[f64], spec: Option<&BoundSpec>) -> Result<Vec<bool>>
where
    D: OutlierDetector,
{
    let bounds = boundary::resolve(spec, D::METHOD)?;
    D::classify(sample, bounds)
}

impl Method {
    pub fn detect(self, sample: &[f64], spec: Option<&BoundSpec>) -> Result<Vec<bool>> {
        match self {
            Method::QuantileRange => detect::<QuantileRange>(sample, spec),
            Method::StandardScore => detect::<StandardScore>(sample, spec),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_dispatch_matches_generic() {
        let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
        assert_eq!(
            Method::QuantileRange.detect(&sample, None).unwrap(),
            detect::<QuantileRange>(&sample, None).unwrap()
        );
        assert_eq!(
            Method::StandardScore.detect(&sample, None).unwrap(),
            detect::<StandardScore>(&sample, None).unwrap()
        );
    }

    #[test]
    fn test_mask_matches_sample_length() {
        let samples: Vec<Vec<f64>> = vec![
            vec![],
            vec![1.0, 2.0],
            vec![-4.0, 0.5, 0.5, 3.0, 17.0, -2.0, 8.0],
        ];
        for sample in samples {
            assert_eq!(detect::<QuantileRange>(&sample, None).unwrap().len(), sample.len());
        }
        let sample = vec![-4.0, 0.5, 0.5, 3.0, 17.0, -2.0, 8.0];
        assert_eq!(detect::<StandardScore>(&sample, None).unwrap().len(), sample.len());
    }

    #[test]
    fn test_bad_spec_fails_before_detection() {
        let spec = BoundSpec::from(vec![0.25]);
        assert!(detect::<QuantileRange>(&[1.0, 2.0], Some(&spec)).is_err());
        assert!(Method::StandardScore.detect(&[1.0, 2.0], Some(&spec)).is_err());
    }
}
