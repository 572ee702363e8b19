use super::*;
use crate::error::OutlierError;
use crate::stats::Statistics;

pub struct StandardScore;

impl StandardScore {
    /// Standard score of every observation against the population standard
    /// deviation. A zero-variance sample fails with `DegenerateInput`
    /// instead of producing `NaN` scores; an empty sample has no scores.
    pub fn scores(sample: &[f64]) -> Result<Vec<f64>> {
        if sample.is_empty() {
            return Ok(Vec::new());
        }
        let mean = sample.average();
        let std_dev = sample.std_dev();
        // a constant sample can still show rounding noise in std_dev
        let constant = sample.iter().all(|&x| x == sample[0]);
        if constant || !(std_dev > 0.0 && std_dev.is_finite()) {
            return Err(OutlierError::DegenerateInput { mean, std_dev });
        }
        log::trace!("mean = {}, std_dev = {}", mean, std_dev);
        Ok(sample.iter().map(|x| (x - mean) / std_dev).collect())
    }
}

impl OutlierDetector for StandardScore {
    const METHOD: Method = Method::StandardScore;

    fn classify(sample: &[f64], thresholds: Bounds) -> Result<Vec<bool>> {
        Ok(Self::scores(sample)?
            .into_iter()
            .map(|z| z < thresholds.low || z > thresholds.high)
            .collect())
    }
}
