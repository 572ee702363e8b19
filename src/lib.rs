//! Outlier detection and treatment for one-dimensional samples.
//!
//! Two detectors, [`QuantileRange`] (box-plot rule) and [`StandardScore`]
//! (z-score thresholds), turn a sample into an outlier mask. The mask is then
//! handed to [`apply_treatment`] to trim, cap or return it as-is.
//!
//! ```
//! use outlier_treat::{quantile_outliers, Treated, Treatment};
//!
//! let sample = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
//! let trimmed = quantile_outliers(&sample, None, Some(Treatment::Trim), None).unwrap();
//! assert_eq!(trimmed, Treated::Values(sample[..9].to_vec()));
//! ```

pub mod boundary;
pub mod config;
pub mod detector;
pub mod error;
pub mod stats;
pub mod treatment;

pub use crate::boundary::{resolve, BoundSpec, Bounds, Method};
pub use crate::config::OutlierConfig;
pub use crate::detector::{detect, OutlierDetector, QuantileRange, StandardScore};
pub use crate::error::{ErrorKind, OutlierError, Result};
pub use crate::stats::Statistics;
pub use crate::treatment::{
    apply_treatment, Cap, OutlierSummary, OutputType, Treated, Treatment, TreatmentOptions,
};

pub fn detect_quantile_outliers(sample: &[f64], bounds: Option<&BoundSpec>) -> Result<Vec<bool>> {
    detect::<QuantileRange>(sample, bounds)
}

pub fn detect_score_outliers(sample: &[f64], bounds: Option<&BoundSpec>) -> Result<Vec<bool>> {
    detect::<StandardScore>(sample, bounds)
}

/// Resolve, detect and treat in one call. `treatment` defaults to the raw
/// mask, `options` to a `NaN` cap with no output cast.
pub fn outliers<D>(
    sample: &[f64],
    bounds: Option<&BoundSpec>,
    treatment: Option<Treatment>,
    options: Option<TreatmentOptions>,
) -> Result<Treated>
where
    D: OutlierDetector,
{
    let mask = detect::<D>(sample, bounds)?;
    apply_treatment(
        sample,
        &mask,
        treatment.unwrap_or_default(),
        &options.unwrap_or_default(),
    )
}

pub fn quantile_outliers(
    sample: &[f64],
    bounds: Option<&BoundSpec>,
    treatment: Option<Treatment>,
    options: Option<TreatmentOptions>,
) -> Result<Treated> {
    outliers::<QuantileRange>(sample, bounds, treatment, options)
}

pub fn score_outliers(
    sample: &[f64],
    bounds: Option<&BoundSpec>,
    treatment: Option<Treatment>,
    options: Option<TreatmentOptions>,
) -> Result<Treated> {
    outliers::<StandardScore>(sample, bounds, treatment, options)
}
