use crate::error::{OutlierError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Detection method, used to look up default bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    QuantileRange,
    StandardScore,
}

impl Default for Method {
    fn default() -> Self {
        Method::QuantileRange
    }
}

impl Method {
    /// Quantile fractions for `QuantileRange`, score thresholds for
    /// `StandardScore`.
    pub fn default_bounds(self) -> Bounds {
        match self {
            Method::QuantileRange => Bounds::new(0.25, 0.75),
            Method::StandardScore => Bounds::new(-2.5, 2.5),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Method::QuantileRange => write!(f, "quantile-range"),
            Method::StandardScore => write!(f, "standard-score"),
        }
    }
}

/// A threshold specification as supplied by the caller. A scalar `t` means
/// the symmetric pair `(-t, t)`; a list must hold exactly two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundSpec {
    Scalar(f64),
    Values(Vec<f64>),
}

impl BoundSpec {
    pub fn pair(low: f64, high: f64) -> Self {
        BoundSpec::Values(vec![low, high])
    }
}

impl From<f64> for BoundSpec {
    fn from(t: f64) -> Self {
        BoundSpec::Scalar(t)
    }
}

impl From<(f64, f64)> for BoundSpec {
    fn from((low, high): (f64, f64)) -> Self {
        BoundSpec::pair(low, high)
    }
}

impl From<Vec<f64>> for BoundSpec {
    fn from(values: Vec<f64>) -> Self {
        BoundSpec::Values(values)
    }
}

/// Two-sided bound pair. `low <= high` is a precondition callers are
/// expected to honour; it is not enforced here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Bounds {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Turns an optional specification into concrete bounds, falling back to the
/// method's defaults.
pub fn resolve(spec: Option<&BoundSpec>, method: Method) -> Result<Bounds> {
    let bounds = match spec {
        None => method.default_bounds(),
        Some(BoundSpec::Scalar(t)) => Bounds::new(-t, *t),
        Some(BoundSpec::Values(values)) => match values.as_slice() {
            [low, high] => Bounds::new(*low, *high),
            _ => return Err(OutlierError::BoundaryArity(values.len())),
        },
    };
    log::trace!("{} bounds resolved to ({}, {})", method, bounds.low, bounds.high);
    Ok(bounds)
}
