use crate::error::{OutlierError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Treatment {
    /// Hand back the outlier mask itself.
    Raw,
    /// Drop flagged observations, keeping the order of the rest.
    Trim,
    /// Replace flagged observations, or clip the whole sample; see [`Cap`].
    Cap,
    /// Never supported; bucketize the sample outside this crate.
    Discretize,
}

impl Default for Treatment {
    fn default() -> Self {
        Treatment::Raw
    }
}

impl FromStr for Treatment {
    type Err = OutlierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "boolean" | "bool" => Ok(Treatment::Raw),
            "trim" | "trimming" => Ok(Treatment::Trim),
            "cap" | "capping" => Ok(Treatment::Cap),
            "discretize" | "discretization" => Ok(Treatment::Discretize),
            _ => Err(OutlierError::UnknownTreatment(s.to_owned())),
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Treatment::Raw => "raw",
            Treatment::Trim => "trim",
            Treatment::Cap => "cap",
            Treatment::Discretize => "discretize",
        };
        write!(f, "{}", name)
    }
}

/// What capping does.
///
/// `Value(c)` replaces every flagged observation with `c` and leaves the rest
/// alone. `Clip(low, high)` ignores the mask and clips *every* observation
/// into `[low, high]`; those bounds are independent of the detection bounds.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cap {
    Value(f64),
    Clip(f64, f64),
}

impl Default for Cap {
    fn default() -> Self {
        Cap::Value(f64::NAN)
    }
}

/// Element type of the treated result. `Bool` leaves the result in its
/// natural form: masks stay masks and numeric results are not narrowed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Bool,
    Integer,
    Float,
}

impl Default for OutputType {
    fn default() -> Self {
        OutputType::Bool
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct TreatmentOptions {
    pub cap: Cap,
    pub output: OutputType,
}

impl TreatmentOptions {
    pub fn with_cap(mut self, cap: Cap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_output(mut self, output: OutputType) -> Self {
        self.output = output;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Treated {
    Mask(Vec<bool>),
    Values(Vec<f64>),
    Integers(Vec<i64>),
}

impl Treated {
    pub fn len(&self) -> usize {
        match self {
            Treated::Mask(v) => v.len(),
            Treated::Values(v) => v.len(),
            Treated::Integers(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_mask(&self) -> Option<&[bool]> {
        match self {
            Treated::Mask(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Treated::Values(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            Treated::Integers(v) => Some(v),
            _ => None,
        }
    }

    fn cast(self, output: OutputType) -> Result<Treated> {
        let treated = match (self, output) {
            (treated, OutputType::Bool) => treated,
            (Treated::Mask(mask), OutputType::Integer) => {
                Treated::Integers(mask.into_iter().map(i64::from).collect())
            }
            (Treated::Mask(mask), OutputType::Float) => {
                Treated::Values(mask.into_iter().map(|m| f64::from(u8::from(m))).collect())
            }
            (Treated::Values(values), OutputType::Integer) => Treated::Integers(
                values
                    .into_iter()
                    // i64::MAX rounds up to 2^63, which is already out of range
                    .map(|x| match x >= i64::MIN as f64 && x < i64::MAX as f64 {
                        true => Ok(x.trunc() as i64),
                        false => Err(OutlierError::NonIntegral(x)),
                    })
                    .collect::<Result<Vec<i64>>>()?,
            ),
            (treated, _) => treated,
        };
        Ok(treated)
    }
}

/// Count of flagged observations in a mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutlierSummary {
    pub flagged: usize,
    pub total: usize,
}

impl OutlierSummary {
    pub fn from_mask(mask: &[bool]) -> Self {
        Self {
            flagged: mask.iter().filter(|&&flagged| flagged).count(),
            total: mask.len(),
        }
    }

    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.flagged as f64 / self.total as f64
    }
}

impl fmt::Display for OutlierSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "found {} outliers among {} observations ({:.2}%)",
            self.flagged,
            self.total,
            100.0 * self.fraction()
        )
    }
}

const DISCRETIZE_UNSUPPORTED: &str =
    "discretization is not supported, bucketize the sample externally";

/// Applies `treatment` to `sample` given its outlier `mask`, then casts the
/// result to `options.output`. Always returns fresh buffers.
pub fn apply_treatment(
    sample: &[f64],
    mask: &[bool],
    treatment: Treatment,
    options: &TreatmentOptions,
) -> Result<Treated> {
    if treatment == Treatment::Discretize {
        return Err(OutlierError::Unsupported(DISCRETIZE_UNSUPPORTED));
    }
    if sample.len() != mask.len() {
        return Err(OutlierError::MaskLength {
            sample: sample.len(),
            mask: mask.len(),
        });
    }
    log::debug!("{}, applying {} treatment", OutlierSummary::from_mask(mask), treatment);

    let treated = match (treatment, options.cap) {
        (Treatment::Raw, _) => Treated::Mask(mask.to_vec()),
        (Treatment::Trim, _) => Treated::Values(
            sample
                .iter()
                .zip_eq(mask)
                .filter(|&(_, &flagged)| !flagged)
                .map(|(&x, _)| x)
                .collect(),
        ),
        (Treatment::Cap, Cap::Value(cap)) => Treated::Values(
            sample
                .iter()
                .zip_eq(mask)
                .map(|(&x, &flagged)| if flagged { cap } else { x })
                .collect(),
        ),
        (Treatment::Cap, Cap::Clip(low, high)) => Treated::Values(clip(sample, low, high)?),
        (Treatment::Discretize, _) => {
            return Err(OutlierError::Unsupported(DISCRETIZE_UNSUPPORTED))
        }
    };
    treated.cast(options.output)
}

fn clip(sample: &[f64], low: f64, high: f64) -> Result<Vec<f64>> {
    if !(low <= high) {
        return Err(OutlierError::UnorderedCap { low, high });
    }
    Ok(sample
        .iter()
        .map(|&x| match x {
            x if x < low => low,
            x if x > high => high,
            x => x,
        })
        .collect())
}
