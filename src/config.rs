use crate::boundary::{BoundSpec, Method};
use crate::error::Result;
use crate::treatment::{apply_treatment, Cap, OutputType, Treated, Treatment, TreatmentOptions};
use serde::{Deserialize, Serialize};

/// One detection + treatment run, as read from a config document. Every
/// field is optional; an empty document flags quantile-range outliers with
/// the default fractions and returns the raw mask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlierConfig {
    pub method: Method,
    pub bounds: Option<BoundSpec>,
    // parsed on use so an unknown mode is a configuration error, not a parse error
    pub treatment: String,
    pub cap: Option<Cap>,
    pub output: OutputType,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            bounds: None,
            treatment: Treatment::default().to_string(),
            cap: None,
            output: OutputType::default(),
        }
    }
}

impl OutlierConfig {
    pub fn options(&self) -> TreatmentOptions {
        TreatmentOptions {
            cap: self.cap.unwrap_or_default(),
            output: self.output,
        }
    }

    pub fn run(&self, sample: &[f64]) -> Result<Treated> {
        let treatment: Treatment = self.treatment.parse()?;
        let mask = self.method.detect(sample, self.bounds.as_ref())?;
        apply_treatment(sample, &mask, treatment, &self.options())
    }
}
