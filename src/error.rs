use thiserror::Error;

pub type Result<T> = std::result::Result<T, OutlierError>;

/// The three failure classes a caller can branch on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    DegenerateInput,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlierError {
    #[error("boundary must be two-dimensional, got {0} value(s)")]
    BoundaryArity(usize),

    #[error("quantile fraction {0} lies outside [0, 1]")]
    FractionOutOfRange(f64),

    #[error("unknown treatment mode `{0}`, expected one of raw, trim, cap")]
    UnknownTreatment(String),

    #[error("mask has {mask} entries but the sample has {sample}")]
    MaskLength { sample: usize, mask: usize },

    #[error("capping bounds ({low}, {high}) are not ordered")]
    UnorderedCap { low: f64, high: f64 },

    #[error("cannot cast {0} to a 64-bit integer")]
    NonIntegral(f64),

    #[error("standard scores are undefined: sample has mean {mean} and standard deviation {std_dev}")]
    DegenerateInput { mean: f64, std_dev: f64 },

    #[error("{0}")]
    Unsupported(&'static str),
}

impl OutlierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OutlierError::DegenerateInput { .. } => ErrorKind::DegenerateInput,
            OutlierError::Unsupported(_) => ErrorKind::Unsupported,
            _ => ErrorKind::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(OutlierError::BoundaryArity(3).kind(), ErrorKind::Configuration);
        assert_eq!(
            OutlierError::UnknownTreatment("winsor".to_owned()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            OutlierError::DegenerateInput { mean: 1.0, std_dev: 0.0 }.kind(),
            ErrorKind::DegenerateInput
        );
        assert_eq!(OutlierError::Unsupported("no").kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            OutlierError::BoundaryArity(1).to_string(),
            "boundary must be two-dimensional, got 1 value(s)"
        );
        assert!(OutlierError::UnknownTreatment("winsor".to_owned())
            .to_string()
            .contains("`winsor`"));
    }
}
