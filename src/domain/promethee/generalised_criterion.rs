//! Generalised Criterion Function Library.
//!
//! The six canonical PROMETHEE preference shapes. Each maps the signed
//! advantage `d` of one entity over another on a criterion, together with the
//! resolved thresholds, to a preference degree in `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{PrometheeError, ResolvedThresholds, ThresholdKind};

/// Generalised criterion shapes, numbered 1 to 6 for external configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GeneralisedCriterion {
    Usual,
    UShape,
    VShape,
    Level,
    VShapeIndifference,
    Gaussian,
}

impl GeneralisedCriterion {
    /// All shapes in numeric order.
    pub const ALL: [GeneralisedCriterion; 6] = [
        GeneralisedCriterion::Usual,
        GeneralisedCriterion::UShape,
        GeneralisedCriterion::VShape,
        GeneralisedCriterion::Level,
        GeneralisedCriterion::VShapeIndifference,
        GeneralisedCriterion::Gaussian,
    ];

    /// Creates a shape from its external number.
    pub fn from_number(number: u8) -> Result<Self, PrometheeError> {
        match number {
            1 => Ok(GeneralisedCriterion::Usual),
            2 => Ok(GeneralisedCriterion::UShape),
            3 => Ok(GeneralisedCriterion::VShape),
            4 => Ok(GeneralisedCriterion::Level),
            5 => Ok(GeneralisedCriterion::VShapeIndifference),
            6 => Ok(GeneralisedCriterion::Gaussian),
            other => Err(PrometheeError::InvalidGeneralisedCriterion(other.to_string(), 6)),
        }
    }

    /// Returns the external number.
    pub fn number(&self) -> u8 {
        match self {
            GeneralisedCriterion::Usual => 1,
            GeneralisedCriterion::UShape => 2,
            GeneralisedCriterion::VShape => 3,
            GeneralisedCriterion::Level => 4,
            GeneralisedCriterion::VShapeIndifference => 5,
            GeneralisedCriterion::Gaussian => 6,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            GeneralisedCriterion::Usual => "Usual",
            GeneralisedCriterion::UShape => "U-Shape",
            GeneralisedCriterion::VShape => "V-Shape",
            GeneralisedCriterion::Level => "Level",
            GeneralisedCriterion::VShapeIndifference => "V-Shape With Indifference",
            GeneralisedCriterion::Gaussian => "Gaussian",
        }
    }

    /// Thresholds that must be configured for this shape.
    pub fn required_thresholds(&self) -> &'static [ThresholdKind] {
        match self {
            GeneralisedCriterion::Usual => &[],
            GeneralisedCriterion::UShape => &[ThresholdKind::Indifference],
            GeneralisedCriterion::VShape => &[ThresholdKind::Preference],
            GeneralisedCriterion::Level | GeneralisedCriterion::VShapeIndifference => {
                &[ThresholdKind::Indifference, ThresholdKind::Preference]
            }
            GeneralisedCriterion::Gaussian => &[ThresholdKind::Sigma],
        }
    }

    /// Computes the preference degree for the signed difference `d`.
    ///
    /// Thresholds the shape does not use are ignored. A required threshold
    /// that is absent counts as zero; validation rejects such criteria before
    /// this is ever reached.
    pub fn evaluate(&self, d: f64, thresholds: &ResolvedThresholds) -> f64 {
        let q = thresholds.indifference.unwrap_or(0.0);
        let p = thresholds.preference.unwrap_or(0.0);
        let s = thresholds.sigma.unwrap_or(0.0);

        match self {
            GeneralisedCriterion::Usual => {
                if d <= 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            GeneralisedCriterion::UShape => {
                if d <= q {
                    0.0
                } else {
                    1.0
                }
            }
            GeneralisedCriterion::VShape => {
                if d <= 0.0 {
                    0.0
                } else if d <= p {
                    d / p
                } else {
                    1.0
                }
            }
            GeneralisedCriterion::Level => {
                if d <= q {
                    0.0
                } else if d <= p {
                    0.5
                } else {
                    1.0
                }
            }
            GeneralisedCriterion::VShapeIndifference => {
                if d <= q {
                    0.0
                } else if d <= p {
                    (d - q) / (p - q)
                } else {
                    1.0
                }
            }
            GeneralisedCriterion::Gaussian => {
                if d <= 0.0 {
                    0.0
                } else {
                    1.0 - (-(d * d) / (2.0 * s * s)).exp()
                }
            }
        }
    }
}

impl TryFrom<u8> for GeneralisedCriterion {
    type Error = PrometheeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<GeneralisedCriterion> for u8 {
    fn from(function: GeneralisedCriterion) -> Self {
        function.number()
    }
}

impl FromStr for GeneralisedCriterion {
    type Err = PrometheeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| PrometheeError::InvalidGeneralisedCriterion(s.to_string(), 6))
            .and_then(Self::from_number)
    }
}

impl fmt::Display for GeneralisedCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.number())
    }
}
