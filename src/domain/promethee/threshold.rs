//! Threshold Resolver - constant or linear thresholds evaluated per pair.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

use super::PreferenceDirection;

/// A threshold on one criterion.
///
/// Linear thresholds depend on the worse of the two compared evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    Constant(f64),
    Linear { slope: f64, intercept: f64 },
}

impl Threshold {
    /// Creates a constant threshold.
    pub fn constant(value: f64) -> Self {
        Threshold::Constant(value)
    }

    /// Creates a linear threshold `slope * base + intercept`.
    pub fn linear(slope: f64, intercept: f64) -> Self {
        Threshold::Linear { slope, intercept }
    }

    /// Resolves the threshold for the pair (`ga` favoured, `gb` compared).
    pub fn resolve(&self, direction: PreferenceDirection, ga: f64, gb: f64) -> f64 {
        match *self {
            Threshold::Constant(value) => value,
            Threshold::Linear { slope, intercept } => {
                slope * direction.base_evaluation(ga, gb) + intercept
            }
        }
    }

    /// Resolves an optional threshold; absence stays absent.
    pub fn resolve_optional(
        threshold: Option<&Threshold>,
        direction: PreferenceDirection,
        ga: f64,
        gb: f64,
    ) -> Option<f64> {
        threshold.map(|t| t.resolve(direction, ga, gb))
    }

    /// Checks that every parameter is a finite number.
    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        match *self {
            Threshold::Constant(value) => {
                ValidationError::ensure_finite(field, value)?;
            }
            Threshold::Linear { slope, intercept } => {
                ValidationError::ensure_finite(format!("{}.slope", field), slope)?;
                ValidationError::ensure_finite(format!("{}.intercept", field), intercept)?;
            }
        }
        Ok(())
    }
}

/// The kinds of threshold a criterion may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdKind {
    Preference,
    Indifference,
    Sigma,
    ReinforcedPreference,
}

impl ThresholdKind {
    /// Returns the external label.
    pub fn label(&self) -> &'static str {
        match self {
            ThresholdKind::Preference => "preference",
            ThresholdKind::Indifference => "indifference",
            ThresholdKind::Sigma => "sigma",
            ThresholdKind::ReinforcedPreference => "reinforced_preference",
        }
    }
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The optional thresholds attached to a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionThresholds {
    #[serde(default)]
    pub preference: Option<Threshold>,
    #[serde(default)]
    pub indifference: Option<Threshold>,
    #[serde(default)]
    pub sigma: Option<Threshold>,
    #[serde(default)]
    pub reinforced_preference: Option<Threshold>,
}

impl CriterionThresholds {
    /// Returns the threshold of the given kind, if configured.
    pub fn get(&self, kind: ThresholdKind) -> Option<&Threshold> {
        match kind {
            ThresholdKind::Preference => self.preference.as_ref(),
            ThresholdKind::Indifference => self.indifference.as_ref(),
            ThresholdKind::Sigma => self.sigma.as_ref(),
            ThresholdKind::ReinforcedPreference => self.reinforced_preference.as_ref(),
        }
    }

    /// Resolves one threshold for an ordered pair, floored at zero.
    ///
    /// A linear threshold can go negative for some evaluations; a negative
    /// threshold would make equal evaluations count as a preference.
    pub fn resolve_kind(
        &self,
        kind: ThresholdKind,
        direction: PreferenceDirection,
        ga: f64,
        gb: f64,
    ) -> Option<f64> {
        Threshold::resolve_optional(self.get(kind), direction, ga, gb).map(|value| value.max(0.0))
    }

    /// Resolves `q`, `p` and `s` for one ordered pair of evaluations.
    pub fn resolve(&self, direction: PreferenceDirection, ga: f64, gb: f64) -> ResolvedThresholds {
        ResolvedThresholds {
            indifference: self.resolve_kind(ThresholdKind::Indifference, direction, ga, gb),
            preference: self.resolve_kind(ThresholdKind::Preference, direction, ga, gb),
            sigma: self.resolve_kind(ThresholdKind::Sigma, direction, ga, gb),
        }
    }
}

/// Thresholds resolved for a single ordered pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedThresholds {
    pub indifference: Option<f64>,
    pub preference: Option<f64>,
    pub sigma: Option<f64>,
}
