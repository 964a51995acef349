//! Criteria as supplied in an input bundle and as used by the engine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, ValidationError};

use super::{
    CriterionThresholds, FunctionSelection, GeneralisedCriterion, OperatingMode,
    PreferenceDirection, PrometheeError, Threshold, ThresholdKind,
};

/// A criterion as described by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub id: CriterionId,
    pub direction: PreferenceDirection,
    pub weight: f64,
    /// Generalised criterion number, used when the bundle selects `specified`.
    #[serde(default)]
    pub function: Option<GeneralisedCriterion>,
    #[serde(default)]
    pub thresholds: CriterionThresholds,
    #[serde(default)]
    pub reinforcement_factor: Option<f64>,
}

impl CriterionSpec {
    /// Creates an unvalidated criterion with no function or thresholds.
    pub fn new(id: CriterionId, direction: PreferenceDirection, weight: f64) -> Self {
        Self {
            id,
            direction,
            weight,
            function: None,
            thresholds: CriterionThresholds::default(),
            reinforcement_factor: None,
        }
    }

    /// Sets the criterion's own generalised criterion.
    pub fn with_function(mut self, function: GeneralisedCriterion) -> Self {
        self.function = Some(function);
        self
    }

    /// Sets the preference threshold.
    pub fn with_preference(mut self, threshold: Threshold) -> Self {
        self.thresholds.preference = Some(threshold);
        self
    }

    /// Sets the indifference threshold.
    pub fn with_indifference(mut self, threshold: Threshold) -> Self {
        self.thresholds.indifference = Some(threshold);
        self
    }

    /// Sets the sigma threshold.
    pub fn with_sigma(mut self, threshold: Threshold) -> Self {
        self.thresholds.sigma = Some(threshold);
        self
    }

    /// Sets the reinforced-preference threshold and reinforcement factor.
    pub fn with_reinforcement(mut self, threshold: Threshold, factor: f64) -> Self {
        self.thresholds.reinforced_preference = Some(threshold);
        self.reinforcement_factor = Some(factor);
        self
    }

    /// Validates the criterion against the program-wide settings.
    pub fn validate(
        self,
        selection: FunctionSelection,
        mode: OperatingMode,
    ) -> Result<Criterion, PrometheeError> {
        let field = format!("criteria[{}]", self.id);

        let weight = ValidationError::ensure_finite(format!("{}.weight", field), self.weight)?;
        if weight < 0.0 {
            return Err(ValidationError::negative(format!("{}.weight", field), weight).into());
        }

        let function = match selection {
            FunctionSelection::Uniform(function) => function,
            FunctionSelection::Specified => self
                .function
                .ok_or_else(|| PrometheeError::MissingGeneralisedCriterion(self.id.clone()))?,
        };
        let max = mode.max_generalised_criterion();
        if function.number() > max {
            return Err(PrometheeError::InvalidGeneralisedCriterion(
                function.number().to_string(),
                max,
            ));
        }

        for kind in [
            ThresholdKind::Preference,
            ThresholdKind::Indifference,
            ThresholdKind::Sigma,
            ThresholdKind::ReinforcedPreference,
        ] {
            if let Some(threshold) = self.thresholds.get(kind) {
                let threshold_field = format!("{}.thresholds.{}", field, kind);
                threshold.validate(&threshold_field)?;
                if let Threshold::Constant(value) = threshold {
                    if *value < 0.0 {
                        return Err(ValidationError::negative(threshold_field, *value).into());
                    }
                }
            }
        }

        let mut required: Vec<ThresholdKind> = function.required_thresholds().to_vec();
        if mode == OperatingMode::ReinforcedPreference {
            required.push(ThresholdKind::ReinforcedPreference);
        }
        for kind in required {
            if self.thresholds.get(kind).is_none() {
                return Err(PrometheeError::MissingThreshold {
                    criterion: self.id,
                    function: function.name(),
                    threshold: kind,
                });
            }
        }

        let reinforcement_factor = match mode {
            OperatingMode::Normal => None,
            OperatingMode::ReinforcedPreference => {
                let factor = self.reinforcement_factor.ok_or_else(|| {
                    ValidationError::missing_value("reinforcement_factors", self.id.as_str())
                })?;
                let factor = ValidationError::ensure_finite(
                    format!("{}.reinforcement_factor", field),
                    factor,
                )?;
                if factor <= 0.0 {
                    return Err(ValidationError::invalid_format(
                        format!("{}.reinforcement_factor", field),
                        "reinforcement factor must be positive",
                    )
                    .into());
                }
                Some(factor)
            }
        };

        Ok(Criterion {
            id: self.id,
            direction: self.direction,
            weight,
            function,
            thresholds: self.thresholds,
            reinforcement_factor,
        })
    }
}

/// A validated criterion with its generalised criterion resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    id: CriterionId,
    direction: PreferenceDirection,
    weight: f64,
    function: GeneralisedCriterion,
    thresholds: CriterionThresholds,
    reinforcement_factor: Option<f64>,
}

impl Criterion {
    pub fn id(&self) -> &CriterionId {
        &self.id
    }

    pub fn direction(&self) -> PreferenceDirection {
        self.direction
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn function(&self) -> GeneralisedCriterion {
        self.function
    }

    pub fn thresholds(&self) -> &CriterionThresholds {
        &self.thresholds
    }

    /// Reinforcement factor; only present in reinforced-preference mode.
    pub fn reinforcement_factor(&self) -> Option<f64> {
        self.reinforcement_factor
    }

    /// Partial preference of `ga` over `gb` on this criterion.
    pub fn preference(&self, ga: f64, gb: f64) -> f64 {
        let d = self.direction.difference(ga, gb);
        let thresholds = self.thresholds.resolve(self.direction, ga, gb);
        self.function.evaluate(d, &thresholds)
    }

    /// Returns true when the advantage of `ga` over `gb` exceeds the
    /// reinforced-preference threshold.
    pub fn is_reinforced(&self, ga: f64, gb: f64) -> bool {
        match self.thresholds.resolve_kind(
            ThresholdKind::ReinforcedPreference,
            self.direction,
            ga,
            gb,
        ) {
            Some(rp) => self.direction.difference(ga, gb) > rp,
            None => false,
        }
    }
}
