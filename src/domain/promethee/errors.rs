//! Engine error taxonomy.

use thiserror::Error;

use crate::domain::foundation::{CriterionId, DomainError, EntityId, ErrorCode, ValidationError};

use super::ThresholdKind;

/// Errors that abort a preference computation.
///
/// Every variant is a configuration error; no partial results are produced
/// once one of them is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrometheeError {
    #[error("Invalid preference direction '{0}', expected MAX or MIN")]
    InvalidDirection(String),

    #[error("Invalid generalised criterion '{0}', expected an integer between 1 and {1}")]
    InvalidGeneralisedCriterion(String, u8),

    #[error("Invalid combination function '{0}', expected multiplication or minimum")]
    InvalidCombinationFunction(String),

    #[error("Invalid operating mode '{0}', expected normal or reinforced_preference")]
    InvalidOperatingMode(String),

    #[error("Invalid comparison mode '{0}', expected alternatives or profiles")]
    InvalidComparisonMode(String),

    #[error("No generalised criterion specified on criterion {0}")]
    MissingGeneralisedCriterion(CriterionId),

    #[error("{function} function specified on criterion {criterion} requires {threshold} threshold")]
    MissingThreshold {
        criterion: CriterionId,
        function: &'static str,
        threshold: ThresholdKind,
    },

    #[error("Weakening and antagonistic effects on criterion {criterion} reach {exposure}, which is not below its weight {weight}")]
    PositiveNetBalance {
        criterion: CriterionId,
        weight: f64,
        exposure: f64,
    },

    #[error("No value computed for pair ({from}, {to})")]
    MissingPair { from: EntityId, to: EntityId },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl PrometheeError {
    /// Returns the error code reported at the application boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            PrometheeError::InvalidDirection(_) => ErrorCode::InvalidDirection,
            PrometheeError::InvalidGeneralisedCriterion(..)
            | PrometheeError::MissingGeneralisedCriterion(_) => {
                ErrorCode::InvalidGeneralisedCriterion
            }
            PrometheeError::InvalidCombinationFunction(_) => ErrorCode::InvalidCombinationFunction,
            PrometheeError::InvalidOperatingMode(_) | PrometheeError::InvalidComparisonMode(_) => {
                ErrorCode::InvalidParameter
            }
            PrometheeError::MissingThreshold { .. } => ErrorCode::MissingThreshold,
            PrometheeError::PositiveNetBalance { .. } => ErrorCode::PositiveNetBalance,
            PrometheeError::MissingPair { .. } => ErrorCode::InternalError,
            PrometheeError::InvalidInput(_) => ErrorCode::ValidationFailed,
        }
    }
}

impl From<PrometheeError> for DomainError {
    fn from(err: PrometheeError) -> Self {
        let error = DomainError::new(err.code(), err.to_string());
        match &err {
            PrometheeError::MissingGeneralisedCriterion(criterion)
            | PrometheeError::MissingThreshold { criterion, .. }
            | PrometheeError::PositiveNetBalance { criterion, .. } => {
                error.with_detail("criterion", criterion.as_str())
            }
            _ => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(id: &str) -> CriterionId {
        CriterionId::new(id).unwrap()
    }

    #[test]
    fn missing_threshold_names_function_and_threshold() {
        let err = PrometheeError::MissingThreshold {
            criterion: criterion("g1"),
            function: "V-Shape",
            threshold: ThresholdKind::Preference,
        };
        assert_eq!(
            err.to_string(),
            "V-Shape function specified on criterion g1 requires preference threshold"
        );
    }

    #[test]
    fn net_balance_error_maps_to_domain_error_with_criterion_detail() {
        let err = PrometheeError::PositiveNetBalance {
            criterion: criterion("g2"),
            weight: 1.0,
            exposure: 1.2,
        };
        let domain: DomainError = err.into();
        assert_eq!(domain.code, ErrorCode::PositiveNetBalance);
        assert_eq!(domain.details.get("criterion"), Some(&"g2".to_string()));
    }

    #[test]
    fn validation_errors_convert_into_invalid_input() {
        let err: PrometheeError = ValidationError::empty_field("alternatives").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }
}
