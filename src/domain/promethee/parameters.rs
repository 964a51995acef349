//! Closed parameter enumerations and their external labels.
//!
//! Every enum converts from its label with `FromStr`, failing with the
//! matching [`PrometheeError`] on anything it does not recognise. Serde
//! deserialization goes through the same conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{GeneralisedCriterion, PrometheeError};

/// Preference direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PreferenceDirection {
    #[serde(rename = "MAX")]
    Max,
    #[serde(rename = "MIN")]
    Min,
}

impl PreferenceDirection {
    /// Returns the external label.
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceDirection::Max => "MAX",
            PreferenceDirection::Min => "MIN",
        }
    }

    /// Signed advantage of `ga` over `gb` under this direction.
    pub fn difference(&self, ga: f64, gb: f64) -> f64 {
        match self {
            PreferenceDirection::Max => ga - gb,
            PreferenceDirection::Min => gb - ga,
        }
    }

    /// The worse of the two evaluations, used as the base of linear thresholds.
    pub fn base_evaluation(&self, ga: f64, gb: f64) -> f64 {
        match self {
            PreferenceDirection::Max => ga.min(gb),
            PreferenceDirection::Min => ga.max(gb),
        }
    }
}

impl FromStr for PreferenceDirection {
    type Err = PrometheeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAX" => Ok(PreferenceDirection::Max),
            "MIN" => Ok(PreferenceDirection::Min),
            other => Err(PrometheeError::InvalidDirection(other.to_string())),
        }
    }
}

impl TryFrom<String> for PreferenceDirection {
    type Error = PrometheeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for PreferenceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Operating mode of the aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum OperatingMode {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "reinforced_preference")]
    ReinforcedPreference,
}

impl OperatingMode {
    /// Returns the external label.
    pub fn label(&self) -> &'static str {
        match self {
            OperatingMode::Normal => "normal",
            OperatingMode::ReinforcedPreference => "reinforced_preference",
        }
    }

    /// Highest generalised criterion number allowed in this mode.
    ///
    /// The Gaussian shape has no preference threshold to bound the
    /// reinforced-preference threshold against.
    pub fn max_generalised_criterion(&self) -> u8 {
        match self {
            OperatingMode::Normal => 6,
            OperatingMode::ReinforcedPreference => 5,
        }
    }
}

impl FromStr for OperatingMode {
    type Err = PrometheeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(OperatingMode::Normal),
            "reinforced_preference" => Ok(OperatingMode::ReinforcedPreference),
            other => Err(PrometheeError::InvalidOperatingMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for OperatingMode {
    type Error = PrometheeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Combination function used to fuse two partial preferences in an
/// interaction term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ZFunction {
    #[default]
    #[serde(rename = "multiplication")]
    Multiplication,
    #[serde(rename = "minimum")]
    Minimum,
}

impl ZFunction {
    /// Returns the external label.
    pub fn label(&self) -> &'static str {
        match self {
            ZFunction::Multiplication => "multiplication",
            ZFunction::Minimum => "minimum",
        }
    }

    /// Combines two partial preference degrees.
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            ZFunction::Multiplication => x * y,
            ZFunction::Minimum => x.min(y),
        }
    }
}

impl FromStr for ZFunction {
    type Err = PrometheeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiplication" => Ok(ZFunction::Multiplication),
            "minimum" => Ok(ZFunction::Minimum),
            other => Err(PrometheeError::InvalidCombinationFunction(other.to_string())),
        }
    }
}

impl TryFrom<String> for ZFunction {
    type Error = PrometheeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ZFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which entities are compared against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ComparisonMode {
    /// Every alternative against every alternative.
    #[default]
    #[serde(rename = "alternatives")]
    Alternatives,
    /// Alternatives against profiles (both ways) and profiles against profiles.
    #[serde(rename = "profiles")]
    Profiles,
}

impl ComparisonMode {
    /// Returns the external label.
    pub fn label(&self) -> &'static str {
        match self {
            ComparisonMode::Alternatives => "alternatives",
            ComparisonMode::Profiles => "profiles",
        }
    }
}

impl FromStr for ComparisonMode {
    type Err = PrometheeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alternatives" => Ok(ComparisonMode::Alternatives),
            "profiles" => Ok(ComparisonMode::Profiles),
            other => Err(PrometheeError::InvalidComparisonMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for ComparisonMode {
    type Error = PrometheeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Program-wide choice of generalised criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FunctionSelection {
    /// Each criterion names its own function.
    Specified,
    /// The same function applies to every criterion.
    Uniform(GeneralisedCriterion),
}

impl Default for FunctionSelection {
    fn default() -> Self {
        FunctionSelection::Specified
    }
}

impl FromStr for FunctionSelection {
    type Err = PrometheeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "specified" {
            return Ok(FunctionSelection::Specified);
        }
        s.parse().map(FunctionSelection::Uniform)
    }
}

impl TryFrom<String> for FunctionSelection {
    type Error = PrometheeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FunctionSelection> for String {
    fn from(selection: FunctionSelection) -> Self {
        selection.to_string()
    }
}

impl fmt::Display for FunctionSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionSelection::Specified => write!(f, "specified"),
            FunctionSelection::Uniform(function) => write!(f, "{}", function.number()),
        }
    }
}
