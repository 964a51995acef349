//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for optional outputs
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Compute discordance and discordance-capped preferences
    #[serde(default)]
    pub compute_discordance: bool,

    /// Write the per-criterion matrices next to the totals
    #[serde(default = "default_write_partial_preferences")]
    pub write_partial_preferences: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            compute_discordance: false,
            write_partial_preferences: default_write_partial_preferences(),
        }
    }
}

fn default_write_partial_preferences() -> bool {
    true
}
