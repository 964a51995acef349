//! Preference computation handlers.

mod compute_preferences;

pub use compute_preferences::{
    ComputePreferencesCommand, ComputePreferencesHandler, ComputePreferencesResult,
};
