//! Command handlers.

pub mod preferences;

pub use preferences::{
    ComputePreferencesCommand, ComputePreferencesHandler, ComputePreferencesResult,
};
