//! ComputePreferencesHandler - Command handler for one preference computation.
//!
//! Reads the input bundle, validates it, runs the engine and persists every
//! computed matrix. Engine and storage failures surface as `DomainError`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::DomainError;
use crate::domain::promethee::{PrometheeEngine, PrometheeError, PrometheeResult};
use crate::ports::{InputBundleReader, ResultWriter};

/// Command to compute preferences for the configured bundle.
#[derive(Debug, Clone, Default)]
pub struct ComputePreferencesCommand {
    /// Also compute discordance and discordance-capped preferences.
    pub compute_discordance: bool,
}

/// Result of a successful computation.
#[derive(Debug, Clone)]
pub struct ComputePreferencesResult {
    pub result: PrometheeResult,
    /// Locations written by the result writer.
    pub written: Vec<String>,
}

/// Handler for computing preferences.
pub struct ComputePreferencesHandler {
    reader: Arc<dyn InputBundleReader>,
    writer: Arc<dyn ResultWriter>,
}

impl ComputePreferencesHandler {
    pub fn new(reader: Arc<dyn InputBundleReader>, writer: Arc<dyn ResultWriter>) -> Self {
        Self { reader, writer }
    }

    pub fn handle(
        &self,
        cmd: ComputePreferencesCommand,
    ) -> Result<ComputePreferencesResult, DomainError> {
        // 1. Load and validate inputs
        let bundle = self.reader.read_bundle()?;
        let inputs = bundle.validate().map_err(log_rejection)?;

        // 2. Run the engine
        let result = if cmd.compute_discordance {
            PrometheeEngine::compute_with_discordance(&inputs)
        } else {
            PrometheeEngine::compute(&inputs)
        }
        .map_err(log_rejection)?;

        // 3. Persist outputs
        let written = self.writer.write_result(&result)?;

        info!(
            pairs = result.preferences.len(),
            outputs = written.len(),
            discordance = cmd.compute_discordance,
            "Preferences computed and written"
        );

        Ok(ComputePreferencesResult { result, written })
    }
}

fn log_rejection(err: PrometheeError) -> DomainError {
    warn!(code = %err.code(), error = %err, "Computation rejected");
    err.into()
}
