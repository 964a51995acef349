//! Command-line entry point: computes preferences for the configured bundle.

use std::sync::Arc;

use tracing::{error, info};

use promethee_preference::adapters::storage::FileBundleStorage;
use promethee_preference::application::{ComputePreferencesCommand, ComputePreferencesHandler};
use promethee_preference::config::{AppConfig, LoggingConfig};

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt().with_env_filter(logging.env_filter());
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    if let Err(err) = config.validate() {
        error!(error = %err, "Invalid configuration");
        return Err(err.into());
    }

    let input_path = config.run.require_input_path()?;
    let storage = Arc::new(
        FileBundleStorage::new(input_path, &config.run.output_dir)
            .with_partial_outputs(config.features.write_partial_preferences),
    );
    let handler = ComputePreferencesHandler::new(storage.clone(), storage);

    info!(
        input = %input_path.display(),
        output_dir = %config.run.output_dir.display(),
        "Starting preference computation"
    );

    let outcome = handler
        .handle(ComputePreferencesCommand {
            compute_discordance: config.features.compute_discordance,
        })
        .map_err(|err| {
            error!(code = %err.code, error = %err, "Preference computation failed");
            err
        })?;

    for path in &outcome.written {
        info!(path = %path, "Output written");
    }
    Ok(())
}
