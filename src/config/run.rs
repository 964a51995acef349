//! Run configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where a run reads its bundle and writes its results
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Input bundle file (`.json`, `.yaml` or `.yml`)
    pub input_path: Option<PathBuf>,

    /// Directory result files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Get the input path, failing if none is configured
    pub fn require_input_path(&self) -> Result<&Path, ValidationError> {
        self.input_path
            .as_deref()
            .ok_or(ValidationError::MissingRequired("run.input_path"))
    }

    /// Validate run configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let input = self.require_input_path()?;
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("run.output_dir"));
        }
        if input == self.output_dir {
            return Err(ValidationError::OutputOverlapsInput);
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}
