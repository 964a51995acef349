//! In-Memory Bundle Storage Adapter
//!
//! Serves a fixed input bundle and keeps written results in memory.
//! Useful for testing and development.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::domain::promethee::{InputBundle, PrometheeResult};
use crate::ports::{InputBundleReader, ResultWriter, StorageError};

/// In-memory storage for input bundles and results
#[derive(Debug, Clone, Default)]
pub struct InMemoryBundleStorage {
    bundle: Option<InputBundle>,
    results: Arc<RwLock<Vec<PrometheeResult>>>,
}

impl InMemoryBundleStorage {
    /// Create an empty storage; reading from it returns `NotFound`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage serving `bundle`
    pub fn with_bundle(bundle: InputBundle) -> Self {
        Self {
            bundle: Some(bundle),
            results: Arc::default(),
        }
    }

    /// Get the number of stored results
    pub fn result_count(&self) -> usize {
        self.results.read().map(|results| results.len()).unwrap_or(0)
    }

    /// Get the most recently written result
    pub fn last_result(&self) -> Option<PrometheeResult> {
        self.results
            .read()
            .ok()
            .and_then(|results| results.last().cloned())
    }
}

impl InputBundleReader for InMemoryBundleStorage {
    fn read_bundle(&self) -> Result<InputBundle, StorageError> {
        self.bundle
            .clone()
            .ok_or_else(|| StorageError::NotFound(PathBuf::from("memory://bundle")))
    }
}

impl ResultWriter for InMemoryBundleStorage {
    fn write_result(&self, result: &PrometheeResult) -> Result<Vec<String>, StorageError> {
        let mut results = self
            .results
            .write()
            .map_err(|e| StorageError::IoError(e.to_string()))?;
        results.push(result.clone());
        Ok(vec![format!("memory://results/{}", results.len() - 1)])
    }
}
