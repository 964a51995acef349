//! Result Writer Port - Interface for persisting computed preferences.

use crate::domain::promethee::PrometheeResult;

use super::StorageError;

/// Port for persisting the outputs of one computation
pub trait ResultWriter: Send + Sync {
    /// Write every output present in `result`
    ///
    /// # Returns
    /// The locations written, one per output, in write order
    ///
    /// # Errors
    /// Returns `StorageError` if any output cannot be written
    fn write_result(&self, result: &PrometheeResult) -> Result<Vec<String>, StorageError>;
}
