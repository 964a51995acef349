//! Input Reader Port - Interface for loading input bundles.

use crate::domain::promethee::InputBundle;

use super::StorageError;

/// Port for loading the raw input bundle of one computation
pub trait InputBundleReader: Send + Sync {
    /// Read the input bundle
    ///
    /// The bundle is returned unvalidated; validation belongs to the domain.
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if no bundle exists, or
    /// `StorageError::DeserializationFailed` if it cannot be parsed
    fn read_bundle(&self) -> Result<InputBundle, StorageError>;
}
