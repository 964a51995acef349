//! Storage Adapters
//!
//! Implementations of the InputBundleReader and ResultWriter ports.
//!
//! ## Available Adapters
//!
//! - **FileBundleStorage** - Reads JSON/YAML bundles, writes JSON result files
//! - **InMemoryBundleStorage** - Keeps bundles and results in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileBundleStorage, InMemoryBundleStorage};
//!
//! // Production: file-based storage
//! let storage = FileBundleStorage::new("./data/bundle.yaml", "./out");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryBundleStorage::with_bundle(bundle);
//! ```

mod file_bundle_storage;
mod in_memory_storage;

pub use file_bundle_storage::{
    FileBundleStorage, DISCORDANCE_FILE, PARTIAL_DISCORDANCE_FILE, PARTIAL_PREFERENCES_FILE,
    PREFERENCES_FILE, PREFERENCES_WITH_DISCORDANCE_FILE,
};
pub use in_memory_storage::InMemoryBundleStorage;
