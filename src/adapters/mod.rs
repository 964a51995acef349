//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Bundle readers and result writers (file, in-memory)

pub mod storage;

pub use storage::{FileBundleStorage, InMemoryBundleStorage};
