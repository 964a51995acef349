//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `InputBundleReader` - Loads the raw input bundle
//! - `ResultWriter` - Persists partial and total preferences

mod input_reader;
mod result_writer;
mod storage_error;

pub use input_reader::InputBundleReader;
pub use result_writer::ResultWriter;
pub use storage_error::StorageError;
