//! External collaborators. Both are deliberately thin: the stores never
//! depend on them for correctness.

pub mod api;
pub mod storage;

pub use api::{ApiClient, ApiError};
pub use storage::{KeyValueStore, MemoryKeyValueStore, StorageError};
