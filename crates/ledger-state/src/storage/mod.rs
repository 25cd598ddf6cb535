//! Key-value storage scopes.
//!
//! This module provides:
//! - **KeyValueStore**: the get/set/remove seam the state containers persist through
//! - **MemoryStore**: process-lifetime storage
//! - **FileStore**: file-per-key storage for session and durable scopes

mod file;
mod memory;
pub mod paths;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
