//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file` - JSON file settings store
//! - `memory` - In-memory settings store
//! - `snapshot` - Board source backed by a saved JSON snapshot
//! - `trello/` - Trello REST wire types and client (client behind the `trello` feature)

pub mod file;
pub mod memory;
pub mod snapshot;
pub mod trello;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use snapshot::SnapshotSource;
