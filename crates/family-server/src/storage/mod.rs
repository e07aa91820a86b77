//! Storage layer
//!
//! Members live in memory only and are discarded on shutdown.

pub mod memory;

pub use memory::MemoryStore;
