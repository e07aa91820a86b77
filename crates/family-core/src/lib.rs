//! Family Core Library
//!
//! The member collection, its id allocation policy, and the storage port
//! the HTTP layer talks to.

// Re-export pure types from family-types
pub use family_types::*;

pub mod error;
pub mod family;
pub mod ports;

pub use error::{FamilyError, Result};
pub use family::Family;
pub use ports::MemberStore;
