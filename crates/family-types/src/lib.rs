//! Family Types - Pure type definitions
//!
//! This crate contains only plain data types shared by the store and the
//! HTTP layer, with no async runtime dependencies.

pub mod member;

pub use member::*;
