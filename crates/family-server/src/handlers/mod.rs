//! HTTP handlers

pub mod health;
pub mod members;
pub mod sitemap;

pub use health::health;
pub use sitemap::sitemap;
