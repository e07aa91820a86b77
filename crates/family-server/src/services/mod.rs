//! Business logic services

pub mod family_manager;

pub use family_manager::FamilyManager;
