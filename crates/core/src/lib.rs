//! Core types for movielog
//!
//! This crate contains domain types shared across all other crates.

mod env_config;
mod movie;

pub use env_config::*;
pub use movie::*;
