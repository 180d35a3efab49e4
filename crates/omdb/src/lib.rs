//! OMDb metadata lookup for movielog
//!
//! Thin HTTP client that resolves a free-text title to canonical metadata
//! (title, year, 0-10 rating, optional poster). A missing match is a
//! distinct outcome from an unreachable API so the CLI can report
//! "not found" versus "check your connection".

mod client;
mod error;
mod types;

pub use client::{OmdbClient, DEFAULT_BASE_URL};
pub use error::LookupError;
pub use types::MovieLookup;
