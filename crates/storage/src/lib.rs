//! Storage layer for movielog
//!
//! Single-table SQLite store with versioned schema migrations. Every
//! operation is one statement inside one commit; nothing is held across
//! calls.

mod error;
mod migrations;
mod store;
#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use store::CatalogStore;
