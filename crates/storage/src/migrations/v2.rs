//! Migration v2: nullable poster_url column
//!
//! Databases created before posters were tracked lack this column; the
//! column check makes re-running the migration a clean no-op.

pub(super) const COLUMN: &str = "poster_url";
pub(super) const COLUMN_DEF: &str = "TEXT";
