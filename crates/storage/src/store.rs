//! SQLite catalog store.

use movielog_core::{Catalog, Movie, MovieEntry};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::migrations;

/// Handle to the movie catalog.
///
/// Holds a single connection behind a mutex; each operation locks,
/// executes one statement, and releases on every exit path. Single-row
/// statements commit atomically, so no operation can leave the catalog
/// partially modified.
pub struct CatalogStore {
    conn: Arc<Mutex<Connection>>,
}

fn lock_conn<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex.lock().map_err(|e: PoisonError<_>| StoreError::LockPoisoned(e.to_string()))
}

impl CatalogStore {
    /// Opens (or creates) the database at `db_path` and brings the schema
    /// up to date. Re-running on an already-migrated database is a no-op.
    pub fn new(db_path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path).map_err(StoreError::Database)?;
        migrations::run_migrations(&conn).map_err(StoreError::Migration)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Returns the full catalog as a title-keyed snapshot.
    pub fn list(&self) -> Result<Catalog, StoreError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare("SELECT title, year, rating, poster_url FROM movies")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                MovieEntry { year: row.get(1)?, rating: row.get(2)?, poster_url: row.get(3)? },
            ))
        })?;

        let mut catalog = Catalog::new();
        for row in rows {
            let (title, entry) = row?;
            catalog.insert(title, entry);
        }
        Ok(catalog)
    }

    /// Inserts a new record. Fails with [`StoreError::Duplicate`] when the
    /// title already exists; the existing record is left untouched.
    pub fn add(&self, movie: &Movie) -> Result<(), StoreError> {
        let conn = lock_conn(&self.conn)?;
        conn.execute(
            "INSERT INTO movies (title, year, rating, poster_url) VALUES (?1, ?2, ?3, ?4)",
            params![movie.title, movie.year, movie.rating, movie.poster_url],
        )?;
        Ok(())
    }

    /// Removes the record whose title matches exactly.
    pub fn delete(&self, title: &str) -> Result<(), StoreError> {
        let conn = lock_conn(&self.conn)?;
        let affected = conn.execute("DELETE FROM movies WHERE title = ?1", params![title])?;
        if affected == 0 {
            return Err(StoreError::NotFound(title.to_owned()));
        }
        Ok(())
    }

    /// Sets the rating on the matching record. Title, year and poster are
    /// never touched by this statement.
    pub fn update_rating(&self, title: &str, rating: f64) -> Result<(), StoreError> {
        let conn = lock_conn(&self.conn)?;
        let affected = conn.execute(
            "UPDATE movies SET rating = ?1 WHERE title = ?2",
            params![rating, title],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound(title.to_owned()));
        }
        Ok(())
    }

    /// Picks one uniformly random record, or `None` on an empty catalog.
    pub fn random(&self) -> Result<Option<Movie>, StoreError> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare(
            "SELECT title, year, rating, poster_url FROM movies ORDER BY RANDOM() LIMIT 1",
        )?;
        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Movie {
                title: row.get(0)?,
                year: row.get(1)?,
                rating: row.get(2)?,
                poster_url: row.get(3)?,
            }))
        } else {
            Ok(None)
        }
    }
}
