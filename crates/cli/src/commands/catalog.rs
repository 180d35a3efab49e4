//! Mutating catalog commands and plain listing.
//!
//! Store outcomes are converted into one-line messages here; duplicate
//! titles and missing records are reported, never propagated as faults.

use anyhow::Result;
use movielog_core::Movie;
use movielog_omdb::{LookupError, OmdbClient, DEFAULT_BASE_URL};
use movielog_storage::CatalogStore;

pub(crate) fn run_list(store: &CatalogStore) -> Result<()> {
    let catalog = store.list()?;
    println!("{} movies in total", catalog.len());
    for (title, entry) in &catalog {
        println!("{} ({}): {}", title, entry.year, entry.rating);
    }
    Ok(())
}

fn get_api_key() -> Result<String> {
    std::env::var("OMDB_API_KEY")
        .map_err(|_| anyhow::anyhow!("OMDB_API_KEY environment variable must be set"))
}

fn get_base_url() -> String {
    std::env::var("OMDB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Adds a movie. With `year` and `rating` supplied the record is stored
/// as-is; otherwise the title goes through the OMDb lookup first.
pub(crate) async fn run_add(
    store: &CatalogStore,
    title: &str,
    year: Option<i64>,
    rating: Option<f64>,
    poster: Option<String>,
) -> Result<()> {
    let movie = match (year, rating) {
        (Some(year), Some(rating)) => {
            Movie { title: title.to_string(), year, rating, poster_url: poster }
        }
        _ => {
            // Cheap local check first so a duplicate does not burn an API call.
            if store.list()?.contains_key(title) {
                println!("Movie '{title}' already exists.");
                return Ok(());
            }
            let client = OmdbClient::new(get_api_key()?, get_base_url())?;
            let found = match client.lookup(title).await {
                Ok(found) => found,
                Err(LookupError::NoMatch(_)) => {
                    println!("Could not find this title via OMDb.");
                    return Ok(());
                }
                Err(e) if e.is_unreachable() => {
                    tracing::debug!(error = %e, "OMDb unreachable");
                    println!("Network/API error. Please check your internet connection.");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            Movie {
                title: found.title,
                year: found.year,
                rating: found.rating,
                poster_url: found.poster_url,
            }
        }
    };

    match store.add(&movie) {
        Ok(()) => println!("Movie '{}' added successfully.", movie.title),
        Err(e) if e.is_duplicate() => println!("Movie '{}' already exists.", movie.title),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

pub(crate) fn run_delete(store: &CatalogStore, title: &str) -> Result<()> {
    match store.delete(title) {
        Ok(()) => println!("Movie '{title}' deleted successfully."),
        Err(e) if e.is_not_found() => println!("No movie found with title '{title}'."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

pub(crate) fn run_update(store: &CatalogStore, title: &str, rating: f64) -> Result<()> {
    match store.update_rating(title, rating) {
        Ok(()) => println!("Movie '{title}' updated successfully."),
        Err(e) if e.is_not_found() => println!("No movie found with title '{title}'."),
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

pub(crate) fn run_random(store: &CatalogStore) -> Result<()> {
    match store.random()? {
        Some(movie) => println!(
            "Your movie for tonight: {} ({}), rated {}",
            movie.title, movie.year, movie.rating
        ),
        None => println!("No movies available."),
    }
    Ok(())
}
