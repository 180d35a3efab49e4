//! Read-only reporting commands over a catalog snapshot.

use anyhow::Result;
use movielog_stats::{average, extremes, median, search_titles, sorted_by_rating};
use movielog_storage::CatalogStore;

pub(crate) fn run_stats(store: &CatalogStore) -> Result<()> {
    let catalog = store.list()?;
    if catalog.is_empty() {
        println!("No movies in the database.");
        return Ok(());
    }

    let ratings: Vec<f64> = catalog.values().map(|entry| entry.rating).collect();
    // Guarded by the emptiness check above; the analytics also return None
    // on empty input rather than faulting.
    if let (Some(avg), Some(med), Some(ext)) =
        (average(&ratings), median(&ratings), extremes(&catalog))
    {
        println!("Average rating: {avg:.2}");
        println!("Median rating: {med:.2}");
        println!("Best rating: {} - {}", ext.best_rating, ext.best_titles.join(", "));
        println!("Worst rating: {} - {}", ext.worst_rating, ext.worst_titles.join(", "));
    }
    Ok(())
}

pub(crate) fn run_search(store: &CatalogStore, query: &str) -> Result<()> {
    let catalog = store.list()?;
    let matches = search_titles(&catalog, query);
    if matches.is_empty() {
        println!("No matches found.");
        return Ok(());
    }
    for (title, entry) in matches {
        println!("{}: {} ({})", title, entry.rating, entry.year);
    }
    Ok(())
}

pub(crate) fn run_sorted(store: &CatalogStore) -> Result<()> {
    let catalog = store.list()?;
    for (title, entry) in sorted_by_rating(&catalog) {
        println!("{}: {} ({})", title, entry.rating, entry.year);
    }
    Ok(())
}
