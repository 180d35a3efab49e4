//! Static site generation from the full catalog snapshot.

use anyhow::{Context, Result};
use movielog_site::{render_index, DEFAULT_PAGE_TITLE, DEFAULT_TEMPLATE};
use movielog_storage::CatalogStore;
use std::path::Path;

pub(crate) fn run_website(
    store: &CatalogStore,
    output_dir: &Path,
    template_path: Option<&Path>,
) -> Result<()> {
    let catalog = store.list()?;

    let template = match template_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let html = render_index(&template, DEFAULT_PAGE_TITLE, &catalog);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output dir {}", output_dir.display()))?;
    let output_path = output_dir.join("index.html");
    std::fs::write(&output_path, html)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("Website was generated successfully.");
    Ok(())
}
