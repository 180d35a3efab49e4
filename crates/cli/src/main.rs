use anyhow::Result;
use clap::{Parser, Subcommand};
use movielog_storage::CatalogStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "movielog")]
#[command(about = "Personal movie catalog with stats and website generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the catalog
    List,
    /// Add a movie, resolving metadata via OMDb unless given manually
    Add {
        title: String,
        /// Skip the OMDb lookup and store this year
        #[arg(long, requires = "rating")]
        year: Option<i64>,
        /// Skip the OMDb lookup and store this rating
        #[arg(long, requires = "year")]
        rating: Option<f64>,
        /// Poster URL for a manual add
        #[arg(long)]
        poster: Option<String>,
    },
    /// Delete a movie by exact title
    Delete { title: String },
    /// Update the rating of a movie by exact title
    Update { title: String, rating: f64 },
    /// Average, median and tie-aware best/worst ratings
    Stats,
    /// Pick one random movie
    Random,
    /// Case-insensitive substring search over titles
    Search { query: String },
    /// List movies sorted by rating, highest first
    Sorted,
    /// Generate the static HTML site from the catalog
    Website {
        /// Output directory for index.html
        #[arg(short, long, default_value = "static")]
        output: PathBuf,
        /// Template file overriding the built-in one
        #[arg(long)]
        template: Option<PathBuf>,
    },
}

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("MOVIELOG_DB") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movielog")
        .join("movies.db")
}

fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let cli = Cli::parse();
    let db_path = get_db_path();
    ensure_db_dir(&db_path)?;

    let store = CatalogStore::new(&db_path)?;

    match cli.command {
        None => commands::menu::run_menu(&store).await?,
        Some(Commands::List) => commands::catalog::run_list(&store)?,
        Some(Commands::Add { title, year, rating, poster }) => {
            commands::catalog::run_add(&store, &title, year, rating, poster).await?;
        }
        Some(Commands::Delete { title }) => commands::catalog::run_delete(&store, &title)?,
        Some(Commands::Update { title, rating }) => {
            commands::catalog::run_update(&store, &title, rating)?;
        }
        Some(Commands::Stats) => commands::reports::run_stats(&store)?,
        Some(Commands::Random) => commands::catalog::run_random(&store)?,
        Some(Commands::Search { query }) => commands::reports::run_search(&store, &query)?,
        Some(Commands::Sorted) => commands::reports::run_sorted(&store)?,
        Some(Commands::Website { output, template }) => {
            commands::website::run_website(&store, &output, template.as_deref())?;
        }
    }

    Ok(())
}
