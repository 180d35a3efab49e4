//! Interactive menu loop with validated prompts.
//!
//! Mirrors the one-shot subcommands; every store outcome is printed and
//! the loop continues. EOF on stdin exits cleanly.

use anyhow::Result;
use movielog_storage::CatalogStore;
use std::io::{self, BufRead, Write};
use std::path::Path;

use super::{catalog, reports, website};

fn print_menu() {
    println!("********** My Movies Database **********\n");
    println!("Menu:");
    println!("1. List movies");
    println!("2. Add movie");
    println!("3. Delete movie");
    println!("4. Update movie");
    println!("5. Stats");
    println!("6. Random movie");
    println!("7. Search movie");
    println!("8. Movies sorted by rating");
    println!("9. Generate website");
    println!("0. Exit\n");
}

/// Prompts and reads one trimmed line; `None` on EOF.
fn prompt(msg: &str) -> Option<String> {
    print!("{msg}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn pause() {
    let _ = prompt("Press enter to continue\n");
}

/// Asks until a non-empty title is given.
fn get_valid_title() -> Option<String> {
    loop {
        let title = prompt("Enter movie name: ")?;
        if !title.is_empty() {
            return Some(title);
        }
        println!("Title cannot be empty.");
    }
}

/// Asks until a rating in [0, 10] is given.
fn get_valid_rating() -> Option<f64> {
    loop {
        let raw = prompt("Enter movie rating (0-10): ")?;
        match raw.parse::<f64>() {
            Ok(rating) if (0.0..=10.0).contains(&rating) => return Some(rating),
            Ok(_) => println!("Rating must be between 0 and 10."),
            Err(_) => println!("Please enter a number like 7.5"),
        }
    }
}

pub(crate) async fn run_menu(store: &CatalogStore) -> Result<()> {
    loop {
        print_menu();
        let Some(choice) = prompt("Enter choice (0-9): ") else {
            break;
        };
        println!();

        match choice.as_str() {
            "1" => {
                catalog::run_list(store)?;
                pause();
            }
            "2" => {
                let Some(title) = get_valid_title() else { break };
                if let Err(e) = catalog::run_add(store, &title, None, None, None).await {
                    println!("Error: {e}");
                }
                pause();
            }
            "3" => {
                let Some(title) = get_valid_title() else { break };
                catalog::run_delete(store, &title)?;
                pause();
            }
            "4" => {
                let Some(title) = get_valid_title() else { break };
                let Some(rating) = get_valid_rating() else { break };
                catalog::run_update(store, &title, rating)?;
                pause();
            }
            "5" => {
                reports::run_stats(store)?;
                pause();
            }
            "6" => {
                catalog::run_random(store)?;
                pause();
            }
            "7" => {
                let Some(query) = prompt("Enter part of movie name: ") else { break };
                reports::run_search(store, &query)?;
                pause();
            }
            "8" => {
                reports::run_sorted(store)?;
                pause();
            }
            "9" => {
                if let Err(e) = website::run_website(store, Path::new("static"), None) {
                    println!("Error: {e}");
                }
                pause();
            }
            "0" => {
                println!("Bye!");
                break;
            }
            _ => {
                println!("Invalid choice. Please enter 0-9.\n");
                pause();
            }
        }
    }
    Ok(())
}
