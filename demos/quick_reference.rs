//! # Quick Reference Demo
//!
//! Prints a quick-reference card and ranked search results for a food.
//!
//! ```text
//! cargo run --example quick_reference -- ribeye pan_sear C
//! ```
//!
//! Set `COOKING_TEMPS_DATA_DIR` (or put it in `.env`) to read the catalogue
//! from a directory of JSON files instead of the embedded data.

use anyhow::Result;
use cooking_temperatures::catalogue_config::{CatalogueConfig, SearchOptions};
use cooking_temperatures::icons::icon_for;
use cooking_temperatures::temperature_model::{CookingMethod, TemperatureUnit};
use cooking_temperatures::Catalogue;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv::dotenv().ok();

    let config = CatalogueConfig::from_env();
    let catalogue = Catalogue::load(&config)?;
    info!(entries = catalogue.len(), data_dir = ?config.data_dir, "Catalogue ready");

    let args: Vec<String> = env::args().skip(1).collect();
    let query = args.first().map(String::as_str).unwrap_or("ribeye");
    let method = args
        .get(1)
        .map(|tag| tag.parse::<CookingMethod>())
        .transpose()?;
    let unit = args
        .get(2)
        .map(|tag| tag.parse::<TemperatureUnit>())
        .transpose()?
        .unwrap_or_default();

    match catalogue.quick_reference(query, method, unit) {
        Some(reference) => println!("{reference}"),
        None => println!("No food matches '{query}'"),
    }

    println!("Search results for '{query}':");
    for entry in catalogue.search(query, &SearchOptions::default().with_limit(5)) {
        let icon = icon_for(&entry.id, Some(entry.category)).unwrap_or_default();
        println!("  {} [{}] {}", entry, entry.id, icon);
    }

    Ok(())
}
