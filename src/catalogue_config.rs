//! # Catalogue Configuration Module
//!
//! This module defines where the entry catalogue is read from and the
//! defaults used by the query surface.

use std::env;
use std::path::PathBuf;

use crate::temperature_model::Category;

/// Environment variable naming a directory of catalogue JSON files
pub const DATA_DIR_ENV: &str = "COOKING_TEMPS_DATA_DIR";

/// Extension of catalogue source files in a data directory
pub const SOURCE_EXTENSION: &str = "json";

/// Category lists in catalogue order. Entries are concatenated in this order.
pub const DEFAULT_SOURCES: [&str; 7] = [
    "poultry",
    "beef",
    "pork",
    "seafood",
    "eggs",
    "vegetables",
    "grains",
];

/// File name of a catalogue source inside a data directory
pub fn source_file_name(source: &str) -> String {
    format!("{source}.{SOURCE_EXTENSION}")
}

/// Where to load the catalogue from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueConfig {
    /// Source names, concatenated in order
    pub sources: Vec<String>,
    /// Directory holding `<source>.json` files. `None` uses the embedded data.
    pub data_dir: Option<PathBuf>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            data_dir: None,
        }
    }
}

impl CatalogueConfig {
    /// Default sources, with the data directory taken from `COOKING_TEMPS_DATA_DIR` if set
    pub fn from_env() -> Self {
        Self::from_data_dir_var(env::var(DATA_DIR_ENV).ok())
    }

    /// Default sources, with the data directory taken from a `COOKING_TEMPS_DATA_DIR` value
    ///
    /// A missing or blank value keeps the embedded catalogue.
    pub fn from_data_dir_var(value: Option<String>) -> Self {
        let data_dir = value
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Self {
            data_dir,
            ..Default::default()
        }
    }

    /// Use a data directory instead of the embedded catalogue
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Path of one source file inside the data directory
    pub fn source_path(&self, source: &str) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(source_file_name(source)))
    }
}

/// Options narrowing a full-text search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Only keep candidates in this category
    pub category: Option<Category>,
    /// Keep at most this many ranked results. `Some(0)` and `None` keep all.
    pub limit: Option<usize>,
}

impl SearchOptions {
    /// Search within one category, without a limit
    pub fn in_category(category: Category) -> Self {
        Self {
            category: Some(category),
            limit: None,
        }
    }

    /// Keep at most `limit` results (0 keeps all)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The limit to apply, if any
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit.filter(|&limit| limit > 0)
    }
}
