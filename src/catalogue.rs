//! # Entry Catalogue
//!
//! Loads the immutable in-memory catalogue of food entries. Each category list
//! is a JSON array of entries; the lists are concatenated in a fixed order and
//! validated once. The catalogue is never mutated after it is built.
//!
//! The default catalogue is compiled into the crate and shared process-wide
//! through [`shared`]. A catalogue can also be built from arbitrary JSON
//! sources or read from a directory of `<source>.json` files.
//!
//! ## Usage
//!
//! ```rust
//! use cooking_temperatures::catalogue;
//!
//! let catalogue = catalogue::shared();
//! assert!(catalogue.find_by_id("beef_steak_ribeye").is_some());
//! ```

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalogue_config::{source_file_name, CatalogueConfig, DEFAULT_SOURCES};
use crate::catalogue_errors::CatalogueError;
use crate::temperature_model::Entry;

/// Category lists compiled into the crate, in catalogue order
static EMBEDDED_SOURCES: [(&str, &str); 7] = [
    ("poultry", include_str!("../data/poultry.json")),
    ("beef", include_str!("../data/beef.json")),
    ("pork", include_str!("../data/pork.json")),
    ("seafood", include_str!("../data/seafood.json")),
    ("eggs", include_str!("../data/eggs.json")),
    ("vegetables", include_str!("../data/vegetables.json")),
    ("grains", include_str!("../data/grains.json")),
];

const ID_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

lazy_static! {
    static ref ID_REGEX: Regex = Regex::new(ID_PATTERN).expect("Entry id pattern should be valid");
    static ref SHARED: Catalogue =
        Catalogue::embedded().expect("Embedded catalogue data should be valid");
}

/// The process-wide catalogue built from the embedded data
pub fn shared() -> &'static Catalogue {
    &SHARED
}

/// Read-only collection of entries in catalogue order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    entries: Vec<Entry>,
}

impl Catalogue {
    /// Build the catalogue from the data compiled into the crate
    pub fn embedded() -> Result<Self, CatalogueError> {
        debug_assert_eq!(EMBEDDED_SOURCES.len(), DEFAULT_SOURCES.len());
        Self::from_sources(&EMBEDDED_SOURCES)
    }

    /// Build a catalogue from `(name, json)` pairs, concatenated in order
    ///
    /// Each JSON document must be an array of entries.
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self, CatalogueError> {
        let mut entries = Vec::new();

        for (name, json) in sources {
            let list: Vec<Entry> =
                serde_json::from_str(json).map_err(|err| CatalogueError::Parse {
                    source_name: name.to_string(),
                    message: err.to_string(),
                })?;
            tracing::debug!(source = *name, entries = list.len(), "Parsed catalogue source");
            entries.extend(list);
        }

        Self::from_entries(entries)
    }

    /// Build a catalogue from already-parsed entries
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, CatalogueError> {
        validate_entries(&entries)?;

        let catalogue = Self { entries };
        info!(
            "Catalogue loaded with {} entries across {} categories",
            catalogue.len(),
            catalogue.all_categories().len()
        );
        Ok(catalogue)
    }

    /// Read `<source>.json` for each source name from a directory
    ///
    /// A file that cannot be read fails with [`CatalogueError::Io`] under a
    /// context naming the path.
    pub fn from_dir(dir: &Path, sources: &[String]) -> Result<Self> {
        info!("Loading catalogue from directory: {}", dir.display());

        let mut documents = Vec::with_capacity(sources.len());
        for source in sources {
            let path = dir.join(source_file_name(source));
            let json = fs::read_to_string(&path)
                .map_err(CatalogueError::Io)
                .with_context(|| format!("Failed to read catalogue source {}", path.display()))?;
            documents.push((source.as_str(), json));
        }

        let borrowed: Vec<(&str, &str)> = documents
            .iter()
            .map(|(name, json)| (*name, json.as_str()))
            .collect();

        Self::from_sources(&borrowed)
            .with_context(|| format!("Invalid catalogue in {}", dir.display()))
    }

    /// Build the catalogue a configuration describes
    pub fn load(config: &CatalogueConfig) -> Result<Self> {
        if let Some(dir) = &config.data_dir {
            return Self::from_dir(dir, &config.sources);
        }

        let mut selected = Vec::with_capacity(config.sources.len());
        for source in &config.sources {
            let embedded = EMBEDDED_SOURCES
                .iter()
                .find(|(name, _)| *name == source.as_str())
                .with_context(|| format!("No embedded catalogue source named '{source}'"))?;
            selected.push(*embedded);
        }

        Ok(Self::from_sources(&selected)?)
    }

    /// Entries in catalogue order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check catalogue-wide invariants before the catalogue is exposed
fn validate_entries(entries: &[Entry]) -> Result<(), CatalogueError> {
    let mut seen_ids = HashSet::new();

    for entry in entries {
        if !ID_REGEX.is_match(&entry.id) {
            return Err(CatalogueError::InvalidId(entry.id.clone()));
        }
        if !seen_ids.insert(entry.id.as_str()) {
            return Err(CatalogueError::DuplicateId(entry.id.clone()));
        }
        if entry.name.trim().is_empty() {
            return Err(CatalogueError::EmptyName(entry.id.clone()));
        }

        if let Some(levels) = &entry.doneness_levels {
            let mut seen_levels = HashSet::new();
            for spec in levels {
                if !seen_levels.insert(spec.level) {
                    return Err(CatalogueError::DuplicateDoneness {
                        id: entry.id.clone(),
                        level: spec.level.to_string(),
                    });
                }
            }
        }

        for portion in &entry.cooking_instructions {
            if portion.methods.iter().any(|m| !m.time_minutes.is_valid()) {
                return Err(CatalogueError::InvalidTimeRange {
                    id: entry.id.clone(),
                    portion: portion.portion_description.clone(),
                });
            }
        }

        if entry.cooking_instructions.is_empty() {
            debug!("Entry {} has no cooking instructions", entry.id);
        }
    }

    Ok(())
}
