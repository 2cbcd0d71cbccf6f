//! # Query Engine
//!
//! Pure read-only queries over a [`Catalogue`]: lookups by name, id and
//! category, safe-minimum and doneness temperatures, cooking-instruction
//! resolution and ranked full-text search.
//!
//! Every query is available both as a method on `Catalogue` and as a free
//! function of the same name that reads the shared embedded catalogue.
//!
//! ## Not-found handling
//!
//! Singular lookups return `Option` and plural lookups return a `Vec` that may
//! be empty. Unknown ids, methods, doneness levels and categories all behave
//! as "no match"; nothing here returns an error.
//!
//! ## Usage
//!
//! ```rust
//! use cooking_temperatures::query::{search, cooking_instruction};
//! use cooking_temperatures::catalogue_config::SearchOptions;
//! use cooking_temperatures::temperature_model::CookingMethod;
//!
//! let results = search("shrimp", &SearchOptions::default());
//! assert_eq!(results[0].name, "Shrimp");
//!
//! let instruction =
//!     cooking_instruction("beef_steak_ribeye", CookingMethod::PanSear, Some("1.5 inches"))
//!         .unwrap();
//! assert_eq!(instruction.portion_description, "1.5 inches thick");
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalogue::{self, Catalogue};
use crate::catalogue_config::SearchOptions;
use crate::temperature::convert_temperature;
use crate::temperature_model::{
    Category, CookingMethod, DonenessLevel, Entry, TemperatureUnit, TimeRange,
};

/// Safe minimum temperature in a requested unit, with its rest time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeTemp {
    pub temp: i32,
    pub rest_minutes: u32,
}

/// A method instruction together with the portion it was resolved from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInstruction {
    pub method: CookingMethod,
    pub appliance_temp: i32,
    pub appliance_temp_unit: TemperatureUnit,
    pub time_minutes: TimeRange,
    pub notes: Option<String>,
    /// The portion actually matched, which may differ from the hint
    pub portion_description: String,
}

/// Lowercase and trim a query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Human-readable label for a category
pub fn category_name(category: Category) -> &'static str {
    category.display_name()
}

/// Ranking keys for one search candidate
struct SearchRank<'a> {
    entry: &'a Entry,
    name: String,
    exact: bool,
    starts_with: bool,
    name_contains: bool,
}

impl<'a> SearchRank<'a> {
    fn new(entry: &'a Entry, query: &str) -> Self {
        let name = entry.name.to_lowercase();
        Self {
            entry,
            exact: name == query,
            starts_with: name.starts_with(query),
            name_contains: name.contains(query),
            name,
        }
    }

    /// Exact name, then name prefix, then name over alias-only, then name A-Z
    fn compare(&self, other: &Self) -> Ordering {
        other
            .exact
            .cmp(&self.exact)
            .then_with(|| other.starts_with.cmp(&self.starts_with))
            .then_with(|| other.name_contains.cmp(&self.name_contains))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl Catalogue {
    /// First entry, in catalogue order, whose name or alias contains the query
    ///
    /// Matching is a case-insensitive substring test after trimming.
    pub fn find_by_name(&self, query: &str) -> Option<&Entry> {
        let normalized = normalize_query(query);
        let found = self
            .entries()
            .iter()
            .find(|entry| entry.matches_query(&normalized));

        debug!(
            "find_by_name('{}') -> {}",
            normalized,
            found.map_or("none", |e| e.id.as_str())
        );
        found
    }

    /// Entry with exactly this id
    pub fn find_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries().iter().find(|entry| entry.id == id)
    }

    /// All entries in a category, catalogue order preserved
    pub fn find_by_category(&self, category: Category) -> Vec<&Entry> {
        self.entries()
            .iter()
            .filter(|entry| entry.category == category)
            .collect()
    }

    /// Owned copy of every entry
    ///
    /// Changes to the returned vector never reach the catalogue.
    pub fn all_entries(&self) -> Vec<Entry> {
        self.entries().to_vec()
    }

    /// Distinct categories present, in order of first occurrence
    pub fn all_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for entry in self.entries() {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        categories
    }

    /// Safe minimum temperature of an entry in the requested unit
    pub fn safe_minimum_temp(&self, id: &str, unit: TemperatureUnit) -> Option<SafeTemp> {
        let entry = self.find_by_id(id)?;

        Some(SafeTemp {
            temp: convert_temperature(entry.safe_minimum_temp, entry.safe_minimum_temp_unit, unit),
            rest_minutes: entry.rest_time_minutes,
        })
    }

    /// Internal temperature for a doneness level in the requested unit
    ///
    /// `None` when the id is unknown, the entry has no doneness levels, or the
    /// level is not defined for it.
    pub fn doneness_temp(
        &self,
        id: &str,
        level: DonenessLevel,
        unit: TemperatureUnit,
    ) -> Option<i32> {
        let spec = self.find_by_id(id)?.doneness(level)?;
        Some(convert_temperature(spec.internal_temp, spec.internal_temp_unit, unit))
    }

    /// Like [`Catalogue::doneness_temp`] with the level given as a tag string
    pub fn doneness_temp_by_tag(
        &self,
        id: &str,
        level: &str,
        unit: TemperatureUnit,
    ) -> Option<i32> {
        let level = level.parse::<DonenessLevel>().ok()?;
        self.doneness_temp(id, level, unit)
    }

    /// Distinct methods across all portions of an entry, first-seen order
    pub fn cooking_methods(&self, id: &str) -> Vec<CookingMethod> {
        self.find_by_id(id)
            .map(Entry::cooking_methods)
            .unwrap_or_default()
    }

    /// Resolve the instruction for a method on one portion of an entry
    ///
    /// With a hint, the first portion whose description contains it
    /// (case-insensitive) is used; otherwise, or when no portion matches, the
    /// first portion is used. The method must exist on that portion.
    pub fn cooking_instruction(
        &self,
        id: &str,
        method: CookingMethod,
        portion_hint: Option<&str>,
    ) -> Option<ResolvedInstruction> {
        let entry = self.find_by_id(id)?;

        let portion = match portion_hint {
            Some(hint) => entry.portion_matching(hint).or_else(|| {
                debug!(
                    "No portion of {} matches '{}', using default portion",
                    entry.id, hint
                );
                entry.default_portion()
            }),
            None => entry.default_portion(),
        }?;

        let instruction = portion.instruction(method)?;
        trace!(
            "Resolved {} for {} on portion '{}'",
            method,
            entry.id,
            portion.portion_description
        );

        Some(ResolvedInstruction {
            method: instruction.method,
            appliance_temp: instruction.appliance_temp,
            appliance_temp_unit: instruction.appliance_temp_unit,
            time_minutes: instruction.time_minutes,
            notes: instruction.notes.clone(),
            portion_description: portion.portion_description.clone(),
        })
    }

    /// Ranked name/alias search
    ///
    /// A blank query matches nothing. Candidates contain the query in their
    /// name or an alias, are optionally narrowed to one category, then ranked:
    /// exact name match first, then names starting with the query, then
    /// entries whose name (not just an alias) contains it, then by name.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<&Entry> {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<SearchRank<'_>> = self
            .entries()
            .iter()
            .filter(|entry| options.category.map_or(true, |c| entry.category == c))
            .filter(|entry| entry.matches_query(&normalized))
            .map(|entry| SearchRank::new(entry, &normalized))
            .collect();

        debug!(
            "search('{}') found {} candidates (category: {:?}, limit: {:?})",
            normalized,
            ranked.len(),
            options.category,
            options.limit
        );

        ranked.sort_by(|a, b| a.compare(b));

        if let Some(limit) = options.effective_limit() {
            ranked.truncate(limit);
        }

        ranked.into_iter().map(|rank| rank.entry).collect()
    }
}

/// See [`Catalogue::find_by_name`]
pub fn find_by_name(query: &str) -> Option<&'static Entry> {
    catalogue::shared().find_by_name(query)
}

/// See [`Catalogue::find_by_id`]
pub fn find_by_id(id: &str) -> Option<&'static Entry> {
    catalogue::shared().find_by_id(id)
}

/// See [`Catalogue::find_by_category`]
pub fn find_by_category(category: Category) -> Vec<&'static Entry> {
    catalogue::shared().find_by_category(category)
}

/// See [`Catalogue::all_entries`]
pub fn all_entries() -> Vec<Entry> {
    catalogue::shared().all_entries()
}

/// See [`Catalogue::all_categories`]
pub fn all_categories() -> Vec<Category> {
    catalogue::shared().all_categories()
}

/// See [`Catalogue::safe_minimum_temp`]
pub fn safe_minimum_temp(id: &str, unit: TemperatureUnit) -> Option<SafeTemp> {
    catalogue::shared().safe_minimum_temp(id, unit)
}

/// See [`Catalogue::doneness_temp`]
pub fn doneness_temp(id: &str, level: DonenessLevel, unit: TemperatureUnit) -> Option<i32> {
    catalogue::shared().doneness_temp(id, level, unit)
}

/// See [`Catalogue::doneness_temp_by_tag`]
pub fn doneness_temp_by_tag(id: &str, level: &str, unit: TemperatureUnit) -> Option<i32> {
    catalogue::shared().doneness_temp_by_tag(id, level, unit)
}

/// See [`Catalogue::cooking_methods`]
pub fn cooking_methods(id: &str) -> Vec<CookingMethod> {
    catalogue::shared().cooking_methods(id)
}

/// See [`Catalogue::cooking_instruction`]
pub fn cooking_instruction(
    id: &str,
    method: CookingMethod,
    portion_hint: Option<&str>,
) -> Option<ResolvedInstruction> {
    catalogue::shared().cooking_instruction(id, method, portion_hint)
}

/// See [`Catalogue::search`]
pub fn search(query: &str, options: &SearchOptions) -> Vec<&'static Entry> {
    catalogue::shared().search(query, options)
}
