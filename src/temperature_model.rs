//! # Cooking Temperature Data Model
//!
//! This module defines the data structures for catalogue entries: food items
//! annotated with a safe minimum internal temperature, optional doneness
//! levels, per-portion cooking instructions and visual cues.
//!
//! ## Core Concepts
//!
//! - **Entry**: One catalogued food item with its safety and cooking data
//! - **Portion group**: A cut/size descriptor bundling the methods that apply to it
//! - **Method instruction**: Appliance temperature and time for one method on one portion
//! - **Doneness spec**: A named internal-temperature target (rare, medium, ...)
//!
//! ## Usage
//!
//! ```rust
//! use cooking_temperatures::temperature_model::{Category, CookingMethod, TemperatureUnit};
//!
//! let method: CookingMethod = "pan_sear".parse().unwrap();
//! assert_eq!(method, CookingMethod::PanSear);
//! assert_eq!(Category::SeafoodFish.display_name(), "Fish");
//! assert_eq!(TemperatureUnit::default(), TemperatureUnit::Fahrenheit);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalogue_errors::UnknownTag;
use crate::temperature::Temperature;

/// Temperature scale used by every temperature in the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit
    #[default]
    #[serde(rename = "F")]
    Fahrenheit,
    /// Degrees Celsius
    #[serde(rename = "C")]
    Celsius,
}

/// Closed set of food categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Poultry,
    Beef,
    Pork,
    Lamb,
    SeafoodFish,
    SeafoodShellfish,
    Egg,
    Vegetable,
    Grain,
    Legume,
}

/// Cooking methods an instruction can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingMethod {
    OvenRoast,
    OvenBake,
    PanSear,
    PanFry,
    Grill,
    Broil,
    Poach,
    Simmer,
    Boil,
    Steam,
    SousVide,
    AirFry,
    DeepFry,
    SlowCook,
}

/// Named doneness gradations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonenessLevel {
    Rare,
    MediumRare,
    Medium,
    MediumWell,
    WellDone,
    /// USDA baseline, used where the safe minimum is itself a doneness stage
    SafeMinimum,
}

/// Inclusive cooking time range in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: u32,
    pub max: u32,
}

/// Internal temperature target for one doneness level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonenessSpec {
    pub level: DonenessLevel,
    pub internal_temp: i32,
    pub internal_temp_unit: TemperatureUnit,
    /// What the food looks like at this level (e.g., "Warm red center")
    pub description: String,
}

/// Temperature, time and notes for cooking one portion by one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInstruction {
    pub method: CookingMethod,
    /// Oven, grill, pan or liquid temperature
    pub appliance_temp: i32,
    pub appliance_temp_unit: TemperatureUnit,
    pub time_minutes: TimeRange,
    /// Free-text advice such as "Flip halfway"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A cut or serving size with the methods that apply to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionGroup {
    /// Free-text size descriptor (e.g., "1 inch thick", "whole 4lb bird")
    pub portion_description: String,
    pub methods: Vec<MethodInstruction>,
}

/// One catalogued food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable unique identifier (e.g., "beef_steak_ribeye")
    pub id: String,

    /// Display name (e.g., "Ribeye Steak")
    pub name: String,

    pub category: Category,

    /// Alternate names used for lookup (e.g., "rib eye", "delmonico")
    #[serde(default)]
    pub aliases: Vec<String>,

    /// USDA safe minimum, the non-negotiable baseline
    pub safe_minimum_temp: i32,
    pub safe_minimum_temp_unit: TemperatureUnit,

    /// Post-cook rest; zero when the source data omits it
    #[serde(default)]
    pub rest_time_minutes: u32,

    /// Doneness gradation, absent for foods that are either safe or not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doneness_levels: Option<Vec<DonenessSpec>>,

    #[serde(default)]
    pub cooking_instructions: Vec<PortionGroup>,

    #[serde(default)]
    pub visual_indicators: Vec<String>,

    /// Attribution, e.g. "USDA FSIS"
    #[serde(default)]
    pub sources: Vec<String>,
}

impl TemperatureUnit {
    /// Every unit, in declaration order
    pub const ALL: [TemperatureUnit; 2] = [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius];

    /// The single-letter tag ("F" or "C")
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
        }
    }

    /// Degree symbol plus tag, as used in rendered temperatures
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

impl Category {
    /// Every category, including those with no catalogue members yet
    pub const ALL: [Category; 10] = [
        Category::Poultry,
        Category::Beef,
        Category::Pork,
        Category::Lamb,
        Category::SeafoodFish,
        Category::SeafoodShellfish,
        Category::Egg,
        Category::Vegetable,
        Category::Grain,
        Category::Legume,
    ];

    /// The snake_case tag used in catalogue data
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Poultry => "poultry",
            Category::Beef => "beef",
            Category::Pork => "pork",
            Category::Lamb => "lamb",
            Category::SeafoodFish => "seafood_fish",
            Category::SeafoodShellfish => "seafood_shellfish",
            Category::Egg => "egg",
            Category::Vegetable => "vegetable",
            Category::Grain => "grain",
            Category::Legume => "legume",
        }
    }

    /// Human-readable label for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Poultry => "Poultry",
            Category::Beef => "Beef",
            Category::Pork => "Pork",
            Category::Lamb => "Lamb",
            Category::SeafoodFish => "Fish",
            Category::SeafoodShellfish => "Shellfish",
            Category::Egg => "Eggs",
            Category::Vegetable => "Vegetables",
            Category::Grain => "Grains",
            Category::Legume => "Legumes",
        }
    }
}

impl CookingMethod {
    /// Every cooking method, in declaration order
    pub const ALL: [CookingMethod; 14] = [
        CookingMethod::OvenRoast,
        CookingMethod::OvenBake,
        CookingMethod::PanSear,
        CookingMethod::PanFry,
        CookingMethod::Grill,
        CookingMethod::Broil,
        CookingMethod::Poach,
        CookingMethod::Simmer,
        CookingMethod::Boil,
        CookingMethod::Steam,
        CookingMethod::SousVide,
        CookingMethod::AirFry,
        CookingMethod::DeepFry,
        CookingMethod::SlowCook,
    ];

    /// The snake_case tag used in catalogue data
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingMethod::OvenRoast => "oven_roast",
            CookingMethod::OvenBake => "oven_bake",
            CookingMethod::PanSear => "pan_sear",
            CookingMethod::PanFry => "pan_fry",
            CookingMethod::Grill => "grill",
            CookingMethod::Broil => "broil",
            CookingMethod::Poach => "poach",
            CookingMethod::Simmer => "simmer",
            CookingMethod::Boil => "boil",
            CookingMethod::Steam => "steam",
            CookingMethod::SousVide => "sous_vide",
            CookingMethod::AirFry => "air_fry",
            CookingMethod::DeepFry => "deep_fry",
            CookingMethod::SlowCook => "slow_cook",
        }
    }

    /// Human-readable label for the method
    pub fn display_name(&self) -> &'static str {
        match self {
            CookingMethod::OvenRoast => "Oven roast",
            CookingMethod::OvenBake => "Oven bake",
            CookingMethod::PanSear => "Pan sear",
            CookingMethod::PanFry => "Pan fry",
            CookingMethod::Grill => "Grill",
            CookingMethod::Broil => "Broil",
            CookingMethod::Poach => "Poach",
            CookingMethod::Simmer => "Simmer",
            CookingMethod::Boil => "Boil",
            CookingMethod::Steam => "Steam",
            CookingMethod::SousVide => "Sous vide",
            CookingMethod::AirFry => "Air fry",
            CookingMethod::DeepFry => "Deep fry",
            CookingMethod::SlowCook => "Slow cook",
        }
    }
}

impl DonenessLevel {
    /// Every doneness level, rarest first, then the safety baseline
    pub const ALL: [DonenessLevel; 6] = [
        DonenessLevel::Rare,
        DonenessLevel::MediumRare,
        DonenessLevel::Medium,
        DonenessLevel::MediumWell,
        DonenessLevel::WellDone,
        DonenessLevel::SafeMinimum,
    ];

    /// The snake_case tag used in catalogue data
    pub fn as_str(&self) -> &'static str {
        match self {
            DonenessLevel::Rare => "rare",
            DonenessLevel::MediumRare => "medium_rare",
            DonenessLevel::Medium => "medium",
            DonenessLevel::MediumWell => "medium_well",
            DonenessLevel::WellDone => "well_done",
            DonenessLevel::SafeMinimum => "safe_minimum",
        }
    }

    /// Human-readable label for the level
    pub fn display_name(&self) -> &'static str {
        match self {
            DonenessLevel::Rare => "Rare",
            DonenessLevel::MediumRare => "Medium rare",
            DonenessLevel::Medium => "Medium",
            DonenessLevel::MediumWell => "Medium well",
            DonenessLevel::WellDone => "Well done",
            DonenessLevel::SafeMinimum => "Safe minimum",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTag::new("temperature unit", s))
    }
}

impl FromStr for Category {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownTag::new("category", s))
    }
}

impl FromStr for CookingMethod {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownTag::new("cooking method", s))
    }
}

impl FromStr for DonenessLevel {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownTag::new("doneness level", s))
    }
}

impl TimeRange {
    /// Inclusive range of minutes
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check that the range is not inverted
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check if a duration falls inside the range (both ends inclusive)
    pub fn contains(&self, minutes: u32) -> bool {
        (self.min..=self.max).contains(&minutes)
    }
}

impl MethodInstruction {
    /// Appliance temperature as a unit-tagged value
    pub fn appliance_temperature(&self) -> Temperature {
        Temperature::new(self.appliance_temp, self.appliance_temp_unit)
    }
}

impl PortionGroup {
    /// First instruction for the given method in this portion
    pub fn instruction(&self, method: CookingMethod) -> Option<&MethodInstruction> {
        self.methods.iter().find(|m| m.method == method)
    }
}

impl DonenessSpec {
    /// Internal temperature as a unit-tagged value
    pub fn internal_temperature(&self) -> Temperature {
        Temperature::new(self.internal_temp, self.internal_temp_unit)
    }
}

impl Entry {
    /// Safe minimum as a unit-tagged value
    pub fn safe_minimum(&self) -> Temperature {
        Temperature::new(self.safe_minimum_temp, self.safe_minimum_temp_unit)
    }

    /// Check if the lowercased name contains an already-normalized query
    pub fn name_contains(&self, normalized_query: &str) -> bool {
        self.name.to_lowercase().contains(normalized_query)
    }

    /// Check if any lowercased alias contains an already-normalized query
    pub fn alias_contains(&self, normalized_query: &str) -> bool {
        self.aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(normalized_query))
    }

    /// Name-or-alias substring match against an already-normalized query
    pub fn matches_query(&self, normalized_query: &str) -> bool {
        self.name_contains(normalized_query) || self.alias_contains(normalized_query)
    }

    /// Has this entry any doneness gradation at all
    pub fn has_doneness_levels(&self) -> bool {
        self.doneness_levels
            .as_ref()
            .is_some_and(|levels| !levels.is_empty())
    }

    /// Doneness spec for a level, if this entry defines it
    pub fn doneness(&self, level: DonenessLevel) -> Option<&DonenessSpec> {
        self.doneness_levels
            .as_deref()?
            .iter()
            .find(|spec| spec.level == level)
    }

    /// Distinct methods across all portion groups, first-seen order
    pub fn cooking_methods(&self) -> Vec<CookingMethod> {
        let mut methods: Vec<CookingMethod> = Vec::new();
        for portion in &self.cooking_instructions {
            for instruction in &portion.methods {
                if !methods.contains(&instruction.method) {
                    methods.push(instruction.method);
                }
            }
        }
        methods
    }

    /// The first portion group in catalogue order
    pub fn default_portion(&self) -> Option<&PortionGroup> {
        self.cooking_instructions.first()
    }

    /// First portion whose description contains the hint, case-insensitively
    pub fn portion_matching(&self, hint: &str) -> Option<&PortionGroup> {
        let hint = hint.to_lowercase();
        self.cooking_instructions
            .iter()
            .find(|portion| portion.portion_description.to_lowercase().contains(&hint))
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CookingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for DonenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} min", self.min)
        } else {
            write!(f, "{}-{} min", self.min, self.max)
        }
    }
}

impl fmt::Display for DonenessSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.level.display_name(),
            self.internal_temperature(),
            self.description
        )
    }
}

impl fmt::Display for MethodInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}, {}",
            self.method.display_name(),
            self.appliance_temperature(),
            self.time_minutes
        )?;

        if let Some(notes) = &self.notes {
            write!(f, " ({})", notes)?;
        }

        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category.display_name())
    }
}
