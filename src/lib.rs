//! # Cooking Temperatures
//!
//! A reference catalogue of foods annotated with USDA-style safe minimum
//! internal temperatures, doneness levels, per-portion cooking instructions
//! and visual cues, with lookup and ranked search over it.
//!
//! ```rust
//! use cooking_temperatures::{quick_reference, CookingMethod, TemperatureUnit};
//!
//! let reference =
//!     quick_reference("ribeye", Some(CookingMethod::PanSear), TemperatureUnit::Celsius).unwrap();
//! assert_eq!(reference.safe_minimum_temp, 63);
//! ```

pub mod catalogue;
pub mod catalogue_config;
pub mod catalogue_errors;
pub mod icons;
pub mod query;
pub mod quick_reference;
pub mod temperature;
pub mod temperature_model;

pub use catalogue::Catalogue;
pub use catalogue_config::{CatalogueConfig, SearchOptions};
pub use catalogue_errors::{CatalogueError, UnknownTag};
pub use icons::icon_for;
pub use query::{
    all_categories, all_entries, category_name, cooking_instruction, cooking_methods,
    doneness_temp, doneness_temp_by_tag, find_by_category, find_by_id, find_by_name,
    safe_minimum_temp, search, ResolvedInstruction, SafeTemp,
};
pub use quick_reference::{quick_reference, QuickReference, SuggestedMethod};
pub use temperature::{convert_temperature, Temperature};
pub use temperature_model::{
    Category, CookingMethod, DonenessLevel, DonenessSpec, Entry, MethodInstruction, PortionGroup,
    TemperatureUnit, TimeRange,
};
