//! # Icon Resolver
//!
//! Maps entry ids and categories to display icon URLs (Microsoft Fluent Emoji
//! 3D, MIT licensed, served from the Lobehub CDN). A specific icon for the id
//! wins; otherwise the category icon is used when a category is given.
//!
//! Presentation layers use this directly; the query engine never does.

use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::temperature_model::Category;

/// Base URL of the Fluent Emoji 3D asset registry
pub const FLUENT_BASE: &str =
    "https://registry.npmmirror.com/@lobehub/fluent-emoji-3d/latest/files/assets";

/// Icon URL for a Fluent emoji codepoint (e.g., "1f969")
pub fn fluent(codepoint: &str) -> String {
    format!("{FLUENT_BASE}/{codepoint}.webp")
}

/// (id, codepoint) pairs, grouped by category
const ENTRY_ICONS: &[(&str, &str)] = &[
    // Poultry
    ("chicken_breast", "1f357"),
    ("chicken_thigh", "1f357"),
    ("chicken_breast_boneless", "1f357"),
    ("chicken_thigh_boneless", "1f357"),
    ("chicken_whole", "1f414"),
    ("turkey_breast", "1f983"),
    ("duck", "1f986"),
    // Beef
    ("beef_steak_ribeye", "1f969"),
    ("beef_ground", "1f969"),
    ("beef_roast", "1f969"),
    // Pork
    ("pork_chop", "1f356"),
    ("pork_tenderloin", "1f356"),
    ("pork_ribs", "1f356"),
    ("bacon", "1f953"),
    // Seafood
    ("salmon_fillet", "1f41f"),
    ("tuna_steak", "1f41f"),
    ("cod_fillet", "1f41f"),
    ("shrimp", "1f990"),
    ("lobster", "1f99e"),
    ("scallops", "1f41a"),
    ("crab", "1f980"),
    // Eggs
    ("egg_fried", "1f373"),
    ("egg_boiled", "1f95a"),
    ("egg_scrambled", "1f373"),
    ("egg_poached", "1f373"),
    ("egg_omelette", "1f373"),
    // Vegetables
    ("broccoli", "1f966"),
    ("asparagus", "1f96c"),
    ("potato", "1f954"),
    ("carrot", "1f955"),
    ("corn", "1f33d"),
    ("tomato", "1f345"),
    ("onion", "1f9c5"),
    ("garlic", "1f9c4"),
    ("pepper", "1fad1"),
    ("leafy_greens", "1f96c"),
    ("mushroom", "1f344"),
    ("eggplant", "1f346"),
    ("cucumber", "1f952"),
    ("avocado", "1f951"),
    // Grains
    ("rice_white", "1f35a"),
    ("rice_brown", "1f35a"),
    ("pasta", "1f35d"),
    ("bread", "1f35e"),
    ("quinoa", "1f35a"),
];

lazy_static! {
    static ref ENTRY_ICON_URLS: HashMap<&'static str, String> = ENTRY_ICONS
        .iter()
        .map(|(id, codepoint)| (*id, fluent(codepoint)))
        .collect();
}

/// Codepoint of the category icon. Lamb and legume have none.
fn category_codepoint(category: Category) -> Option<&'static str> {
    match category {
        Category::Poultry => Some("1f357"),
        Category::Beef => Some("1f969"),
        Category::Pork => Some("1f356"),
        Category::SeafoodFish => Some("1f41f"),
        Category::SeafoodShellfish => Some("1f990"),
        Category::Egg => Some("1f95a"),
        Category::Vegetable => Some("1f966"),
        Category::Grain => Some("1f35a"),
        Category::Lamb | Category::Legume => None,
    }
}

/// Icon URL for a category, if one is registered
pub fn category_icon(category: Category) -> Option<String> {
    category_codepoint(category).map(fluent)
}

/// Icon URL for an entry id, falling back to its category's icon
pub fn icon_for(id: &str, category: Option<Category>) -> Option<String> {
    if let Some(url) = ENTRY_ICON_URLS.get(id) {
        return Some(url.clone());
    }

    category.and_then(category_icon)
}
