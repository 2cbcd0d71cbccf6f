//! # Query Tests
//!
//! Integration tests for lookups, temperature queries, cooking-instruction
//! resolution and ranked search over the embedded catalogue.

use cooking_temperatures::catalogue_config::SearchOptions;
use cooking_temperatures::query::*;
use cooking_temperatures::temperature_model::TemperatureUnit::{Celsius, Fahrenheit};
use cooking_temperatures::temperature_model::{Category, CookingMethod, DonenessLevel, TimeRange};
use cooking_temperatures::{convert_temperature, Catalogue};
use std::collections::HashSet;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ids(entries: &[&cooking_temperatures::Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_find_by_name_exact_partial_and_alias() {
    init_logging();

    assert_eq!(find_by_name("Ribeye Steak").unwrap().id, "beef_steak_ribeye");
    assert_eq!(find_by_name("ribeye").unwrap().name, "Ribeye Steak");
    assert_eq!(find_by_name("hamburger").unwrap().id, "beef_ground");
    assert_eq!(find_by_name("  ribeye  ").unwrap().name, "Ribeye Steak");
    assert!(find_by_name("nonexistent food item").is_none());
}

#[test]
fn test_find_by_id_for_every_entry() {
    for entry in all_entries() {
        assert_eq!(find_by_id(&entry.id).unwrap(), &entry);
    }
    assert!(find_by_id("nonexistent_id").is_none());
}

#[test]
fn test_find_by_name_for_every_alias() {
    for entry in all_entries() {
        for alias in &entry.aliases {
            let found = find_by_name(alias).unwrap();
            assert!(
                found.matches_query(&normalize_query(alias)),
                "{} resolved to {} which does not match",
                alias,
                found.id
            );
        }
    }
}

#[test]
fn test_find_by_category() {
    let beef = find_by_category(Category::Beef);
    assert!(!beef.is_empty());
    assert!(beef.iter().all(|e| e.category == Category::Beef));
    assert_eq!(ids(&beef), vec!["beef_steak_ribeye", "beef_ground"]);

    let poultry = find_by_category(Category::Poultry);
    assert!(poultry.iter().all(|e| e.category == Category::Poultry));

    assert!(find_by_category(Category::Lamb).is_empty());
    assert!(find_by_category(Category::Legume).is_empty());
}

#[test]
fn test_all_entries_returns_independent_copies() {
    let mut first = all_entries();
    let second = all_entries();

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_ne!(first.as_ptr(), second.as_ptr());

    first.clear();
    assert_eq!(all_entries(), second);
}

#[test]
fn test_all_categories_unique_in_first_seen_order() {
    let categories = all_categories();
    let unique: HashSet<_> = categories.iter().collect();
    assert_eq!(categories.len(), unique.len());

    assert_eq!(
        categories,
        vec![
            Category::Poultry,
            Category::Beef,
            Category::Pork,
            Category::SeafoodFish,
            Category::SeafoodShellfish,
            Category::Egg,
            Category::Vegetable,
            Category::Grain,
        ]
    );
}

#[test]
fn test_category_names() {
    assert_eq!(category_name(Category::Beef), "Beef");
    assert_eq!(category_name(Category::Poultry), "Poultry");
    assert_eq!(category_name(Category::Pork), "Pork");
    assert_eq!(category_name(Category::Lamb), "Lamb");
    assert_eq!(category_name(Category::SeafoodFish), "Fish");
    assert_eq!(category_name(Category::SeafoodShellfish), "Shellfish");
    assert_eq!(category_name(Category::Egg), "Eggs");
    assert_eq!(category_name(Category::Vegetable), "Vegetables");
    assert_eq!(category_name(Category::Grain), "Grains");
    assert_eq!(category_name(Category::Legume), "Legumes");
}

#[test]
fn test_convert_temperature_pinned_values() {
    assert_eq!(convert_temperature(100, Fahrenheit, Fahrenheit), 100);
    assert_eq!(convert_temperature(100, Celsius, Celsius), 100);
    assert_eq!(convert_temperature(32, Fahrenheit, Celsius), 0);
    assert_eq!(convert_temperature(212, Fahrenheit, Celsius), 100);
    assert_eq!(convert_temperature(145, Fahrenheit, Celsius), 63);
    assert_eq!(convert_temperature(0, Celsius, Fahrenheit), 32);
    assert_eq!(convert_temperature(100, Celsius, Fahrenheit), 212);
    assert_eq!(convert_temperature(63, Celsius, Fahrenheit), 145);
}

#[test]
fn test_safe_minimum_temp() {
    assert_eq!(
        safe_minimum_temp("beef_steak_ribeye", Fahrenheit),
        Some(SafeTemp { temp: 145, rest_minutes: 3 })
    );
    assert_eq!(
        safe_minimum_temp("beef_steak_ribeye", Celsius),
        Some(SafeTemp { temp: 63, rest_minutes: 3 })
    );
    assert_eq!(
        safe_minimum_temp("beef_ground", Fahrenheit),
        Some(SafeTemp { temp: 160, rest_minutes: 0 })
    );
    assert_eq!(
        safe_minimum_temp("beef_steak_ribeye", Default::default()).map(|s| s.temp),
        Some(145)
    );
    assert!(safe_minimum_temp("nonexistent_id", Fahrenheit).is_none());
}

#[test]
fn test_doneness_temp() {
    assert_eq!(
        doneness_temp("beef_steak_ribeye", DonenessLevel::MediumRare, Fahrenheit),
        Some(135)
    );
    assert_eq!(doneness_temp("beef_steak_ribeye", DonenessLevel::Rare, Fahrenheit), Some(125));
    assert_eq!(doneness_temp("beef_steak_ribeye", DonenessLevel::MediumRare, Celsius), Some(57));
    assert_eq!(doneness_temp("salmon_fillet", DonenessLevel::SafeMinimum, Fahrenheit), Some(145));

    // no gradation at all
    assert!(doneness_temp("beef_ground", DonenessLevel::MediumRare, Fahrenheit).is_none());
    // level not defined for this entry
    assert!(doneness_temp("pork_tenderloin", DonenessLevel::Rare, Fahrenheit).is_none());
    assert!(doneness_temp("nonexistent_id", DonenessLevel::MediumRare, Fahrenheit).is_none());
    assert!(doneness_temp_by_tag("beef_steak_ribeye", "invalid", Fahrenheit).is_none());
}

#[test]
fn test_cooking_methods() {
    let methods = cooking_methods("beef_steak_ribeye");
    assert!(methods.contains(&CookingMethod::PanSear));
    assert!(methods.contains(&CookingMethod::Grill));
    assert_eq!(
        methods,
        vec![CookingMethod::PanSear, CookingMethod::Grill, CookingMethod::Broil]
    );

    let methods = cooking_methods("beef_ground");
    assert!(methods.contains(&CookingMethod::PanFry));
    assert!(methods.contains(&CookingMethod::Grill));

    assert!(cooking_methods("nonexistent_id").is_empty());
}

#[test]
fn test_cooking_methods_never_repeat() {
    for entry in all_entries() {
        let methods = cooking_methods(&entry.id);
        let unique: HashSet<_> = methods.iter().collect();
        assert_eq!(methods.len(), unique.len(), "duplicates for {}", entry.id);
    }
}

#[test]
fn test_cooking_instruction_default_portion() {
    let instruction =
        cooking_instruction("beef_steak_ribeye", CookingMethod::PanSear, None).unwrap();
    assert_eq!(instruction.appliance_temp, 500);
    assert_eq!(instruction.appliance_temp_unit, Fahrenheit);
    assert_eq!(instruction.time_minutes, TimeRange::new(3, 4));
    assert_eq!(instruction.portion_description, "1 inch thick");
    assert!(instruction.notes.unwrap().contains("medium-rare"));
}

#[test]
fn test_cooking_instruction_portion_hint() {
    let instruction =
        cooking_instruction("beef_steak_ribeye", CookingMethod::PanSear, Some("1.5 inches"))
            .unwrap();
    assert_eq!(instruction.portion_description, "1.5 inches thick");
    assert_eq!(instruction.time_minutes, TimeRange::new(4, 5));

    let instruction =
        cooking_instruction("shrimp", CookingMethod::Boil, Some("JUMBO")).unwrap();
    assert_eq!(instruction.portion_description, "jumbo (21-25 count per lb)");
    assert_eq!(instruction.time_minutes, TimeRange::new(4, 5));
}

#[test]
fn test_cooking_instruction_unmatched_hint_falls_back() {
    let instruction = cooking_instruction(
        "beef_steak_ribeye",
        CookingMethod::PanSear,
        Some("nonexistent portion"),
    )
    .unwrap();
    assert_eq!(instruction.portion_description, "1 inch thick");
}

#[test]
fn test_cooking_instruction_not_found() {
    assert!(cooking_instruction("nonexistent_id", CookingMethod::PanSear, None).is_none());
    assert!(cooking_instruction("beef_steak_ribeye", CookingMethod::SousVide, None).is_none());
    // broil exists on the first portion only
    assert!(
        cooking_instruction("beef_steak_ribeye", CookingMethod::Broil, Some("1.5 inches")).is_none()
    );
}

#[test]
fn test_search_returns_multiple_matches() {
    let results = search("chicken", &SearchOptions::default());
    assert!(results.len() > 1);
    assert!(results.iter().any(|e| e.id == "chicken_breast_boneless"));
    assert!(results.iter().any(|e| e.id == "chicken_thigh_boneless"));
}

#[test]
fn test_search_blank_query_matches_nothing() {
    assert!(search("", &SearchOptions::default()).is_empty());
    assert!(search("   ", &SearchOptions::default()).is_empty());
    assert!(search("nonexistentingredient", &SearchOptions::default()).is_empty());
}

#[test]
fn test_search_is_case_insensitive_and_trimmed() {
    let lower = search("salmon", &SearchOptions::default());
    assert_eq!(lower, search("SALMON", &SearchOptions::default()));
    assert_eq!(lower, search("SaLmOn", &SearchOptions::default()));
    assert_eq!(lower, search("  salmon  ", &SearchOptions::default()));
}

#[test]
fn test_search_matches_aliases() {
    let results = search("prawns", &SearchOptions::default());
    assert!(results.iter().any(|e| e.id == "shrimp"));
}

#[test]
fn test_search_category_filter() {
    let results = search("fillet", &SearchOptions::in_category(Category::SeafoodFish));
    assert!(!results.is_empty());
    assert!(results.iter().all(|e| e.category == Category::SeafoodFish));

    assert!(search("chicken", &SearchOptions::in_category(Category::SeafoodFish)).is_empty());
}

#[test]
fn test_search_limit() {
    assert!(search("pork", &SearchOptions::default().with_limit(2)).len() <= 2);

    let all = search("salmon", &SearchOptions::default());
    let limited = search("salmon", &SearchOptions::default().with_limit(100));
    assert_eq!(all.len(), limited.len());

    let results = search("chop", &SearchOptions::in_category(Category::Pork).with_limit(1));
    assert!(results.len() <= 1);
    assert!(results.iter().all(|e| e.category == Category::Pork));
}

#[test]
fn test_search_ranking() {
    let results = search("shrimp", &SearchOptions::default());
    assert_eq!(results[0].name, "Shrimp");

    let results = search("salmon", &SearchOptions::default());
    assert!(results[0].name.to_lowercase().contains("salmon"));

    let results = search("sal", &SearchOptions::default());
    assert!(results.iter().any(|e| e.name.to_lowercase().contains("sal")));

    // prefix matches ahead of name-contains, each group A-Z
    let results = search("pork", &SearchOptions::default());
    assert_eq!(
        ids(&results),
        vec![
            "pork_chop_bone_in",
            "pork_chop_boneless",
            "pork_tenderloin",
            "ground_pork",
        ]
    );

    let results = search("egg", &SearchOptions::default());
    assert_eq!(
        ids(&results),
        vec![
            "egg_fried",
            "egg_hard_boiled",
            "egg_poached",
            "egg_scrambled",
            "egg_soft_boiled",
        ]
    );
}

#[test]
fn test_search_name_match_before_alias_only() {
    // both rice entries match by name, so plain A-Z applies
    let results = search("rice", &SearchOptions::default());
    assert_eq!(ids(&results), vec!["brown_rice", "white_rice_long_grain"]);

    // "fillet" is in cod's and salmon's names but only an alias for chicken breast
    // and pork tenderloin
    let results = search("fillet", &SearchOptions::default());
    let names_first: Vec<bool> = results
        .iter()
        .map(|e| e.name.to_lowercase().contains("fillet"))
        .collect();
    assert_eq!(names_first, vec![true, true, false, false]);
}

#[test]
fn test_concurrent_readers() {
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let results = search("pork", &SearchOptions::default());
                    let safe = safe_minimum_temp("beef_steak_ribeye", Celsius);
                    (ids(&results), safe)
                })
            })
            .collect();

        for handle in handles {
            let (results, safe) = handle.join().unwrap();
            assert_eq!(results.len(), 4);
            assert_eq!(safe, Some(SafeTemp { temp: 63, rest_minutes: 3 }));
        }
    });
}

#[test]
fn test_methods_on_custom_catalogue() {
    let catalogue = Catalogue::from_sources(&[(
        "legumes",
        r#"[{
            "id": "lentils",
            "name": "Lentils",
            "category": "legume",
            "aliases": ["red lentils"],
            "safe_minimum_temp": 74,
            "safe_minimum_temp_unit": "C",
            "cooking_instructions": [{
                "portion_description": "1 cup dry",
                "methods": [{
                    "method": "simmer",
                    "appliance_temp": 100,
                    "appliance_temp_unit": "C",
                    "time_minutes": {"min": 20, "max": 25}
                }]
            }]
        }]"#,
    )])
    .unwrap();

    assert_eq!(catalogue.all_categories(), vec![Category::Legume]);
    assert_eq!(
        catalogue.safe_minimum_temp("lentils", Fahrenheit),
        Some(SafeTemp { temp: 165, rest_minutes: 0 })
    );
    assert_eq!(catalogue.find_by_category(Category::Legume).len(), 1);
    assert_eq!(catalogue.search("red", &SearchOptions::default()).len(), 1);
    assert!(catalogue.find_by_id("beef_steak_ribeye").is_none());
}
