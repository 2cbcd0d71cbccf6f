//! # Quick Reference
//!
//! Composes the lookups into a single "what do I need to know" card for a
//! food: safe minimum in the requested unit, rest time, visual cues and,
//! optionally, how to cook the default portion with a given method.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalogue::{self, Catalogue};
use crate::temperature::{convert_temperature, Temperature};
use crate::temperature_model::{CookingMethod, TemperatureUnit, TimeRange};

/// How to cook the default portion with one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedMethod {
    pub method: CookingMethod,
    /// Appliance temperature in the reference's unit
    pub appliance_temp: i32,
    pub time_minutes: TimeRange,
    pub notes: Option<String>,
}

/// Single-call summary for a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickReference {
    pub name: String,
    pub safe_minimum_temp: i32,
    /// Unit of every temperature in this reference
    pub temp_unit: TemperatureUnit,
    pub rest_minutes: u32,
    /// Absent when the default portion has no instruction for the method
    pub suggested_method: Option<SuggestedMethod>,
    pub visual_indicators: Vec<String>,
}

impl Catalogue {
    /// Build a quick reference for the first entry matching the query
    ///
    /// The entry is resolved like [`Catalogue::find_by_name`]. When `method`
    /// is given, the default portion's instruction for it is included with
    /// its appliance temperature converted to `unit`.
    pub fn quick_reference(
        &self,
        query: &str,
        method: Option<CookingMethod>,
        unit: TemperatureUnit,
    ) -> Option<QuickReference> {
        let entry = self.find_by_name(query)?;

        let suggested_method = method.and_then(|method| {
            let instruction = self.cooking_instruction(&entry.id, method, None);
            if instruction.is_none() {
                debug!("{} has no {} instruction on its default portion", entry.id, method);
            }

            instruction.map(|instruction| SuggestedMethod {
                method,
                appliance_temp: convert_temperature(
                    instruction.appliance_temp,
                    instruction.appliance_temp_unit,
                    unit,
                ),
                time_minutes: instruction.time_minutes,
                notes: instruction.notes,
            })
        });

        Some(QuickReference {
            name: entry.name.clone(),
            safe_minimum_temp: convert_temperature(
                entry.safe_minimum_temp,
                entry.safe_minimum_temp_unit,
                unit,
            ),
            temp_unit: unit,
            rest_minutes: entry.rest_time_minutes,
            suggested_method,
            visual_indicators: entry.visual_indicators.clone(),
        })
    }
}

/// See [`Catalogue::quick_reference`]
pub fn quick_reference(
    query: &str,
    method: Option<CookingMethod>,
    unit: TemperatureUnit,
) -> Option<QuickReference> {
    catalogue::shared().quick_reference(query, method, unit)
}

impl QuickReference {
    /// Safe minimum as a unit-tagged value
    pub fn safe_minimum(&self) -> Temperature {
        Temperature::new(self.safe_minimum_temp, self.temp_unit)
    }
}

impl fmt::Display for QuickReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(f, "  Safe minimum: {}", self.safe_minimum())?;
        if self.rest_minutes > 0 {
            write!(f, ", rest {} min", self.rest_minutes)?;
        }
        writeln!(f)?;

        if let Some(suggested) = &self.suggested_method {
            write!(
                f,
                "  {}: {} for {}",
                suggested.method.display_name(),
                Temperature::new(suggested.appliance_temp, self.temp_unit),
                suggested.time_minutes
            )?;
            if let Some(notes) = &suggested.notes {
                write!(f, " ({})", notes)?;
            }
            writeln!(f)?;
        }

        for indicator in &self.visual_indicators {
            writeln!(f, "  • {}", indicator)?;
        }

        Ok(())
    }
}
