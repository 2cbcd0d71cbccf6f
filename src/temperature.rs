//! # Temperature Conversion
//!
//! Fahrenheit/Celsius conversion for catalogue temperatures. All catalogue
//! temperatures are whole degrees, and converted values are rounded back to
//! whole degrees, so a conversion is not guaranteed to be exactly invertible.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::temperature_model::TemperatureUnit;

/// Convert a whole-degree temperature between units
///
/// Returns `value` unchanged when the units match. Otherwise applies the
/// standard affine transform and rounds to the nearest degree, ties to even.
///
/// # Examples
///
/// ```rust
/// use cooking_temperatures::temperature::convert_temperature;
/// use cooking_temperatures::temperature_model::TemperatureUnit::{Celsius, Fahrenheit};
///
/// assert_eq!(convert_temperature(145, Fahrenheit, Celsius), 63);
/// assert_eq!(convert_temperature(63, Celsius, Fahrenheit), 145);
/// ```
pub fn convert_temperature(value: i32, from: TemperatureUnit, to: TemperatureUnit) -> i32 {
    if from == to {
        return value;
    }

    let converted = match from {
        TemperatureUnit::Fahrenheit => (f64::from(value) - 32.0) * 5.0 / 9.0,
        TemperatureUnit::Celsius => f64::from(value) * 9.0 / 5.0 + 32.0,
    };

    converted.round_ties_even() as i32
}

/// A whole-degree temperature tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    /// Whole degrees
    pub value: i32,
    pub unit: TemperatureUnit,
}

impl Temperature {
    /// A temperature in the given unit
    pub fn new(value: i32, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    /// A temperature in degrees Fahrenheit
    pub fn fahrenheit(value: i32) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// A temperature in degrees Celsius
    pub fn celsius(value: i32) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// This temperature expressed in another unit
    pub fn to(self, unit: TemperatureUnit) -> Temperature {
        Temperature::new(convert_temperature(self.value, self.unit, unit), unit)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}
