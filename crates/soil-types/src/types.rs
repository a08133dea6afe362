//! Core types for soil-health readings.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{ParseError, ParseResult};

/// Calendar format used for test dates everywhere (storage, export, display).
pub const TEST_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

#[cfg(feature = "serde")]
time::serde::format_description!(test_date_serde, Date, "[year]-[month]-[day]");

/// Generator ranges for each measurement.
///
/// Storage does not enforce these; they describe what the record generator
/// produces.
pub mod ranges {
    use core::ops::RangeInclusive;

    /// Nitrogen, phosphorus and potassium levels.
    pub const NUTRIENT: RangeInclusive<f64> = 0.1..=5.0;
    /// Soil pH.
    pub const PH: RangeInclusive<f64> = 4.5..=8.5;
    /// Moisture percentage.
    pub const MOISTURE: RangeInclusive<f64> = 5.0..=50.0;
}

/// Format a test date as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```
/// use soil_types::format_test_date;
/// use time::macros::date;
///
/// assert_eq!(format_test_date(date!(2023 - 01 - 01)), "2023-01-01");
/// ```
#[must_use]
pub fn format_test_date(date: Date) -> String {
    // The format has only numeric components, so formatting cannot fail.
    date.format(TEST_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a `YYYY-MM-DD` test date.
///
/// # Examples
///
/// ```
/// use soil_types::parse_test_date;
///
/// assert!(parse_test_date("2024-02-29").is_ok());
/// assert!(parse_test_date("2023-02-29").is_err());
/// ```
pub fn parse_test_date(s: &str) -> ParseResult<Date> {
    Date::parse(s.trim(), TEST_DATE_FORMAT).map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// One of the three plotted soil nutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    /// All nutrients in display order.
    pub const ALL: [Nutrient; 3] = [Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium];

    /// Human-readable label, used for chart legends and table headers.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen",
            Nutrient::Phosphorus => "Phosphorus",
            Nutrient::Potassium => "Potassium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A soil reading that has not been persisted yet.
///
/// Produced by the record generator; storage assigns the id on insert.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewSoilReading {
    /// Free-form farm or place name.
    pub location: String,
    /// Day the sample was tested.
    #[cfg_attr(feature = "serde", serde(with = "test_date_serde"))]
    pub test_date: Date,
    /// Nitrogen level.
    pub nitrogen: f64,
    /// Phosphorus level.
    pub phosphorus: f64,
    /// Potassium level.
    pub potassium: f64,
    /// Soil pH.
    pub ph: f64,
    /// Moisture percentage.
    pub moisture: f64,
}

impl NewSoilReading {
    /// Value of a single nutrient.
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }

    /// Named numeric fields, in column order.
    #[must_use]
    pub fn measurements(&self) -> [(&'static str, f64); 5] {
        [
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("ph", self.ph),
            ("moisture", self.moisture),
        ]
    }

    /// Whether every measurement lies inside the generator ranges.
    #[must_use]
    pub fn within_generator_ranges(&self) -> bool {
        ranges::NUTRIENT.contains(&self.nitrogen)
            && ranges::NUTRIENT.contains(&self.phosphorus)
            && ranges::NUTRIENT.contains(&self.potassium)
            && ranges::PH.contains(&self.ph)
            && ranges::MOISTURE.contains(&self.moisture)
    }
}

/// A persisted soil reading.
///
/// Field semantics match [`NewSoilReading`], plus the storage-assigned `id`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoilReading {
    /// Database row id, unique and never reused.
    pub id: i64,
    pub location: String,
    #[cfg_attr(feature = "serde", serde(with = "test_date_serde"))]
    pub test_date: Date,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub moisture: f64,
}

impl SoilReading {
    /// Attach a storage id to a new reading.
    pub fn from_new(id: i64, reading: &NewSoilReading) -> Self {
        Self {
            id,
            location: reading.location.clone(),
            test_date: reading.test_date,
            nitrogen: reading.nitrogen,
            phosphorus: reading.phosphorus,
            potassium: reading.potassium,
            ph: reading.ph,
            moisture: reading.moisture,
        }
    }

    /// Strip the id.
    pub fn to_new(&self) -> NewSoilReading {
        NewSoilReading {
            location: self.location.clone(),
            test_date: self.test_date,
            nitrogen: self.nitrogen,
            phosphorus: self.phosphorus,
            potassium: self.potassium,
            ph: self.ph,
            moisture: self.moisture,
        }
    }

    /// Value of a single nutrient.
    #[must_use]
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
        }
    }
}

/// Format a measurement the way exports and the grid show it.
///
/// Whole numbers keep a trailing `.0` (`20.0`, not `20`).
///
/// # Examples
///
/// ```
/// use soil_types::format_measurement;
///
/// assert_eq!(format_measurement(20.0), "20.0");
/// assert_eq!(format_measurement(6.5), "6.5");
/// assert_eq!(format_measurement(2.37), "2.37");
/// ```
#[must_use]
pub fn format_measurement(value: f64) -> String {
    format!("{value:?}")
}
