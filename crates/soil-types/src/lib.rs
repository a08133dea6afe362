//! Data model for synthetic soil-health readings.
//!
//! This crate provides the types shared by storage, the record generator,
//! and the front ends.
//!
//! # Features
//!
//! - [`NewSoilReading`] for generated, not-yet-stored records
//! - [`SoilReading`] for persisted records with a storage id
//! - Generator [`ranges`] for each measurement
//! - `YYYY-MM-DD` test date helpers
//!
//! # Example
//!
//! ```
//! use soil_types::{NewSoilReading, SoilReading};
//! use time::macros::date;
//!
//! let new = NewSoilReading {
//!     location: "Springfield".to_string(),
//!     test_date: date!(2023 - 01 - 01),
//!     nitrogen: 1.0,
//!     phosphorus: 2.0,
//!     potassium: 3.0,
//!     ph: 6.5,
//!     moisture: 20.0,
//! };
//! let stored = SoilReading::from_new(1, &new);
//! assert_eq!(stored.to_new(), new);
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    NewSoilReading, Nutrient, SoilReading, TEST_DATE_FORMAT, format_measurement, format_test_date,
    parse_test_date, ranges,
};
