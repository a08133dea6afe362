//! Synthetic soil reading generator.
//!
//! [`RandomGenerator`] produces readings with a made-up place name, a test
//! date in the trailing two years, and five measurements sampled uniformly
//! from [`soil_types::ranges`], rounded to two decimals.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use time::{Date, Duration, OffsetDateTime};

use soil_types::{NewSoilReading, ranges};

use crate::error::{Error, Result};

/// Length of the trailing date window, in days (two years).
pub const DATE_WINDOW_DAYS: i64 = 730;

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port", "Fort"];

const CITY_NAMES: &[&str] = &[
    "Ash", "Belle", "Cedar", "Clay", "Dale", "Elm", "Fair", "Glen", "Green", "Hart", "Hazel",
    "Kings", "Lin", "Maple", "Mill", "Oak", "Pine", "Red", "River", "Rock", "Rose", "Sandy",
    "Spring", "Stone", "Sun", "Willow", "Wood",
];

const CITY_SUFFIXES: &[&str] = &[
    "ville", "town", "field", "burgh", "side", "view", "haven", "land", "port", "bury", "ford",
    "mouth", "stad", "shire", "dale",
];

/// Source of new soil readings.
///
/// Implemented by [`RandomGenerator`]; tests can supply their own.
pub trait RecordGenerator {
    /// Produce one reading (without an id).
    fn generate(&mut self) -> Result<NewSoilReading>;

    /// Produce `n` readings. `n = 0` yields an empty vector.
    fn generate_batch(&mut self, n: usize) -> Result<Vec<NewSoilReading>> {
        (0..n).map(|_| self.generate()).collect()
    }
}

/// Uniform random reading generator.
///
/// # Example
///
/// ```
/// use soil_core::{RandomGenerator, RecordGenerator};
///
/// let mut generator = RandomGenerator::seeded(7);
/// let batch = generator.generate_batch(10)?;
/// assert_eq!(batch.len(), 10);
/// assert!(batch.iter().all(|r| r.within_generator_ranges()));
/// # Ok::<(), soil_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RandomGenerator<R = StdRng> {
    rng: R,
    today: Option<Date>,
}

impl RandomGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomGenerator<R> {
    /// Generator driven by the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, today: None }
    }

    /// Pin "today" instead of reading the clock.
    pub fn with_today(mut self, today: Date) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> Date {
        self.today.unwrap_or_else(local_today)
    }

    fn location(&mut self) -> String {
        // Four name shapes, e.g. "Oakville", "North Pineside", "Port Ash", "Glen".
        let name = CITY_NAMES.choose(&mut self.rng).copied().unwrap_or("Spring");
        let prefix = CITY_PREFIXES.choose(&mut self.rng).copied().unwrap_or("New");
        let suffix = CITY_SUFFIXES.choose(&mut self.rng).copied().unwrap_or("field");

        match self.rng.random_range(0..4) {
            0 => format!("{name}{suffix}"),
            1 => format!("{prefix} {name}{suffix}"),
            2 => format!("{prefix} {name}"),
            _ => {
                let landform = if self.rng.random_bool(0.5) { "Hills" } else { "Valley" };
                format!("{name}{suffix} {landform}")
            }
        }
    }

    fn test_date(&mut self) -> Result<Date> {
        let today = self.today();
        let start = today
            .checked_sub(Duration::days(DATE_WINDOW_DAYS))
            .ok_or_else(|| Error::Generation(format!("no date window before {today}")))?;
        let offset = self.rng.random_range(0..=DATE_WINDOW_DAYS);

        start
            .checked_add(Duration::days(offset))
            .ok_or_else(|| Error::Generation(format!("date offset {offset} out of range")))
    }

    fn sample(&mut self, range: core::ops::RangeInclusive<f64>) -> f64 {
        round2(self.rng.random_range(range))
    }
}

impl<R: Rng> RecordGenerator for RandomGenerator<R> {
    fn generate(&mut self) -> Result<NewSoilReading> {
        Ok(NewSoilReading {
            location: self.location(),
            test_date: self.test_date()?,
            nitrogen: self.sample(ranges::NUTRIENT),
            phosphorus: self.sample(ranges::NUTRIENT),
            potassium: self.sample(ranges::NUTRIENT),
            ph: self.sample(ranges::PH),
            moisture: self.sample(ranges::MOISTURE),
        })
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Today on the user's clock, or in UTC when the local offset is unknown.
fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
