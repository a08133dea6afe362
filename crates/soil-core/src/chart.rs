//! Nutrient trend series for the time-series chart.
//!
//! The chart plots nitrogen, phosphorus and potassium against test date.
//! X values are Julian day numbers so that date arithmetic stays exact;
//! [`date_from_x`] turns an axis position back into a calendar date.

use time::Date;

use soil_types::{Nutrient, SoilReading, format_test_date};

/// Chart title.
pub const CHART_TITLE: &str = "Soil Nutrient Trends";
/// X axis label.
pub const X_AXIS_LABEL: &str = "Test Date";
/// Y axis label.
pub const Y_AXIS_LABEL: &str = "Nutrient Levels";

/// Plot x coordinate for a date.
pub fn date_to_x(date: Date) -> f64 {
    f64::from(date.to_julian_day())
}

/// Calendar date nearest to a plot x coordinate.
pub fn date_from_x(x: f64) -> Option<Date> {
    if !x.is_finite() || x < f64::from(i32::MIN) || x > f64::from(i32::MAX) {
        return None;
    }
    Date::from_julian_day(x.round() as i32).ok()
}

/// Axis tick / hover label for a plot x coordinate.
pub fn format_x(x: f64) -> String {
    date_from_x(x).map(format_test_date).unwrap_or_default()
}

/// One labeled line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientSeries {
    pub nutrient: Nutrient,
    /// `[x, y]` pairs in test-date order.
    pub points: Vec<[f64; 2]>,
}

impl NutrientSeries {
    pub fn label(&self) -> &'static str {
        self.nutrient.label()
    }
}

/// The three nutrient series built from one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientChart {
    series: Vec<NutrientSeries>,
    first_date: Date,
    last_date: Date,
}

impl NutrientChart {
    /// Build the chart from readings already sorted by test date.
    ///
    /// Returns `None` for an empty slice: there is nothing to draw.
    pub fn from_readings(readings: &[SoilReading]) -> Option<Self> {
        let first_date = readings.iter().map(|r| r.test_date).min()?;
        let last_date = readings.iter().map(|r| r.test_date).max()?;

        let series = Nutrient::ALL
            .iter()
            .map(|&nutrient| NutrientSeries {
                nutrient,
                points: readings
                    .iter()
                    .map(|r| [date_to_x(r.test_date), r.nutrient(nutrient)])
                    .collect(),
            })
            .collect();

        Some(Self {
            series,
            first_date,
            last_date,
        })
    }

    /// Series in legend order: nitrogen, phosphorus, potassium.
    pub fn series(&self) -> &[NutrientSeries] {
        &self.series
    }

    /// Number of readings behind each series.
    pub fn point_count(&self) -> usize {
        self.series.first().map_or(0, |s| s.points.len())
    }

    /// Earliest and latest test dates plotted.
    pub fn date_range(&self) -> (Date, Date) {
        (self.first_date, self.last_date)
    }
}
