//! Output formatting for text, JSON, and CSV output.

use anyhow::{Context, Result};
use soil_types::{SoilReading, format_measurement, format_test_date};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;

#[derive(Tabled)]
struct ReadingRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Farm Location")]
    location: String,
    #[tabled(rename = "Test Date")]
    test_date: String,
    #[tabled(rename = "Nitrogen")]
    nitrogen: String,
    #[tabled(rename = "Phosphorus")]
    phosphorus: String,
    #[tabled(rename = "Potassium")]
    potassium: String,
    #[tabled(rename = "pH")]
    ph: String,
    #[tabled(rename = "Moisture")]
    moisture: String,
}

impl From<&SoilReading> for ReadingRow {
    fn from(r: &SoilReading) -> Self {
        Self {
            id: r.id,
            location: r.location.clone(),
            test_date: format_test_date(r.test_date),
            nitrogen: format_measurement(r.nitrogen),
            phosphorus: format_measurement(r.phosphorus),
            potassium: format_measurement(r.potassium),
            ph: format_measurement(r.ph),
            moisture: format_measurement(r.moisture),
        }
    }
}

/// Render readings as a rounded table.
pub fn format_readings_text(readings: &[SoilReading]) -> String {
    if readings.is_empty() {
        return "No readings stored.\n".to_string();
    }
    let rows: Vec<ReadingRow> = readings.iter().map(ReadingRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{table}\n")
}

/// Render readings as a pretty JSON array.
pub fn format_readings_json(readings: &[SoilReading]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(readings)?;
    out.push('\n');
    Ok(out)
}

/// Render readings with the same header and layout as the CSV export.
pub fn format_readings_csv(readings: &[SoilReading]) -> Result<String> {
    let mut buf = Vec::new();
    soil_store::export::write_csv(readings, &mut buf)?;
    String::from_utf8(buf).context("CSV output was not valid UTF-8")
}

/// Render readings in the requested format.
pub fn format_readings(readings: &[SoilReading], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_readings_text(readings)),
        OutputFormat::Json => format_readings_json(readings),
        OutputFormat::Csv => format_readings_csv(readings),
    }
}
