//! Flat-file export of soil readings.
//!
//! CSV is the primary format: a fixed header row matching the on-screen grid,
//! then one row per reading in the order given. JSON is available for tools
//! that prefer structured input.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use soil_types::{SoilReading, format_measurement, format_test_date};

use crate::error::Result;

/// Header row of CSV exports, in grid column order.
pub const EXPORT_HEADER: [&str; 8] = [
    "ID",
    "Farm Location",
    "Test Date",
    "Nitrogen",
    "Phosphorus",
    "Potassium",
    "pH",
    "Moisture",
];

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// Infer the format from a file extension, defaulting to CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Csv,
        }
    }

    /// Short uppercase name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Cells of one CSV row, in [`EXPORT_HEADER`] order.
pub fn csv_row(reading: &SoilReading) -> [String; 8] {
    [
        reading.id.to_string(),
        reading.location.clone(),
        format_test_date(reading.test_date),
        format_measurement(reading.nitrogen),
        format_measurement(reading.phosphorus),
        format_measurement(reading.potassium),
        format_measurement(reading.ph),
        format_measurement(reading.moisture),
    ]
}

/// Write readings as CSV to any writer.
pub fn write_csv<W: Write>(readings: &[SoilReading], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPORT_HEADER)?;
    for reading in readings {
        csv.write_record(csv_row(reading))?;
    }
    csv.flush()?;
    Ok(())
}

/// Write readings as a JSON document to any writer.
pub fn write_json<W: Write>(readings: &[SoilReading], writer: W) -> Result<()> {
    #[derive(Serialize)]
    struct JsonExport<'a> {
        exported_at: String,
        record_count: usize,
        records: &'a [SoilReading],
    }

    let doc = JsonExport {
        exported_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
        record_count: readings.len(),
        records: readings,
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

/// Export readings to a CSV file, overwriting any existing file.
pub fn export_csv(readings: &[SoilReading], path: &Path) -> Result<()> {
    export(readings, path, ExportFormat::Csv)
}

/// Export readings to a JSON file, overwriting any existing file.
pub fn export_json(readings: &[SoilReading], path: &Path) -> Result<()> {
    export(readings, path, ExportFormat::Json)
}

/// Export readings to `path` in the given format, overwriting any existing file.
pub fn export(readings: &[SoilReading], path: &Path, format: ExportFormat) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    match format {
        ExportFormat::Csv => write_csv(readings, &mut file)?,
        ExportFormat::Json => write_json(readings, &mut file)?,
    }
    file.flush()?;

    info!(
        "Exported {} readings as {} to {}",
        readings.len(),
        format.label(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn springfield() -> SoilReading {
        SoilReading {
            id: 1,
            location: "Springfield".to_string(),
            test_date: date!(2023 - 01 - 01),
            nitrogen: 1.0,
            phosphorus: 2.0,
            potassium: 3.0,
            ph: 6.5,
            moisture: 20.0,
        }
    }

    #[test]
    fn test_write_csv_single_record() {
        let mut out = Vec::new();
        write_csv(&[springfield()], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "ID,Farm Location,Test Date,Nitrogen,Phosphorus,Potassium,pH,Moisture",
                "1,Springfield,2023-01-01,1.0,2.0,3.0,6.5,20.0",
            ]
        );
    }

    #[test]
    fn test_write_csv_empty_has_header_only() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID,Farm Location,Test Date,Nitrogen,Phosphorus,Potassium,pH,Moisture\n"
        );
    }

    #[test]
    fn test_write_csv_quotes_commas() {
        let mut reading = springfield();
        reading.location = "Springfield, IL".to_string();

        let mut out = Vec::new();
        write_csv(&[reading], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1,\"Springfield, IL\",2023-01-01"));
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&[springfield()], &mut out).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["record_count"], 1);
        assert_eq!(doc["records"][0]["location"], "Springfield");
        assert_eq!(doc["records"][0]["test_date"], "2023-01-01");
        assert!(doc["exported_at"].is_string());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("out.json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("OUT.JSON")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Csv);
    }
}
