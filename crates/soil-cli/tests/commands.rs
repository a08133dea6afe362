//! Headless commands against an on-disk database.

use std::fs;
use std::path::Path;

use soil_cli::cli::OutputFormat;
use soil_cli::commands::{
    CommandContext, cmd_clear, cmd_delete, cmd_export, cmd_generate, cmd_list, cmd_status,
};
use soil_cli::config::Config;
use soil_core::{ExportFormat, Store};

fn context(dir: &tempfile::TempDir) -> CommandContext {
    let config = Config {
        export_path: dir.path().join("soil_health_data.csv"),
        batch_size: 4,
        ..Config::default()
    };
    CommandContext::new(dir.path().join("soil.db"), config, true, true)
}

fn count(path: &Path) -> u64 {
    Store::open(path).unwrap().count().unwrap()
}

#[test]
fn generate_uses_config_batch_size() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);

    cmd_generate(&ctx, None, Some(1)).unwrap();
    assert_eq!(count(&ctx.database), 4);

    cmd_generate(&ctx, Some(10), None).unwrap();
    assert_eq!(count(&ctx.database), 14);
}

#[test]
fn export_to_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    cmd_generate(&ctx, None, Some(2)).unwrap();

    cmd_export(&ctx, None, None).unwrap();

    let text = fs::read_to_string(&ctx.config.export_path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Farm Location,Test Date,Nitrogen,Phosphorus,Potassium,pH,Moisture")
    );
    assert_eq!(lines.count(), 4);
}

#[test]
fn export_json_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    cmd_generate(&ctx, None, Some(3)).unwrap();
    let out = dir.path().join("readings.json");

    cmd_export(&ctx, Some(out.clone()), None).unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["record_count"], 4);
}

#[test]
fn export_explicit_format_overrides_extension() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    let out = dir.path().join("readings.txt");

    cmd_export(&ctx, Some(out.clone()), Some(ExportFormat::Json)).unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["record_count"], 0);
}

#[test]
fn delete_by_id_and_missing_id() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    cmd_generate(&ctx, None, Some(4)).unwrap();
    let id = Store::open(&ctx.database).unwrap().fetch_all().unwrap()[0].id;

    cmd_delete(&ctx, id).unwrap();
    assert_eq!(count(&ctx.database), 3);

    // Already gone: still succeeds.
    cmd_delete(&ctx, id).unwrap();
    assert_eq!(count(&ctx.database), 3);
}

#[test]
fn clear_with_yes() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    cmd_generate(&ctx, None, Some(5)).unwrap();

    cmd_clear(&ctx, true).unwrap();
    assert_eq!(count(&ctx.database), 0);
}

#[test]
fn list_and_status_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    cmd_generate(&ctx, None, Some(6)).unwrap();

    cmd_list(&ctx, OutputFormat::Csv).unwrap();
    cmd_status(&ctx).unwrap();
}
