//! Ranking and report export utilities.
//!
//! This module provides functions to export zone and slot rankings to CSV and
//! Parquet, and whole file reports to JSON. Rankings arrive already ordered
//! (the core's deterministic order) and are written exactly as given.

use std::path::Path;

use trip_core::{SlotCount, ZoneCount};

use crate::report::TripFileReport;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/parquet.rs"]
mod parquet;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export a zone ranking to CSV (`zone,trips`).
///
/// # Arguments
///
/// * `zones` - Ranking entries, already ordered
/// * `path` - Path to output CSV file
///
/// # Errors
///
/// Returns an error if the ranking is empty or if file creation or CSV
/// writing fails.
pub fn export_zones_to_csv(
    zones: &[ZoneCount],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(zones)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_zones_to_csv_impl(zones, file)
}

/// Export a slot ranking to CSV (`zone,hour,trips`).
///
/// # Errors
///
/// Returns an error if the ranking is empty or if file creation or CSV
/// writing fails.
pub fn export_slots_to_csv(
    slots: &[SlotCount],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(slots)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_slots_to_csv_impl(slots, file)
}

/// Export file reports to JSON (an array of report objects).
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_reports_to_json(
    reports: &[TripFileReport],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_reports_to_json_impl(reports, file)
}

/// Export a zone ranking to Parquet (Utf8 zone, UInt64 trips).
///
/// # Errors
///
/// Returns an error if the ranking is empty or if file creation or Parquet
/// writing fails.
pub fn export_zones_to_parquet(
    zones: &[ZoneCount],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(zones)?;
    let file = writer_utils::create_output_file(path)?;
    parquet::export_zones_to_parquet_impl(zones, file)
}

/// Export a slot ranking to Parquet (Utf8 zone, UInt8 hour, UInt64 trips).
///
/// # Errors
///
/// Returns an error if the ranking is empty or if file creation or Parquet
/// writing fails.
pub fn export_slots_to_parquet(
    slots: &[SlotCount],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(slots)?;
    let file = writer_utils::create_output_file(path)?;
    parquet::export_slots_to_parquet_impl(slots, file)
}
