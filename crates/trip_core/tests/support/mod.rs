#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use trip_core::TripAnalyzer;

pub const HEADER: &str = "TripID,PickupZoneID,DropoffZoneID,PickupDateTime,DistanceKm,FareAmount";

/// A collision-free path under the system temp dir.
pub fn temp_csv_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{nanos}.csv"))
}

/// Writes a trip file: header first, then the given rows, newline-terminated.
pub fn write_trip_file(path: &Path, rows: &[&str]) {
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(path, contents).expect("trip file should be written");
}

/// Writes `rows` to a temp file, ingests it, and cleans the file up.
pub fn analyze_rows(prefix: &str, rows: &[&str]) -> TripAnalyzer {
    let path = temp_csv_path(prefix);
    write_trip_file(&path, rows);

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path);

    let _ = std::fs::remove_file(&path);
    analyzer
}
