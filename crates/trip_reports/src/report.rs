//! Report extraction: everything worth keeping from one analyzed trip file.

use std::path::Path;

use serde::Serialize;
use trip_core::{SlotCount, TripAnalyzer, ZoneCount};

/// Summary of one analyzed trip file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripFileReport {
    /// Source file path as given.
    pub path: String,
    /// Data lines read (header and blank lines excluded).
    pub lines_read: u64,
    /// Rows that passed every validation rule.
    pub rows_ingested: u64,
    /// Rows rejected by any validation rule.
    pub rows_rejected: u64,
    /// Distinct pickup zones seen.
    pub distinct_zones: usize,
    /// Busiest zones: count desc, then zone asc.
    pub top_zones: Vec<ZoneCount>,
    /// Busiest (zone, hour) slots: count desc, then zone asc, then hour asc.
    pub top_slots: Vec<SlotCount>,
}

/// Analyze one trip file with a fresh analyzer, keeping the top `top_k`
/// entries of both rankings.
///
/// A missing or unreadable file produces an all-zero report, mirroring the
/// core's never-fail ingestion contract.
pub fn analyze_file(path: impl AsRef<Path>, top_k: usize) -> TripFileReport {
    let path = path.as_ref();
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(path);

    let stats = analyzer.stats();
    TripFileReport {
        path: path.display().to_string(),
        lines_read: stats.lines_read,
        rows_ingested: stats.rows_ingested,
        rows_rejected: stats.rows_rejected,
        distinct_zones: analyzer.tallies().distinct_zones(),
        top_zones: analyzer.top_zones(top_k),
        top_slots: analyzer.top_busy_slots(top_k),
    }
}
