//! The ingestion facade: streams a trips file into [`TripTallies`] and serves
//! ranking queries against the aggregated state.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::ranking::{self, SlotCount, ZoneCount};
use crate::row;
use crate::tally::TripTallies;
use crate::telemetry::IngestStats;

/// Read buffer for ingestion; file I/O dominates wall-clock time at scale.
const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Aggregates one delimited trip file and answers top-K ranking queries.
///
/// `ingest_file` never surfaces an error: a missing file, an empty file, or
/// arbitrarily malformed content all degrade to fewer rows counted. Each call
/// resets the aggregation state first, so rankings always describe exactly
/// one source file.
#[derive(Debug, Default)]
pub struct TripAnalyzer {
    tallies: TripTallies,
    stats: IngestStats,
}

impl TripAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the zone map when the expected cardinality is known.
    pub fn with_zone_capacity(zones: usize) -> Self {
        Self {
            tallies: TripTallies::with_zone_capacity(zones),
            stats: IngestStats::default(),
        }
    }

    /// Streams `path` line by line and aggregates every valid row.
    ///
    /// The first line is discarded as the header, validated or not. Malformed
    /// rows and blank lines are skipped silently; an unopenable file leaves
    /// both tallies empty.
    pub fn ingest_file(&mut self, path: impl AsRef<Path>) {
        self.tallies.clear();
        self.stats = IngestStats::default();

        let Ok(file) = File::open(path) else {
            return;
        };
        let mut lines = BufReader::with_capacity(READ_BUFFER_BYTES, file).lines();

        // Header: discarded unconditionally, readable or not.
        if lines.next().is_none() {
            return;
        }

        for line in lines {
            let line = match line {
                Ok(line) => line,
                // A non-UTF-8 line has already been consumed; skip it.
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.stats.lines_read += 1;
                    self.stats.rows_rejected += 1;
                    continue;
                }
                // A real I/O error ends the pass with what was aggregated.
                Err(_) => break,
            };

            if line.trim().is_empty() {
                continue;
            }
            self.stats.lines_read += 1;

            match row::parse_row(&line) {
                Some(valid) => {
                    self.tallies.record(valid.zone, valid.hour);
                    self.stats.rows_ingested += 1;
                }
                None => self.stats.rows_rejected += 1,
            }
        }
    }

    /// The top `k` zones by trip count: count desc, then zone asc.
    pub fn top_zones(&self, k: usize) -> Vec<ZoneCount> {
        ranking::top_zones(&self.tallies, k)
    }

    /// The top `k` (zone, hour) slots: count desc, then zone asc, then hour asc.
    pub fn top_busy_slots(&self, k: usize) -> Vec<SlotCount> {
        ranking::top_busy_slots(&self.tallies, k)
    }

    /// Counters from the most recent ingestion pass.
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Read-only view of the aggregated tallies.
    pub fn tallies(&self) -> &TripTallies {
        &self.tallies
    }
}
