//! Ingest telemetry: counters describing the most recent ingestion pass.

use serde::Serialize;

/// Outcome counters for one `ingest_file` call.
///
/// `lines_read` counts data lines only (the header and blank lines are not
/// rows); every counted line ends up in exactly one of `rows_ingested` or
/// `rows_rejected`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub lines_read: u64,
    pub rows_ingested: u64,
    pub rows_rejected: u64,
}
