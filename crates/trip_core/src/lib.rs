//! Core trip analytics: stream a delimited trip file, aggregate per-zone and
//! per-zone-per-hour trip counts, and answer deterministic top-K queries.
//!
//! Ingestion is a single best-effort pass. Malformed rows are skipped, never
//! repaired, and nothing that happens during ingestion surfaces as an error:
//! a missing or corrupt file simply yields smaller (possibly empty) rankings.
//!
//! # Quick Start
//!
//! ```no_run
//! use trip_core::TripAnalyzer;
//!
//! let mut analyzer = TripAnalyzer::new();
//! analyzer.ingest_file("Trips.csv");
//!
//! for entry in analyzer.top_zones(10) {
//!     println!("{},{}", entry.zone, entry.count);
//! }
//! for slot in analyzer.top_busy_slots(10) {
//!     println!("{},{},{}", slot.zone, slot.hour, slot.count);
//! }
//! ```
//!
//! # Architecture
//!
//! - [`row`]: validation of one delimited line into a `(zone, hour)` pair
//! - [`tally`]: the unordered aggregation state, keyed by zone
//! - [`ranking`]: deterministic top-K selection over the tallies
//! - [`analyzer`]: the ingestion facade tying the stages together
//! - [`telemetry`]: counters describing the most recent ingestion pass

pub mod analyzer;
pub mod ranking;
pub mod row;
pub mod tally;
pub mod telemetry;

pub use analyzer::TripAnalyzer;
pub use ranking::{SlotCount, ZoneCount};
pub use tally::TripTallies;
pub use telemetry::IngestStats;
