//! Reporting layer on top of trip_core: per-file reports, parallel batch
//! analysis over many trip files, and ranking export to CSV/JSON/Parquet.
//!
//! Each file is analyzed by its own `TripAnalyzer`, so the core's
//! single-owner aggregation contract is never violated; parallelism only
//! exists across files.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use trip_reports::{export_reports_to_json, run_batch_reports};
//!
//! let paths = vec![PathBuf::from("monday.csv"), PathBuf::from("tuesday.csv")];
//! let reports = run_batch_reports(paths, 10, None);
//! export_reports_to_json(&reports, "reports.json").unwrap();
//! ```

pub mod export;
pub mod report;
pub mod runner;

pub use export::{
    export_reports_to_json, export_slots_to_csv, export_slots_to_parquet, export_zones_to_csv,
    export_zones_to_parquet,
};
pub use report::{analyze_file, TripFileReport};
pub use runner::{run_batch_reports, run_batch_reports_with_progress};
