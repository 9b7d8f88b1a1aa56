//! Parallel batch analysis using rayon.
//!
//! Files are analyzed concurrently, one independent `TripAnalyzer` per file;
//! no aggregation state is shared between threads.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::report::{analyze_file, TripFileReport};

/// Analyze multiple trip files in parallel.
///
/// Uses rayon to spread files across available CPU cores. Each file gets a
/// fresh analyzer, so results are identical to analyzing them one by one.
///
/// # Arguments
///
/// * `paths` - Trip files to analyze
/// * `top_k` - Ranking depth kept per file
/// * `num_threads` - Optional number of threads. If None, uses rayon's default.
///
/// # Returns
///
/// Vector of `TripFileReport` in the same order as the input paths.
pub fn run_batch_reports(
    paths: Vec<PathBuf>,
    top_k: usize,
    num_threads: Option<usize>,
) -> Vec<TripFileReport> {
    run_batch_reports_with_progress(paths, top_k, num_threads, true)
}

/// Analyze multiple trip files in parallel with an optional progress bar.
///
/// # Arguments
///
/// * `paths` - Trip files to analyze
/// * `top_k` - Ranking depth kept per file
/// * `num_threads` - Optional number of threads. If None, uses rayon's default.
/// * `show_progress` - Whether to display a progress bar
///
/// # Returns
///
/// Vector of `TripFileReport` in the same order as the input paths.
pub fn run_batch_reports_with_progress(
    paths: Vec<PathBuf>,
    top_k: usize,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Vec<TripFileReport> {
    let total = paths.len();
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let pool = if let Some(threads) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .expect("Failed to create thread pool")
    } else {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Failed to create thread pool")
    };

    let pb_clone = pb.clone();
    let reports = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let report = analyze_file(path, top_k);
                if let Some(ref progress_bar) = pb_clone {
                    progress_bar.inc(1);
                }
                report
            })
            .collect()
    });

    if let Some(ref progress_bar) = pb {
        progress_bar.finish_with_message("Completed");
    }

    reports
}
