//! Example: analyze several trip files in parallel and export the results.
//!
//! This example demonstrates how to:
//! 1. Run a batch of trip files through independent analyzers
//! 2. Inspect the per-file reports
//! 3. Export reports to JSON and the busiest file's zone ranking to CSV
//!
//! Run with: cargo run -p trip_reports --release --example batch_report

use std::path::{Path, PathBuf};

use trip_reports::{export_reports_to_json, export_zones_to_csv, run_batch_reports};

fn write_sample_file(dir: &Path, name: &str, slots: &[(&str, u8, usize)]) -> PathBuf {
    let mut contents =
        String::from("TripID,PickupZoneID,DropoffZoneID,PickupDateTime,DistanceKm,FareAmount\n");
    let mut id = 1usize;
    for &(zone, hour, trips) in slots {
        for _ in 0..trips {
            contents.push_str(&format!(
                "{id},{zone},ZONE_X,2024-03-01 {hour:02}:15,2.5,12.0\n"
            ));
            id += 1;
        }
    }
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("sample trip file should be written");
    path
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join("trip_reports_batch_example");
    std::fs::create_dir_all(&dir)?;

    let paths = vec![
        write_sample_file(
            &dir,
            "monday.csv",
            &[("Mitte", 8, 120), ("Kreuzberg", 9, 80), ("Neukoelln", 17, 60)],
        ),
        write_sample_file(&dir, "tuesday.csv", &[("Mitte", 8, 90), ("Wedding", 12, 70)]),
        write_sample_file(
            &dir,
            "wednesday.csv",
            &[("Kreuzberg", 18, 150), ("Mitte", 8, 40)],
        ),
    ];

    println!("Analyzing {} trip files in parallel...", paths.len());
    let reports = run_batch_reports(paths, 10, None);

    for report in &reports {
        println!(
            "\n{}: {} rows ingested, {} rejected, {} distinct zones",
            report.path, report.rows_ingested, report.rows_rejected, report.distinct_zones
        );
        for entry in &report.top_zones {
            println!("  {:<12} {}", entry.zone, entry.count);
        }
    }

    let busiest = reports
        .iter()
        .max_by_key(|report| report.rows_ingested)
        .expect("at least one report");

    let json_path = dir.join("reports.json");
    export_reports_to_json(&reports, &json_path)?;
    let csv_path = dir.join("busiest_zones.csv");
    export_zones_to_csv(&busiest.top_zones, &csv_path)?;

    println!(
        "\nExported {} and {}",
        json_path.display(),
        csv_path.display()
    );
    Ok(())
}
