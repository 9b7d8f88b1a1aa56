//! Analyze a trips file and print the top-K rankings plus elapsed time.
//!
//! With no argument, a synthetic 200k-row file is generated first.
//!
//! Run with: cargo run -p trip_core --release --example analyze_run [-- trips.csv]

use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trip_core::TripAnalyzer;

const NUM_ROWS: usize = 200_000;
const NUM_ZONES: usize = 500;
const TOP_K: usize = 10;

fn synthesize_trips(path: &std::path::Path) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut contents = String::with_capacity(NUM_ROWS * 48);
    contents.push_str("TripID,PickupZoneID,DropoffZoneID,PickupDateTime,DistanceKm,FareAmount\n");
    for id in 0..NUM_ROWS {
        let pickup = rng.gen_range(0..NUM_ZONES);
        let dropoff = rng.gen_range(0..NUM_ZONES);
        let day: u32 = rng.gen_range(1..28);
        let hour: u32 = rng.gen_range(0..24);
        let minute: u32 = rng.gen_range(0..60);
        let distance: u32 = rng.gen_range(1..30);
        writeln!(
            contents,
            "{id},ZONE_{pickup:03},ZONE_{dropoff:03},2024-06-{day:02} {hour:02}:{minute:02},{distance}.0,{fare}.50",
            fare = distance * 2,
        )
        .expect("writing to a String cannot fail");
    }
    std::fs::write(path, contents).expect("synthetic trips file should be written");
}

fn main() {
    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let path = std::env::temp_dir().join("analyze_run_trips.csv");
            println!(
                "No input given; synthesizing {NUM_ROWS} trips across {NUM_ZONES} zones at {}",
                path.display()
            );
            synthesize_trips(&path);
            path
        }
    };

    let start = Instant::now();
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path);
    let top_zones = analyzer.top_zones(TOP_K);
    let top_slots = analyzer.top_busy_slots(TOP_K);
    let elapsed_ms = start.elapsed().as_millis();

    println!("TOP_ZONES");
    for entry in &top_zones {
        println!("{},{}", entry.zone, entry.count);
    }
    println!("TOP_SLOTS");
    for slot in &top_slots {
        println!("{},{},{}", slot.zone, slot.hour, slot.count);
    }
    println!("EXEC_MS");
    println!("{elapsed_ms}");

    let stats = analyzer.stats();
    println!(
        "\n{} lines read, {} ingested, {} rejected, {} distinct zones",
        stats.lines_read,
        stats.rows_ingested,
        stats.rows_rejected,
        analyzer.tallies().distinct_zones()
    );
}
