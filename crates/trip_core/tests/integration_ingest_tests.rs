mod support;

use support::{analyze_rows, temp_csv_path, write_trip_file, HEADER};
use trip_core::TripAnalyzer;

#[test]
fn missing_file_yields_empty_rankings() {
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file("missing_file_hopefully_123.csv");

    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
    assert_eq!(analyzer.stats().lines_read, 0);
}

#[test]
fn malformed_rows_are_skipped_without_failing() {
    let analyzer = analyze_rows(
        "ingest_malformed",
        &[
            "1,ZONE_A,ZONE_X,2024-01-01 09:15,1.2,10.0",
            // missing pickup zone
            "2,,ZONE_X,2024-01-01 09:15,1.2,10.0",
            // missing pickup timestamp
            "3,ZONE_A,ZONE_X,,1.2,10.0",
            // too few columns
            "4,ZONE_A,ZONE_X,2024-01-01 10:00",
            // hour cannot be parsed
            "5,ZONE_B,ZONE_Y,NOT_A_DATE,2.0,12.5",
            "6,ZONE_B,ZONE_Y,2024-01-01 23:59,2.0,12.5",
        ],
    );

    assert_eq!(analyzer.tallies().zone_trips("ZONE_A"), 1);
    assert_eq!(analyzer.tallies().zone_trips("ZONE_B"), 1);
    assert_eq!(analyzer.tallies().distinct_zones(), 2);
    assert_eq!(analyzer.tallies().slot_trips("ZONE_A", 9), 1);
    assert_eq!(analyzer.tallies().slot_trips("ZONE_B", 23), 1);

    let stats = analyzer.stats();
    assert_eq!(stats.lines_read, 6);
    assert_eq!(stats.rows_ingested, 2);
    assert_eq!(stats.rows_rejected, 4);
}

#[test]
fn header_is_discarded_even_when_it_looks_valid() {
    // A first line shaped like a perfectly valid row must still be dropped.
    let path = temp_csv_path("ingest_rowlike_header");
    let contents = "9,ZONE_H,ZONE_X,2024-01-01 08:00,1.0,5.0\n\
                    1,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0\n";
    std::fs::write(&path, contents).expect("trip file should be written");

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(analyzer.tallies().distinct_zones(), 1);
    assert_eq!(analyzer.tallies().zone_trips("ZONE_A"), 1);
    assert_eq!(analyzer.tallies().zone_trips("ZONE_H"), 0);
}

#[test]
fn header_only_and_fully_empty_files_yield_empty_state() {
    let analyzer = analyze_rows("ingest_header_only", &[]);
    assert!(analyzer.top_zones(10).is_empty());
    assert_eq!(analyzer.stats().lines_read, 0);

    let path = temp_csv_path("ingest_empty");
    std::fs::write(&path, "").expect("empty file should be written");
    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path);
    let _ = std::fs::remove_file(&path);

    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
}

#[test]
fn blank_lines_are_skipped_not_counted() {
    let analyzer = analyze_rows(
        "ingest_blank_lines",
        &[
            "1,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0",
            "",
            "   ",
            "2,ZONE_A,ZONE_X,2024-01-01 11:00,1.0,5.0",
            "",
        ],
    );

    assert_eq!(analyzer.tallies().zone_trips("ZONE_A"), 2);

    let stats = analyzer.stats();
    assert_eq!(stats.lines_read, 2);
    assert_eq!(stats.rows_rejected, 0);
}

#[test]
fn non_utf8_lines_are_skipped() {
    let path = temp_csv_path("ingest_non_utf8");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(HEADER.as_bytes());
    bytes.push(b'\n');
    bytes.extend_from_slice(b"1,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0\n");
    bytes.extend_from_slice(b"2,ZONE_\xFF\xFE,ZONE_X,2024-01-01 11:00,1.0,5.0\n");
    bytes.extend_from_slice(b"3,ZONE_B,ZONE_X,2024-01-01 12:00,1.0,5.0\n");
    std::fs::write(&path, bytes).expect("trip file should be written");

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(analyzer.tallies().zone_trips("ZONE_A"), 1);
    assert_eq!(analyzer.tallies().zone_trips("ZONE_B"), 1);
    assert_eq!(analyzer.tallies().distinct_zones(), 2);
    assert_eq!(analyzer.stats().rows_rejected, 1);
}

#[test]
fn second_ingest_replaces_rather_than_accumulates() {
    let first = temp_csv_path("ingest_reset_first");
    write_trip_file(&first, &["1,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0"]);
    let second = temp_csv_path("ingest_reset_second");
    write_trip_file(
        &second,
        &[
            "1,ZONE_B,ZONE_X,2024-01-01 12:00,1.0,5.0",
            "2,ZONE_B,ZONE_X,2024-01-01 13:00,1.0,5.0",
        ],
    );

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&first);
    analyzer.ingest_file(&second);
    let _ = std::fs::remove_file(&first);
    let _ = std::fs::remove_file(&second);

    assert_eq!(analyzer.tallies().zone_trips("ZONE_A"), 0);
    assert_eq!(analyzer.tallies().zone_trips("ZONE_B"), 2);
    assert_eq!(analyzer.stats().lines_read, 2);
}

#[test]
fn ingesting_a_missing_file_clears_previous_state() {
    let path = temp_csv_path("ingest_then_missing");
    write_trip_file(&path, &["1,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0"]);

    let mut analyzer = TripAnalyzer::new();
    analyzer.ingest_file(&path);
    let _ = std::fs::remove_file(&path);
    assert_eq!(analyzer.tallies().distinct_zones(), 1);

    analyzer.ingest_file("missing_file_hopefully_456.csv");
    assert!(analyzer.top_zones(10).is_empty());
    assert!(analyzer.top_busy_slots(10).is_empty());
}

#[test]
fn two_fresh_instances_agree_on_the_same_file() {
    let path = temp_csv_path("ingest_idempotent");
    write_trip_file(
        &path,
        &[
            "1,ZONE_B,ZONE_X,2024-01-01 10:00,1.0,5.0",
            "2,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0",
            "3,ZONE_A,ZONE_X,2024-01-01 11:00,1.0,5.0",
        ],
    );

    let mut left = TripAnalyzer::new();
    left.ingest_file(&path);
    let mut right = TripAnalyzer::new();
    right.ingest_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(left.top_zones(10), right.top_zones(10));
    assert_eq!(left.top_busy_slots(10), right.top_busy_slots(10));
    assert_eq!(left.stats(), right.stats());
}

#[test]
fn zone_capacity_presizing_changes_nothing_observable() {
    let path = temp_csv_path("ingest_presized");
    write_trip_file(
        &path,
        &[
            "1,ZONE_A,ZONE_X,2024-01-01 10:00,1.0,5.0",
            "2,ZONE_B,ZONE_X,2024-01-01 11:00,1.0,5.0",
        ],
    );

    let mut plain = TripAnalyzer::new();
    plain.ingest_file(&path);
    let mut presized = TripAnalyzer::with_zone_capacity(10_000);
    presized.ingest_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(plain.top_zones(10), presized.top_zones(10));
    assert_eq!(plain.top_busy_slots(10), presized.top_busy_slots(10));
}
