//! Aggregation state: trip counts keyed by zone, with a per-hour breakdown.
//!
//! The map is unordered and stays that way; any ordering of its contents is
//! the ranker's job.

use std::collections::HashMap;

/// Slot counters are indexed by hour-of-day.
pub const HOURS_PER_DAY: usize = 24;

/// Running counters for one pickup zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTally {
    /// Total valid trips seen for this zone since the last reset.
    pub trips: u64,
    /// Valid trips per pickup hour.
    pub by_hour: [u64; HOURS_PER_DAY],
}

impl ZoneTally {
    fn zeroed() -> Self {
        Self {
            trips: 0,
            by_hour: [0; HOURS_PER_DAY],
        }
    }
}

/// Aggregated trip counts for all zones seen in one ingestion pass.
///
/// Counters are u64 and only ever increase between resets; millions of
/// increments stay well clear of overflow.
#[derive(Debug, Default)]
pub struct TripTallies {
    zones: HashMap<String, ZoneTally>,
}

impl TripTallies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the zone map when the expected cardinality is known,
    /// avoiding incremental rehashing during a large ingest.
    pub fn with_zone_capacity(zones: usize) -> Self {
        Self {
            zones: HashMap::with_capacity(zones),
        }
    }

    /// Drops all counters; the next ingestion pass starts from nothing.
    pub fn clear(&mut self) {
        self.zones.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn distinct_zones(&self) -> usize {
        self.zones.len()
    }

    /// Counts one trip for `zone` at `hour`. Hours outside 0–23 are ignored.
    ///
    /// Amortized O(1): one hash lookup, and the key string is only allocated
    /// the first time a zone is seen.
    pub fn record(&mut self, zone: &str, hour: u8) {
        let hour = usize::from(hour);
        if hour >= HOURS_PER_DAY {
            return;
        }

        match self.zones.get_mut(zone) {
            Some(tally) => {
                tally.trips += 1;
                tally.by_hour[hour] += 1;
            }
            None => {
                let mut tally = ZoneTally::zeroed();
                tally.trips = 1;
                tally.by_hour[hour] = 1;
                self.zones.insert(zone.to_owned(), tally);
            }
        }
    }

    /// Total trips for one zone; 0 for a zone never seen.
    pub fn zone_trips(&self, zone: &str) -> u64 {
        self.zones.get(zone).map_or(0, |tally| tally.trips)
    }

    /// Trips for one (zone, hour) slot; 0 for a slot never seen.
    pub fn slot_trips(&self, zone: &str, hour: u8) -> u64 {
        let hour = usize::from(hour);
        if hour >= HOURS_PER_DAY {
            return 0;
        }
        self.zones.get(zone).map_or(0, |tally| tally.by_hour[hour])
    }

    /// All zones with their trip totals, in unspecified order.
    pub fn zones(&self) -> impl Iterator<Item = (&str, u64)> {
        self.zones
            .iter()
            .map(|(zone, tally)| (zone.as_str(), tally.trips))
    }

    /// All (zone, hour, count) slots including zero counts, in unspecified order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, u8, u64)> {
        self.zones.iter().flat_map(|(zone, tally)| {
            tally
                .by_hour
                .iter()
                .enumerate()
                .map(move |(hour, &count)| (zone.as_str(), hour as u8, count))
        })
    }
}
