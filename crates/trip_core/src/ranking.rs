//! Deterministic top-K selection over the aggregated tallies.
//!
//! The total order is fully specified so output is byte-for-byte identical
//! across runs regardless of map iteration order: count descending, then
//! zone ascending (bytewise), then hour ascending for slots. Selection keeps
//! a bounded heap of K entries instead of sorting everything.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::tally::TripTallies;

/// One entry of a zone ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

/// One entry of a (zone, hour) slot ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCount {
    pub zone: String,
    pub hour: u8,
    pub count: u64,
}

/// Borrowed zone entry; `Ord` is the ranking order, smallest ranks first.
struct ZoneEntry<'a> {
    zone: &'a str,
    count: u64,
}

impl Ord for ZoneEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.zone.cmp(other.zone))
    }
}

impl PartialOrd for ZoneEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ZoneEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ZoneEntry<'_> {}

/// Borrowed slot entry; `Ord` is the ranking order, smallest ranks first.
struct SlotEntry<'a> {
    zone: &'a str,
    hour: u8,
    count: u64,
}

impl Ord for SlotEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.zone.cmp(other.zone))
            .then_with(|| self.hour.cmp(&other.hour))
    }
}

impl PartialOrd for SlotEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SlotEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SlotEntry<'_> {}

/// Keeps the k smallest entries under `T`'s order, returned in order.
///
/// The heap never holds more than k + 1 entries, so selection is
/// O(N log K) instead of a full O(N log N) sort.
fn select_top_k<T: Ord>(entries: impl IntoIterator<Item = T>, k: usize) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::new();
    for entry in entries {
        heap.push(entry);
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.into_sorted_vec()
}

/// The top `k` zones by trip count: count desc, then zone asc.
///
/// Returns all zones, fully ordered, when fewer than `k` exist; an empty
/// vector for `k == 0` or empty tallies.
pub fn top_zones(tallies: &TripTallies, k: usize) -> Vec<ZoneCount> {
    select_top_k(
        tallies
            .zones()
            .map(|(zone, count)| ZoneEntry { zone, count }),
        k,
    )
    .into_iter()
    .map(|entry| ZoneCount {
        zone: entry.zone.to_owned(),
        count: entry.count,
    })
    .collect()
}

/// The top `k` slots by trip count: count desc, then zone asc, then hour asc.
///
/// Slots with a zero counter are never materialized.
pub fn top_busy_slots(tallies: &TripTallies, k: usize) -> Vec<SlotCount> {
    select_top_k(
        tallies
            .slots()
            .filter(|&(_, _, count)| count > 0)
            .map(|(zone, hour, count)| SlotEntry { zone, hour, count }),
        k,
    )
    .into_iter()
    .map(|entry| SlotCount {
        zone: entry.zone.to_owned(),
        hour: entry.hour,
        count: entry.count,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tallies(rows: &[(&str, u8)]) -> TripTallies {
        let mut tallies = TripTallies::new();
        for &(zone, hour) in rows {
            tallies.record(zone, hour);
        }
        tallies
    }

    #[test]
    fn zones_order_by_count_desc_then_zone_asc() {
        let tallies = tallies(&[
            ("ZONE_B", 10),
            ("ZONE_A", 10),
            ("ZONE_B", 11),
            ("ZONE_A", 11),
            ("ZONE_C", 10),
        ]);

        let top = top_zones(&tallies, 10);
        assert_eq!(top.len(), 3);
        assert_eq!((top[0].zone.as_str(), top[0].count), ("ZONE_A", 2));
        assert_eq!((top[1].zone.as_str(), top[1].count), ("ZONE_B", 2));
        assert_eq!((top[2].zone.as_str(), top[2].count), ("ZONE_C", 1));
    }

    #[test]
    fn zones_k_truncates_and_zero_is_empty() {
        let tallies = tallies(&[("ZONE_A", 1), ("ZONE_B", 2), ("ZONE_C", 3)]);

        assert_eq!(top_zones(&tallies, 2).len(), 2);
        assert_eq!(top_zones(&tallies, 0), vec![]);
        assert_eq!(top_zones(&TripTallies::new(), 10), vec![]);
    }

    #[test]
    fn slots_order_by_count_then_zone_then_hour() {
        let tallies = tallies(&[("Z1", 10), ("Z1", 11), ("Z2", 10)]);

        let top = top_busy_slots(&tallies, 10);
        let flat: Vec<_> = top
            .iter()
            .map(|slot| (slot.zone.as_str(), slot.hour, slot.count))
            .collect();
        assert_eq!(flat, vec![("Z1", 10, 1), ("Z1", 11, 1), ("Z2", 10, 1)]);
    }

    #[test]
    fn slots_with_zero_count_are_omitted() {
        let tallies = tallies(&[("ZONE_A", 7), ("ZONE_A", 7), ("ZONE_A", 19)]);

        let top = top_busy_slots(&tallies, 100);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|slot| slot.count > 0));
        assert_eq!((top[0].hour, top[0].count), (7, 2));
        assert_eq!((top[1].hour, top[1].count), (19, 1));
    }

    #[test]
    fn slot_ties_break_by_hour_ascending() {
        let tallies = tallies(&[("ZONE_TIE", 3), ("ZONE_TIE", 1), ("ZONE_TIE", 2)]);

        let top = top_busy_slots(&tallies, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].hour, 1);
        assert_eq!(top[1].hour, 2);
    }

    #[test]
    fn selection_matches_a_full_sort() {
        let mut tallies = TripTallies::new();
        for i in 0..1000u32 {
            let zone = format!("ZONE_{:04}", i % 97);
            tallies.record(&zone, (i % 24) as u8);
        }

        let top = top_zones(&tallies, 5);

        let mut all = top_zones(&tallies, usize::MAX);
        all.truncate(5);
        assert_eq!(top, all);
    }
}
