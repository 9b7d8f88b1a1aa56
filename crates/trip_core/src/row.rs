//! Row validation: one delimited line in, a `(zone, hour)` pair or nothing out.
//!
//! Parsing is positional on `,` and not quote-aware. Every check rejects by
//! returning `None`; no error type, no panic, no allocation on this path.

/// A structurally and semantically valid row, reduced to what aggregation needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRow<'a> {
    pub zone: &'a str,
    pub hour: u8,
}

/// Validates one data line.
///
/// Field order: identifier, pickup zone, dropoff zone, pickup timestamp,
/// distance, fare. Rules applied in order: at least six fields; identifier
/// trims to a non-empty all-digit string; both zone fields trim non-empty;
/// the timestamp yields an hour in 0–23. Distance and fare are checked for
/// presence only. The pickup zone is kept byte-exact after trimming.
pub fn parse_row(line: &str) -> Option<ValidRow<'_>> {
    let mut fields = line.split(',');
    let id = fields.next()?.trim();
    let pickup_zone = fields.next()?.trim();
    let dropoff_zone = fields.next()?.trim();
    let pickup_at = fields.next()?;
    fields.next()?; // distance
    fields.next()?; // fare

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if pickup_zone.is_empty() || dropoff_zone.is_empty() {
        return None;
    }
    let hour = extract_hour(pickup_at)?;

    Some(ValidRow {
        zone: pickup_zone,
        hour,
    })
}

/// Pulls the hour out of a `<date> HH:MM`-shaped timestamp field.
///
/// Locates the first `:` and reads the one or two decimal digits immediately
/// before it. No colon, no preceding digit, or a value above 23 is a reject.
pub fn extract_hour(timestamp: &str) -> Option<u8> {
    let ts = timestamp.trim();
    let colon = ts.find(':')?;
    let bytes = ts.as_bytes();

    let mut start = colon;
    while start > 0 && colon - start < 2 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == colon {
        return None;
    }

    let hour: u8 = ts[start..colon].parse().ok()?;
    (hour < 24).then_some(hour)
}
