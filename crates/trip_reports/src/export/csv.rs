use trip_core::{SlotCount, ZoneCount};

pub(crate) fn export_zones_to_csv_impl(
    zones: &[ZoneCount],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["zone", "trips"])?;
    for entry in zones {
        let count = entry.count.to_string();
        wtr.write_record([entry.zone.as_str(), count.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_slots_to_csv_impl(
    slots: &[SlotCount],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["zone", "hour", "trips"])?;
    for slot in slots {
        let hour = slot.hour.to_string();
        let count = slot.count.to_string();
        wtr.write_record([slot.zone.as_str(), hour.as_str(), count.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
