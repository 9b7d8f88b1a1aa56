use std::fs::File;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt64Array, UInt8Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use trip_core::{SlotCount, ZoneCount};

fn utf8_field(name: &'static str) -> Field {
    Field::new(name, DataType::Utf8, false)
}

fn u64_field(name: &'static str) -> Field {
    Field::new(name, DataType::UInt64, false)
}

fn u8_field(name: &'static str) -> Field {
    Field::new(name, DataType::UInt8, false)
}

fn write_record_batch(
    file: File,
    schema: Schema,
    arrays: Vec<ArrayRef>,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = Arc::new(schema);
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

pub(crate) fn export_zones_to_parquet_impl(
    zones: &[ZoneCount],
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut zone_values = Vec::with_capacity(zones.len());
    let mut trip_counts = Vec::with_capacity(zones.len());
    for entry in zones {
        zone_values.push(entry.zone.clone());
        trip_counts.push(entry.count);
    }

    let schema = Schema::new(vec![utf8_field("zone"), u64_field("trips")]);
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(zone_values)),
        Arc::new(UInt64Array::from(trip_counts)),
    ];

    write_record_batch(file, schema, arrays)
}

pub(crate) fn export_slots_to_parquet_impl(
    slots: &[SlotCount],
    file: File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut zone_values = Vec::with_capacity(slots.len());
    let mut hours = Vec::with_capacity(slots.len());
    let mut trip_counts = Vec::with_capacity(slots.len());
    for slot in slots {
        zone_values.push(slot.zone.clone());
        hours.push(slot.hour);
        trip_counts.push(slot.count);
    }

    let schema = Schema::new(vec![
        utf8_field("zone"),
        u8_field("hour"),
        u64_field("trips"),
    ]);
    let arrays: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(zone_values)),
        Arc::new(UInt8Array::from(hours)),
        Arc::new(UInt64Array::from(trip_counts)),
    ];

    write_record_batch(file, schema, arrays)
}
