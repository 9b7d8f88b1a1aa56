use crate::report::TripFileReport;

pub(crate) fn export_reports_to_json_impl(
    reports: &[TripFileReport],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, reports)?;
    Ok(())
}
