use std::fs::File;
use std::path::Path;

pub(crate) fn ensure_not_empty<T>(entries: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    if entries.is_empty() {
        return Err("No ranking entries to export".into());
    }

    Ok(())
}

pub(crate) fn create_output_file(
    path: impl AsRef<Path>,
) -> Result<File, Box<dyn std::error::Error>> {
    Ok(File::create(path)?)
}
