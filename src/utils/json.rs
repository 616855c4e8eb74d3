use crate::error::{convert_err, ErrorType, Result};
use serde::Serialize;
use std::convert::AsRef;
use std::fs::OpenOptions;
use std::path::Path;

fn create<P: AsRef<Path>>(path: P) -> Result<std::fs::File> {
    convert_err(
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path),
        ErrorType::IoError,
    )
}

pub fn save_to_file<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> Result<()> {
    let file = create(path)?;
    Ok(serde_json::to_writer(file, value)?)
}

pub fn save_to_file_pretty<T: Serialize, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> Result<()> {
    let file = create(path)?;
    Ok(serde_json::to_writer_pretty(file, value)?)
}
