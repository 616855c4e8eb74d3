use crate::assembler::OutputDocument;
use crate::error::Result;

use futures::future::try_join_all;
use log::debug;
use tokio::task::JoinHandle;

use std::path::{Path, PathBuf};

async fn write_document(
    path: PathBuf,
    output: OutputDocument,
) -> Result<PathBuf> {
    let xml = output.document.to_xml()?;
    debug!("writing file '{}'", path.display());
    tokio::fs::write(&path, xml).await?;
    Ok(path)
}

async fn join(handle: JoinHandle<Result<PathBuf>>) -> Result<PathBuf> {
    handle.await?
}

/// Writes every document into `dir` concurrently. Fails as soon as one of
/// the writes fails; files written by then are left in place.
pub async fn write_all(
    dir: &Path,
    outputs: Vec<OutputDocument>,
) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir).await?;

    let handles = outputs.into_iter().map(|output| {
        let path = dir.join(&output.file_name);
        tokio::spawn(write_document(path, output))
    });

    try_join_all(handles.map(join)).await
}
