use crate::assembler::{assemble, OutputDocument};
use crate::error::Result;
use crate::output::write_all;
use crate::report::SplitReport;
use crate::route::Route;
use crate::splitter::{split_route, Segment, SplitOptions};
use crate::xml_tree::Document;

use log::{debug, info};

use std::path::Path;

#[derive(Debug)]
pub struct Prepared {
    pub route: Route,
    pub segments: Vec<Segment>,
    pub outputs: Vec<OutputDocument>,
}

/// Everything up to, but not including, writing files. Any validation error
/// surfaces here, before a single output exists.
pub fn prepare(content: &str, options: &SplitOptions) -> Result<Prepared> {
    debug!("parsing xml");
    let doc = Document::parse(content)?;
    debug!("validating document");
    let route = Route::from_document(&doc)?;
    let segments = split_route(&route, options)?;
    let outputs = assemble(&doc, &segments, options.policy)?;
    Ok(Prepared {
        route,
        segments,
        outputs,
    })
}

pub async fn split_file(
    input: &Path,
    options: &SplitOptions,
) -> Result<SplitReport> {
    debug!("reading file '{}'", input.display());
    let content = tokio::fs::read_to_string(input).await?;
    let Prepared {
        route,
        segments,
        outputs,
    } = prepare(&content, options)?;

    let files = write_all(&options.output_dir, outputs).await?;
    info!(
        "'{}' split into {} segments, {} files written",
        route.name,
        segments.len(),
        files.len()
    );

    Ok(SplitReport::new(&route, options.policy, &segments, files))
}
