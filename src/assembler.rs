use crate::error::{Error, ErrorType, Result};
use crate::route::{
    self, METADATA, NAME, TRACK, TRACK_POINT, TRACK_SEGMENT, WAYPOINT,
};
use crate::splitter::{Policy, Segment};
use crate::xml_tree::{Document, Element, Node};

use log::debug;

use std::collections::HashSet;

pub const EXTENSION: &str = "gpx";
pub const COMBINED_NAME: &str = "segments";

#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub file_name: String,
    pub document: Document,
}

fn is_reserved(c: char) -> bool {
    matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        || c.is_control()
}

/// Turns a segment name into something usable as a file name.
pub fn sanitize_file_stem(name: &str) -> String {
    let result: String = name
        .chars()
        .map(|c| if is_reserved(c) { '_' } else { c })
        .collect();
    let trimmed = result.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        "segment".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hands out file names that are unique even on case insensitive file
/// systems.
#[derive(Debug, Default)]
pub struct FileNames {
    used: HashSet<String>,
}

impl FileNames {
    pub fn unique(&mut self, name: &str) -> String {
        let stem = sanitize_file_stem(name);
        let mut candidate = format!("{}.{}", stem, EXTENSION);
        let mut n = 2;
        while !self.used.insert(candidate.to_lowercase()) {
            candidate = format!("{} ({}).{}", stem, n, EXTENSION);
            n += 1;
        }
        candidate
    }
}

fn missing(path: &str) -> Error {
    Error::new(ErrorType::InputError, format!("{}: missing", path))
}

fn set_track_segments(
    root: &mut Element,
    segments: Vec<Element>,
) -> Result<()> {
    root.child_mut(TRACK)
        .ok_or_else(|| missing("gpx/trk"))?
        .replace_children(TRACK_SEGMENT, segments);
    Ok(())
}

fn set_route_name(root: &mut Element, name: String) -> Result<()> {
    root.child_mut(METADATA)
        .and_then(|m| m.child_mut(NAME))
        .ok_or_else(|| missing("gpx/metadata/name"))?
        .set_text(name);
    Ok(())
}

/// Splits a validated document back into output documents.
struct Assembler<'d> {
    /// The input without waypoints and with an empty track segment.
    base: Document,
    template: &'d Element,
    points: Vec<&'d Element>,
}

impl<'d> Assembler<'d> {
    fn new(doc: &'d Document) -> Result<Self> {
        let root = route::root(doc)?;
        let template = route::track_segment(root)?;
        let points = template.children_named(TRACK_POINT).collect();

        let mut base = doc.clone();
        base.root.remove_children(WAYPOINT);
        set_track_segments(&mut base.root, vec![Element::new(&template.name)])?;

        Ok(Assembler {
            base,
            template,
            points,
        })
    }

    fn segment_element(&self, segment: &Segment) -> Result<Element> {
        let points = self.points.get(segment.range.clone()).ok_or_else(|| {
            Error::new(
                ErrorType::LogicError,
                format!(
                    "segment {:?} is outside of the track ({} points)",
                    segment.range,
                    self.points.len()
                ),
            )
        })?;
        let mut result = Element::new(&self.template.name);
        result.attributes = self.template.attributes.clone();
        result.children = points
            .iter()
            .map(|p| Node::Element((*p).clone()))
            .collect();
        Ok(result)
    }

    fn document_with(&self, segments: Vec<Element>) -> Result<Document> {
        let mut document = self.base.clone();
        set_track_segments(&mut document.root, segments)?;
        Ok(document)
    }
}

/// One document per segment, named `<route name> (<segment name>)`.
pub fn assemble_per_segment(
    doc: &Document,
    segments: &[Segment],
) -> Result<Vec<OutputDocument>> {
    let assembler = Assembler::new(doc)?;
    let route_name = route::route_name(route::root(doc)?)?;
    let mut file_names = FileNames::default();

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let name = match &segment.name {
                Some(n) => n.clone(),
                None => (i + 1).to_string(),
            };
            let element = assembler.segment_element(segment)?;
            let mut document = assembler.document_with(vec![element])?;
            set_route_name(
                &mut document.root,
                format!("{} ({})", route_name, name),
            )?;
            let file_name = file_names.unique(&name);
            debug!("{}: {} track points", file_name, segment.len());
            Ok(OutputDocument {
                file_name,
                document,
            })
        })
        .collect()
}

/// A single document holding every segment as its own track segment.
pub fn assemble_combined(
    doc: &Document,
    segments: &[Segment],
) -> Result<OutputDocument> {
    let assembler = Assembler::new(doc)?;
    let elements = segments
        .iter()
        .map(|s| assembler.segment_element(s))
        .collect::<Result<Vec<_>>>()?;
    Ok(OutputDocument {
        file_name: format!("{}.{}", COMBINED_NAME, EXTENSION),
        document: assembler.document_with(elements)?,
    })
}

pub fn assemble(
    doc: &Document,
    segments: &[Segment],
    policy: Policy,
) -> Result<Vec<OutputDocument>> {
    debug!("building new gpx documents");
    if policy.is_multi_output() {
        assemble_per_segment(doc, segments)
    } else {
        Ok(vec![assemble_combined(doc, segments)?])
    }
}
