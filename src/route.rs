use crate::error::{Error, ErrorType, Result};
use crate::xml_tree::{Document, Element};

use geo::Point;
use log::debug;

pub const ROOT: &str = "gpx";
pub const METADATA: &str = "metadata";
pub const NAME: &str = "name";
pub const WAYPOINT: &str = "wpt";
pub const TRACK: &str = "trk";
pub const TRACK_SEGMENT: &str = "trkseg";
pub const TRACK_POINT: &str = "trkpt";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    /// Position in the recorded track.
    pub index: usize,
    pub point: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub point: Point,
}

impl Waypoint {
    pub fn new(name: &str, point: Point) -> Self {
        Waypoint {
            name: name.to_string(),
            point,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    pub name: String,
    pub track: Vec<TrackPoint>,
    pub waypoints: Vec<Waypoint>,
}

fn input_error(msg: String) -> Error {
    Error::new(ErrorType::InputError, msg)
}

fn single_child<'e>(
    parent: &'e Element,
    name: &'static str,
    path: &str,
) -> Result<&'e Element> {
    let mut it = parent.children_named(name);
    let first = it
        .next()
        .ok_or_else(|| input_error(format!("{}/{}: missing", path, name)))?;
    if it.next().is_some() {
        return Err(input_error(format!(
            "{}/{}: more than one found, only a single one is supported",
            path, name
        )));
    }
    Ok(first)
}

pub fn root(doc: &Document) -> Result<&Element> {
    if !doc.root.is(ROOT) {
        return Err(input_error(format!(
            "root element is '{}', expected '{}'",
            doc.root.name, ROOT
        )));
    }
    Ok(&doc.root)
}

/// The single track of the document.
pub fn track(root: &Element) -> Result<&Element> {
    single_child(root, TRACK, ROOT)
}

/// The single segment of the single track.
pub fn track_segment(root: &Element) -> Result<&Element> {
    single_child(track(root)?, TRACK_SEGMENT, "gpx/trk")
}

pub fn route_name(root: &Element) -> Result<String> {
    let metadata = root.child(METADATA).ok_or_else(|| {
        input_error(format!("{}/{}: missing", ROOT, METADATA))
    })?;
    let name = metadata.child(NAME).ok_or_else(|| {
        input_error(format!("{}/{}/{}: missing", ROOT, METADATA, NAME))
    })?;
    Ok(name.text())
}

fn parse_coordinate(element: &Element, attr: &str, path: &str) -> Result<f64> {
    let value = element.attribute(attr).ok_or_else(|| {
        input_error(format!("{}: missing '{}' attribute", path, attr))
    })?;
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(input_error(format!(
            "{}: '{}' is not a valid coordinate: {:?}",
            path, attr, value
        ))),
    }
}

pub fn parse_point(element: &Element, path: &str) -> Result<Point> {
    let lat = parse_coordinate(element, "lat", path)?;
    let lon = parse_coordinate(element, "lon", path)?;
    Ok(Point::new(lon, lat))
}

fn parse_waypoint(element: &Element, path: &str) -> Result<Waypoint> {
    let name = element
        .child(NAME)
        .ok_or_else(|| input_error(format!("{}/{}: missing", path, NAME)))?
        .text();
    Ok(Waypoint {
        name,
        point: parse_point(element, path)?,
    })
}

impl Route {
    /// Validates the parts of the document the splitter relies on. The rest
    /// of the document is not looked at.
    pub fn from_document(doc: &Document) -> Result<Self> {
        let root = root(doc)?;
        let name = route_name(root)?;

        let waypoints = root
            .children_named(WAYPOINT)
            .enumerate()
            .map(|(i, e)| parse_waypoint(e, &format!("gpx/wpt[{}]", i)))
            .collect::<Result<Vec<_>>>()?;

        let track = track_segment(root)?
            .children_named(TRACK_POINT)
            .enumerate()
            .map(|(index, e)| {
                let path = format!("gpx/trk/trkseg/trkpt[{}]", index);
                Ok(TrackPoint {
                    index,
                    point: parse_point(e, &path)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if track.is_empty() {
            return Err(input_error("gpx/trk/trkseg: no track points".into()));
        }

        debug!(
            "route '{}': {} track points, {} waypoints",
            name,
            track.len(),
            waypoints.len()
        );

        Ok(Route {
            name,
            track,
            waypoints,
        })
    }

    pub fn track_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.track.iter().map(|tp| tp.point)
    }
}
