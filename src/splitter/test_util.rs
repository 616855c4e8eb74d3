use super::Segment;
use crate::route::{Route, TrackPoint, Waypoint};

use geo::point;

pub fn track(input: &[(f64, f64)]) -> Vec<TrackPoint> {
    input
        .iter()
        .enumerate()
        .map(|(index, (x, y))| TrackPoint {
            index,
            point: point! { x: *x, y: *y },
        })
        .collect()
}

pub fn wp(name: &str, x: f64, y: f64) -> Waypoint {
    Waypoint::new(name, point! { x: x, y: y })
}

pub fn route(points: &[(f64, f64)], waypoints: Vec<Waypoint>) -> Route {
    Route {
        name: "Test route".to_string(),
        track: track(points),
        waypoints,
    }
}

/// A straight track along the equator, one point per degree of longitude.
pub fn equator(len: usize) -> Vec<(f64, f64)> {
    (0..len).map(|x| (x as f64, 0.0)).collect()
}

pub fn seg(name: Option<&str>, begin: usize, end: usize) -> Segment {
    Segment::new(name.map(|n| n.to_string()), begin..end)
}

pub fn named(name: &str, begin: usize, end: usize) -> Segment {
    seg(Some(name), begin, end)
}

pub fn unnamed(begin: usize, end: usize) -> Segment {
    seg(None, begin, end)
}

/// Track indices of all segments, in output order.
pub fn flatten(segments: &[Segment]) -> Vec<usize> {
    segments.iter().flat_map(|s| s.range.clone()).collect()
}
