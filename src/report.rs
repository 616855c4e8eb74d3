use crate::error::Result;
use crate::geography::path_length;
use crate::route::Route;
use crate::splitter::{Policy, Segment};
use crate::utils::json::{save_to_file, save_to_file_pretty};

use geo::Point;
use serde::Serialize;

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentSummary {
    pub name: Option<String>,
    pub first_index: usize,
    pub point_count: usize,
    pub begin: Point,
    pub end: Point,
    /// Kilometers along the track.
    pub length: f64,
}

impl SegmentSummary {
    pub fn new(route: &Route, segment: &Segment) -> Option<Self> {
        let points = segment.points(route);
        let begin = points.first()?.point;
        let end = points.last()?.point;
        let coords: Vec<Point> = points.iter().map(|tp| tp.point).collect();
        Some(SegmentSummary {
            name: segment.name.clone(),
            first_index: segment.range.start,
            point_count: points.len(),
            begin,
            end,
            length: path_length(&coords),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub route: String,
    pub policy: Policy,
    pub total_points: usize,
    pub total_length: f64,
    pub segments: Vec<SegmentSummary>,
    pub files: Vec<PathBuf>,
}

impl SplitReport {
    pub fn new(
        route: &Route,
        policy: Policy,
        segments: &[Segment],
        files: Vec<PathBuf>,
    ) -> Self {
        let all: Vec<Point> = route.track_points().collect();
        SplitReport {
            route: route.name.clone(),
            policy,
            total_points: route.track.len(),
            total_length: path_length(&all),
            segments: segments
                .iter()
                .filter_map(|s| SegmentSummary::new(route, s))
                .collect(),
            files,
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        if pretty {
            save_to_file_pretty(self, path)
        } else {
            save_to_file(self, path)
        }
    }
}
