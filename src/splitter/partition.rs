use super::Segment;
use crate::route::TrackPoint;

use geo::Point;

/// Contiguous, ordered segments over a single track. Splitting never copies
/// points, it only moves range boundaries.
#[derive(Debug, Clone)]
pub struct Partition<'r> {
    track: &'r [TrackPoint],
    segments: Vec<Segment>,
    /// Whether the segment at the same position already ends at a cut.
    closed: Vec<bool>,
}

impl<'r> Partition<'r> {
    pub fn new(track: &'r [TrackPoint], name: Option<String>) -> Self {
        Partition {
            track,
            segments: vec![Segment::new(name, 0..track.len())],
            closed: vec![false],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// First segment holding a point at exactly `point`, together with the
    /// track index of that point.
    pub fn locate(&self, point: Point) -> Option<(usize, usize)> {
        self.segments.iter().enumerate().find_map(|(s, segment)| {
            self.track[segment.range.clone()]
                .iter()
                .position(|tp| tp.point == point)
                .map(|i| (s, segment.range.start + i))
        })
    }

    /// Splits segment `segment` right after the track index `index`. The
    /// head takes `name` and the tail keeps the original name.
    ///
    /// If `index` is the last point of the segment, the segment itself is
    /// closed and renamed, unless an earlier cut already closed it there.
    pub fn split_after(
        &mut self,
        segment: usize,
        index: usize,
        name: Option<String>,
    ) -> bool {
        let Some(current) = self.segments.get_mut(segment) else {
            return false;
        };
        if !current.range.contains(&index) {
            return false;
        }

        if index + 1 == current.range.end {
            if self.closed[segment] {
                return false;
            }
            current.name = name;
            self.closed[segment] = true;
            return true;
        }

        let head = Segment::new(name, current.range.start..index + 1);
        current.range.start = index + 1;
        self.segments.insert(segment, head);
        self.closed.insert(segment, true);
        true
    }

    /// Cuts after the first occurrence of `point` still available for a cut.
    pub fn cut_at(&mut self, point: Point, name: Option<String>) -> bool {
        match self.locate(point) {
            Some((segment, index)) => self.split_after(segment, index, name),
            None => false,
        }
    }
}
