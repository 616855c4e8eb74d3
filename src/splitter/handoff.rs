use super::nearest::find_nearest;
use super::{Segment, SplitPolicy};
use crate::route::{Route, Waypoint};

use geo::Point;
use log::debug;

/// Detects boundaries while walking the track: once the distance to the
/// nearest not yet passed waypoint starts growing, that waypoint is
/// considered passed and a new segment begins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Handoff;

fn nearest_of(point: Point, remaining: &[&Waypoint]) -> Option<(usize, f64)> {
    find_nearest(point, remaining).map(|n| (n.position, n.distance))
}

impl SplitPolicy for Handoff {
    fn split(&self, route: &Route) -> Vec<Segment> {
        let len = route.track.len();
        if route.waypoints.len() < 2 || len == 0 {
            return vec![Segment::new(None, 0..len)];
        }

        let mut remaining: Vec<&Waypoint> = route.waypoints.iter().collect();
        let mut result = Vec::new();
        let mut begin = 0;
        let mut tracked: Option<(usize, f64)> = None;

        for (index, tp) in route.track.iter().enumerate() {
            let current = nearest_of(tp.point, &remaining);
            tracked = match (tracked, current) {
                (Some((passed, previous)), Some((_, distance)))
                    if distance > previous =>
                {
                    result.push(Segment::new(None, begin..index));
                    begin = index;
                    let wp = remaining.remove(passed);
                    debug!(
                        "passed '{}' before track point {}, {} waypoints left",
                        wp.name,
                        index,
                        remaining.len()
                    );
                    nearest_of(tp.point, &remaining)
                }
                _ => current,
            };
        }
        result.push(Segment::new(None, begin..len));

        result
    }
}
