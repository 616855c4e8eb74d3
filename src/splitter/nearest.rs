use crate::geography::haversine_distance;
use crate::route::{TrackPoint, Waypoint};

use geo::Point;

pub trait Located {
    fn location(&self) -> Point;
}

impl Located for TrackPoint {
    fn location(&self) -> Point {
        self.point
    }
}

impl Located for Waypoint {
    fn location(&self) -> Point {
        self.point
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> Point {
        (*self).location()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a, T> {
    /// Position of the match in the candidate sequence.
    pub position: usize,
    pub item: &'a T,
    /// Distance in kilometers.
    pub distance: f64,
}

/// Finds the candidate closest to `target`. On ties the earliest candidate
/// wins. Returns `None` for an empty candidate list.
pub fn find_nearest<'a, T, It>(
    target: Point,
    candidates: It,
) -> Option<Nearest<'a, T>>
where
    T: Located + 'a,
    It: IntoIterator<Item = &'a T>,
{
    let mut result: Option<Nearest<'a, T>> = None;
    for (position, item) in candidates.into_iter().enumerate() {
        let distance = haversine_distance(target, item.location());
        let is_better = match &result {
            None => true,
            Some(best) => distance < best.distance,
        };
        if is_better {
            result = Some(Nearest {
                position,
                item,
                distance,
            });
        }
    }
    result
}
