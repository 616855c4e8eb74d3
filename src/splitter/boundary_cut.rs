use super::nearest::find_nearest;
use super::partition::Partition;
use super::{Segment, SplitPolicy};
use crate::error::Result;
use crate::route::Route;

use log::{debug, warn};
use regex::Regex;

/// Cuts the track at every waypoint whose name matches a pattern. Segments
/// are left unnamed.
#[derive(Debug, Clone)]
pub struct BoundaryCut {
    pattern: Regex,
}

impl BoundaryCut {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(BoundaryCut {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl SplitPolicy for BoundaryCut {
    fn split(&self, route: &Route) -> Vec<Segment> {
        let mut partition = Partition::new(&route.track, None);
        for wp in route
            .waypoints
            .iter()
            .filter(|wp| self.pattern.is_match(&wp.name))
        {
            let Some(nearest) = find_nearest(wp.point, &route.track) else {
                continue;
            };
            if partition.cut_at(nearest.item.point, None) {
                debug!(
                    "'{}' cuts after track point {}",
                    wp.name, nearest.item.index
                );
            } else {
                warn!("'{}': no segment left to cut, skipped", wp.name);
            }
        }
        partition.into_segments()
    }
}
