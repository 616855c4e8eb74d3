use super::nearest::find_nearest;
use super::partition::Partition;
use super::{Segment, SplitPolicy};
use crate::error::Result;
use crate::route::{Route, Waypoint};

use log::{debug, warn};
use regex::Regex;

/// Cuts the track at waypoints labelled `<label> <day number>`. Each segment
/// is named after the waypoint closing it; the remainder after the last
/// labelled waypoint gets the next day number.
#[derive(Debug, Clone)]
pub struct DayLabels {
    label: String,
    pattern: Regex,
}

impl DayLabels {
    pub fn new(label: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"{} (\d+)", regex::escape(label)))?;
        Ok(DayLabels {
            label: label.to_string(),
            pattern,
        })
    }

    pub fn is_day_label(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    pub fn day_number(&self, name: &str) -> Option<u32> {
        let captures = self.pattern.captures(name)?;
        let number = captures.get(1)?.as_str();
        match number.parse() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("cannot use day number of '{}': {}", name, e);
                None
            }
        }
    }

    /// One past the highest day number, or 1 if there is none.
    pub fn next_day_number<'a, It>(&self, waypoints: It) -> u64
    where
        It: IntoIterator<Item = &'a Waypoint>,
    {
        waypoints
            .into_iter()
            .filter_map(|wp| self.day_number(&wp.name))
            .max()
            .map_or(1, |n| u64::from(n) + 1)
    }

    pub fn day_name(&self, number: u64) -> String {
        format!("{} {}", self.label, number)
    }
}

impl SplitPolicy for DayLabels {
    fn split(&self, route: &Route) -> Vec<Segment> {
        let boundaries: Vec<&Waypoint> = route
            .waypoints
            .iter()
            .filter(|wp| self.is_day_label(&wp.name))
            .collect();
        debug!("{} day label waypoints", boundaries.len());

        let next = self.next_day_number(boundaries.iter().copied());
        debug!("next day number: {}", next);

        let mut partition =
            Partition::new(&route.track, Some(self.day_name(next)));
        for wp in boundaries {
            let Some(nearest) = find_nearest(wp.point, &route.track) else {
                continue;
            };
            if partition.cut_at(nearest.item.point, Some(wp.name.clone())) {
                debug!(
                    "'{}' cuts after track point {} ({:.3} km away)",
                    wp.name, nearest.item.index, nearest.distance
                );
            } else {
                warn!(
                    "'{}': nearest track point {} is already a boundary, \
                     waypoint skipped",
                    wp.name, nearest.item.index
                );
            }
        }

        partition.into_segments()
    }
}
