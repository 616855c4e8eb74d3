use crate::error::{Error, ErrorType, Result};
use crate::route::{Route, TrackPoint};

use clap::Args;
use log::debug;
use serde::Serialize;
use strum_macros::EnumString;

use std::ops::Range;
use std::path::PathBuf;

mod boundary_cut;
mod day_labels;
mod handoff;
mod nearest;
mod partition;

#[cfg(test)]
mod boundary_cut_test;
#[cfg(test)]
pub mod test_util;

pub use boundary_cut::BoundaryCut;
pub use day_labels::DayLabels;
pub use handoff::Handoff;
pub use nearest::{find_nearest, Located, Nearest};
pub use partition::Partition;

pub const DEFAULT_DAY_LABEL: &str = "Jour";

/// A contiguous run of track points, given as indices into the route's
/// track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: Option<String>,
    pub range: Range<usize>,
}

impl Segment {
    pub fn new(name: Option<String>, range: Range<usize>) -> Self {
        Segment { name, range }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn points<'r>(&self, route: &'r Route) -> &'r [TrackPoint] {
        &route.track[self.range.clone()]
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumString,
    strum_macros::Display,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Cut at `<label> <n>` waypoints, one output file per segment.
    DayLabels,
    /// Cut wherever the track moves away from the nearest waypoint.
    Handoff,
    /// Cut at waypoints matching a pattern, one output file.
    BoundaryCut,
}

impl Policy {
    pub fn is_multi_output(self) -> bool {
        self == Policy::DayLabels
    }
}

pub trait SplitPolicy {
    fn split(&self, route: &Route) -> Vec<Segment>;
}

#[derive(Clone, Debug, Args)]
pub struct SplitOptions {
    /// How boundaries are chosen: day-labels, handoff or boundary-cut
    #[arg(long, default_value_t = Policy::DayLabels)]
    pub policy: Policy,
    /// Waypoint label that precedes the day number
    #[arg(long, default_value = DEFAULT_DAY_LABEL)]
    pub day_label: String,
    /// Regex selecting boundary waypoints for boundary-cut
    /// [default: "<day label> \d+"]
    #[arg(long)]
    pub boundary_pattern: Option<String>,
    /// Directory to write the output files to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            policy: Policy::DayLabels,
            day_label: DEFAULT_DAY_LABEL.to_string(),
            boundary_pattern: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SplitOptions {
    pub fn boundary_pattern(&self) -> String {
        match &self.boundary_pattern {
            Some(p) => p.clone(),
            None => format!(r"{} \d+", regex::escape(&self.day_label)),
        }
    }

    pub fn build_policy(&self) -> Result<Box<dyn SplitPolicy>> {
        Ok(match self.policy {
            Policy::DayLabels => Box::new(DayLabels::new(&self.day_label)?),
            Policy::Handoff => Box::new(Handoff),
            Policy::BoundaryCut => {
                Box::new(BoundaryCut::new(&self.boundary_pattern())?)
            }
        })
    }
}

/// Segments must be non-empty, in order and together cover `0..len`.
pub fn check_partition(segments: &[Segment], len: usize) -> Result<()> {
    let mut expected = 0;
    for (i, segment) in segments.iter().enumerate() {
        if segment.range.start != expected || segment.is_empty() {
            return Err(Error::new(
                ErrorType::LogicError,
                format!(
                    "segment {} covers {:?}, expected to start at {}",
                    i, segment.range, expected
                ),
            ));
        }
        expected = segment.range.end;
    }
    if expected != len {
        return Err(Error::new(
            ErrorType::LogicError,
            format!("segments end at {}, track has {} points", expected, len),
        ));
    }
    Ok(())
}

pub fn split_route(
    route: &Route,
    options: &SplitOptions,
) -> Result<Vec<Segment>> {
    debug!("computing segments ({})", options.policy);
    let segments = options.build_policy()?.split(route);
    check_partition(&segments, route.track.len())?;
    debug!("{} segments", segments.len());
    Ok(segments)
}
