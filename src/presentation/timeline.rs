use std::fmt;

use crate::api::schedule_dto::TimelineBarDto;
use crate::domain::assignment::Assignment;
use crate::presentation::table::TIMESTAMP_FORMAT;

/// Gantt-style view of a schedule: one bar per ship, grouped by berth.
///
/// Bars keep the processing order of the schedule. Chart renderers draw the
/// category axis top-down, so [`Timeline::category_axis`] lists ships in
/// reverse insertion order to put the first scheduled ship at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub bars: Vec<TimelineBarDto>,
}

impl Timeline {
    pub fn from_assignments(assignments: &[Assignment]) -> Self {
        let bars = assignments
            .iter()
            .map(|a| TimelineBarDto { ship: a.ship_name.clone(), berth: a.berth_label(), start: a.start, end: a.end })
            .collect();

        Timeline { bars }
    }

    /// Ship names for the category axis, bottom to top.
    pub fn category_axis(&self) -> Vec<&str> {
        self.bars.iter().rev().map(|bar| bar.ship.as_str()).collect()
    }

    /// Berth labels in order of first appearance, one color group each.
    pub fn color_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for bar in &self.bars {
            if !groups.contains(&bar.berth.as_str()) {
                groups.push(bar.berth.as_str());
            }
        }
        groups
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bar in &self.bars {
            writeln!(f, "{:<8} {} -> {}  {}", bar.berth, bar.start.format(TIMESTAMP_FORMAT), bar.end.format(TIMESTAMP_FORMAT), bar.ship)?;
        }
        Ok(())
    }
}
