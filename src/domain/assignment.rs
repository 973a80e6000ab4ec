use chrono::{NaiveDateTime, TimeDelta};

use crate::domain::berth::BerthIndex;

/// Placement of one ship on one berth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub ship_name: String,

    /// Index of the ship in the caller's input list.
    pub input_position: usize,

    pub berth: BerthIndex,
    pub arrival: NaiveDateTime,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub containers: i64,
}

impl Assignment {
    /// Time the ship spends at anchor before its service begins.
    pub fn waiting(&self) -> TimeDelta {
        self.start - self.arrival
    }

    pub fn service_time(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn berth_label(&self) -> String {
        self.berth.label()
    }
}

/// Sum of the waiting times of all assignments, saturating at `TimeDelta::MAX`.
pub fn total_waiting(assignments: &[Assignment]) -> TimeDelta {
    assignments
        .iter()
        .map(Assignment::waiting)
        .try_fold(TimeDelta::zero(), |acc, wait| acc.checked_add(&wait))
        .unwrap_or(TimeDelta::MAX)
}
