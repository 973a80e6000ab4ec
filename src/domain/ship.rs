use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{Error, Result, ShipField};

/// Upper bound of the informational container count of a single ship.
pub const MAX_CONTAINERS: i64 = 5000;

/// The service need of one arriving ship.
///
/// Names are not required to be unique. Two requests with the same name are
/// told apart by their position in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipRequest {
    pub name: String,

    /// Earliest moment the ship can be berthed (local wall clock).
    pub arrival: NaiveDateTime,

    /// Hours the ship occupies a berth once service has started.
    pub service_duration_hours: i64,

    /// Carried through to the schedule, never used for scheduling.
    pub containers: i64,
}

impl ShipRequest {
    pub fn new(name: impl Into<String>, arrival: NaiveDateTime, service_duration_hours: i64, containers: i64) -> Self {
        ShipRequest { name: name.into(), arrival, service_duration_hours, containers }
    }

    /// Checks the request at input `position`.
    ///
    /// Nothing is clamped: the first offending field is reported as
    /// `Error::ValidationError`.
    pub fn validate(&self, position: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid(position, ShipField::Name, "must not be empty"));
        }

        if self.service_duration_hours <= 0 {
            return Err(self.invalid(position, ShipField::ServiceDuration, format!("must be positive, got {}", self.service_duration_hours)));
        }

        if self.service_duration().is_none() {
            return Err(self.invalid(
                position,
                ShipField::ServiceDuration,
                format!("{} hours exceeds the representable time range", self.service_duration_hours),
            ));
        }

        if !(0..=MAX_CONTAINERS).contains(&self.containers) {
            return Err(self.invalid(position, ShipField::Containers, format!("must be within [0, {}], got {}", MAX_CONTAINERS, self.containers)));
        }

        Ok(())
    }

    /// Service duration as wall-clock time. `None` if the hour count cannot be represented.
    pub fn service_duration(&self) -> Option<TimeDelta> {
        TimeDelta::try_hours(self.service_duration_hours)
    }

    fn invalid(&self, position: usize, field: ShipField, reason: impl Into<String>) -> Error {
        Error::ValidationError { position, ship: self.name.clone(), field, reason: reason.into() }
    }
}
