use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A planning scenario as supplied by the input form or a scenario file.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDto {
    pub berths: i64,

    /// One of `earliest-arrival`, `start-of-day`, `fixed`.
    pub sentinel: Option<String>,

    /// Moment used by the `fixed` sentinel.
    pub sentinel_at: Option<NaiveDateTime>,

    /// Day whose midnight is used by the `start-of-day` sentinel.
    pub today: Option<NaiveDate>,

    /// One of `linear-scan`, `priority-queue`.
    pub selection: Option<String>,

    pub ships: Vec<ShipRequestDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShipRequestDto {
    pub name: Option<String>,
    pub arrival_date: NaiveDate,
    pub arrival_time: NaiveTime,

    /// Hours, defaults to 2.
    pub service_duration: Option<i64>,

    /// Defaults to 1000.
    pub containers: Option<i64>,
}

/// Settings that replace the values of a loaded scenario, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioOverrides {
    pub berths: Option<i64>,
    pub selection: Option<String>,
    pub sentinel: Option<String>,

    /// Used only when the scenario names no day of its own.
    pub default_today: Option<NaiveDate>,
}

impl ScenarioOverrides {
    pub fn apply(&self, dto: &mut ScenarioDto) {
        if let Some(berths) = self.berths {
            dto.berths = berths;
        }
        if self.selection.is_some() {
            dto.selection = self.selection.clone();
        }
        if self.sentinel.is_some() {
            dto.sentinel = self.sentinel.clone();
        }
        if dto.today.is_none() {
            dto.today = self.default_today;
        }
    }
}
