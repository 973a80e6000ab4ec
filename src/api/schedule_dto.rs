use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the schedule table.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleRowDto {
    pub ship: String,
    pub berth: String,
    pub start: String,
    pub end: String,
    pub containers: i64,
}

/// One bar of the timeline chart.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBarDto {
    pub ship: String,
    pub berth: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
