use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::str::FromStr;

use crate::error::ConversionError;

/// Rule for the initial availability of every berth.
///
/// Whatever the rule, the resolved sentinel is never later than the earliest
/// arrival, so no berth starts a run busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentinelPolicy {
    /// All berths are free from the earliest ship arrival on.
    #[default]
    EarliestArrival,

    /// All berths are free from midnight of the given day.
    StartOfDay(NaiveDate),

    /// All berths are free from the given moment.
    Fixed(NaiveDateTime),
}

impl SentinelPolicy {
    pub fn resolve(&self, earliest_arrival: NaiveDateTime) -> NaiveDateTime {
        let candidate = match self {
            SentinelPolicy::EarliestArrival => earliest_arrival,
            SentinelPolicy::StartOfDay(day) => day.and_time(NaiveTime::MIN),
            SentinelPolicy::Fixed(at) => *at,
        };

        if candidate > earliest_arrival {
            log::debug!("Sentinel {} lies after earliest arrival {}. Lowering it to the earliest arrival.", candidate, earliest_arrival);
            return earliest_arrival;
        }

        candidate
    }
}

/// Name of a sentinel policy as it appears in scenario files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelKind {
    EarliestArrival,
    StartOfDay,
    Fixed,
}

impl SentinelKind {
    /// Builds the policy, taking the day or moment it needs from the given values.
    pub fn into_policy(self, today: Option<NaiveDate>, at: Option<NaiveDateTime>) -> Result<SentinelPolicy, ConversionError> {
        match self {
            SentinelKind::EarliestArrival => Ok(SentinelPolicy::EarliestArrival),
            SentinelKind::StartOfDay => {
                today.map(SentinelPolicy::StartOfDay).ok_or_else(|| ConversionError::MissingSentinelTime("start-of-day".to_string()))
            }
            SentinelKind::Fixed => at.map(SentinelPolicy::Fixed).ok_or_else(|| ConversionError::MissingSentinelTime("fixed".to_string())),
        }
    }
}

impl FromStr for SentinelKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earliest-arrival" => Ok(SentinelKind::EarliestArrival),
            "start-of-day" => Ok(SentinelKind::StartOfDay),
            "fixed" => Ok(SentinelKind::Fixed),
            _ => Err(ConversionError::UnknownSentinelPolicy(s.to_string())),
        }
    }
}
