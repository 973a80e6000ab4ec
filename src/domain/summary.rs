use chrono::{NaiveDateTime, TimeDelta};
use std::collections::BTreeMap;

use crate::domain::assignment::{Assignment, total_waiting};
use crate::domain::berth::BerthIndex;

/// Usage of a single berth over the planning horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerthUsage {
    pub berth: BerthIndex,
    pub ships_served: usize,
    pub busy: TimeDelta,
    /// Time inside the horizon during which the berth holds no ship.
    pub idle: TimeDelta,
}

/// Aggregated figures of a computed schedule.
///
/// The horizon spans from the earliest service start to the latest service
/// end. Berths without any ship are reported as idle for the whole horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub horizon_start: Option<NaiveDateTime>,
    pub horizon_end: Option<NaiveDateTime>,
    pub total_waiting: TimeDelta,
    pub max_waiting: TimeDelta,
    pub berths: Vec<BerthUsage>,
}

impl ScheduleSummary {
    pub fn from_assignments(berth_count: usize, assignments: &[Assignment]) -> Self {
        let horizon_start = assignments.iter().map(|a| a.start).min();
        let horizon_end = assignments.iter().map(|a| a.end).max();
        let makespan = span(horizon_start, horizon_end);

        let mut per_berth: BTreeMap<BerthIndex, (usize, TimeDelta)> =
            (0..berth_count).map(|i| (BerthIndex(i), (0, TimeDelta::zero()))).collect();

        for assignment in assignments {
            let entry = per_berth.entry(assignment.berth).or_insert((0, TimeDelta::zero()));
            entry.0 += 1;
            entry.1 = entry.1 + assignment.service_time();
        }

        let berths = per_berth
            .into_iter()
            .map(|(berth, (ships_served, busy))| BerthUsage { berth, ships_served, busy, idle: makespan - busy })
            .collect();

        ScheduleSummary {
            horizon_start,
            horizon_end,
            total_waiting: total_waiting(assignments),
            max_waiting: assignments.iter().map(Assignment::waiting).max().unwrap_or_else(TimeDelta::zero),
            berths,
        }
    }

    /// Time from the first service start to the last service end.
    pub fn makespan(&self) -> TimeDelta {
        span(self.horizon_start, self.horizon_end)
    }

    /// Idle time summed over all berths, saturating at `TimeDelta::MAX`.
    pub fn total_idle(&self) -> TimeDelta {
        self.berths
            .iter()
            .try_fold(TimeDelta::zero(), |acc, usage| acc.checked_add(&usage.idle))
            .unwrap_or(TimeDelta::MAX)
    }

    /// Share of the horizon during which berths are occupied, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        let capacity = self.makespan().num_minutes() as f64 * self.berths.len() as f64;
        if capacity <= 0.0 {
            return 0.0;
        }

        let busy: f64 = self.berths.iter().map(|usage| usage.busy.num_minutes() as f64).sum();
        busy / capacity
    }
}

fn span(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> TimeDelta {
    match (start, end) {
        (Some(start), Some(end)) => end - start,
        _ => TimeDelta::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheduler::berth_scheduler::schedule;
    use crate::domain::ship::ShipRequest;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test]
    fn test_summary_of_reference_scenario() {
        let ships = vec![ShipRequest::new("A", at(8), 3, 100), ShipRequest::new("B", at(8), 2, 200), ShipRequest::new("C", at(9), 1, 300)];
        let assignments = schedule(2, &ships).unwrap();
        let summary = ScheduleSummary::from_assignments(2, &assignments);

        assert_eq!(summary.horizon_start, Some(at(8)));
        assert_eq!(summary.horizon_end, Some(at(11)));
        assert_eq!(summary.makespan(), TimeDelta::try_hours(3).unwrap());
        // C arrives 09:00 and starts 10:00.
        assert_eq!(summary.total_waiting, TimeDelta::try_hours(1).unwrap());
        assert_eq!(summary.max_waiting, TimeDelta::try_hours(1).unwrap());

        assert_eq!(summary.berths[0].ships_served, 1);
        assert_eq!(summary.berths[0].busy, TimeDelta::try_hours(3).unwrap());
        assert_eq!(summary.berths[1].ships_served, 2);
        assert_eq!(summary.berths[1].busy, TimeDelta::try_hours(3).unwrap());
        assert_eq!(summary.total_idle(), TimeDelta::zero());
        assert!((summary.utilization() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unused_berth_is_idle_for_the_whole_horizon() {
        let ships = vec![ShipRequest::new("Solo", at(6), 4, 0)];
        let assignments = schedule(3, &ships).unwrap();
        let summary = ScheduleSummary::from_assignments(3, &assignments);

        assert_eq!(summary.berths.len(), 3);
        assert_eq!(summary.berths[2].ships_served, 0);
        assert_eq!(summary.berths[2].idle, TimeDelta::try_hours(4).unwrap());
        assert_eq!(summary.total_idle(), TimeDelta::try_hours(8).unwrap());
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let calendar_hours = (NaiveDateTime::MAX - NaiveDateTime::MIN).num_hours();
        let mut ships = vec![ShipRequest::new("Long", NaiveDateTime::MIN, calendar_hours - 800, 0)];
        ships.extend((0..700).map(|i| ShipRequest::new(format!("Short-{}", i), NaiveDateTime::MIN, 1, 0)));

        let assignments = schedule(1, &ships).unwrap();
        let summary = ScheduleSummary::from_assignments(1, &assignments);
        assert_eq!(summary.total_waiting, TimeDelta::MAX);
        assert_eq!(summary.total_idle(), TimeDelta::zero());

        // 600 berths idle for almost the whole calendar exceed `TimeDelta::MAX` together.
        let assignments = schedule(600, &ships[..1]).unwrap();
        let summary = ScheduleSummary::from_assignments(600, &assignments);
        assert_eq!(summary.total_idle(), TimeDelta::MAX);
        assert!(summary.utilization() > 0.0 && summary.utilization() < 0.01);
    }

    #[test]
    fn test_empty_schedule() {
        let summary = ScheduleSummary::from_assignments(2, &[]);
        assert_eq!(summary.makespan(), TimeDelta::zero());
        assert_eq!(summary.utilization(), 0.0);
        assert_eq!(summary.berths.len(), 2);
    }
}
