use std::num::NonZeroUsize;

use crate::domain::assignment::{Assignment, total_waiting};
use crate::domain::scheduler::berth_pool::BerthPool;
use crate::domain::scheduler::selection_strategy::SelectionStrategy;
use crate::domain::sentinel::SentinelPolicy;
use crate::domain::ship::ShipRequest;
use crate::error::{Error, Result};

/// Target of the structured per-run events.
pub const ANALYTICS_TARGET: &str = "berth_planner::analytics";

/// Greedy earliest-availability scheduler for a pool of identical berths.
///
/// Ships are served in order of arrival (input order on equal arrival). Each
/// ship goes to the berth that becomes free first, lowest index on ties, and
/// starts at the later of its arrival and that berth's availability. Past
/// assignments are never revisited.
///
/// The scheduler holds configuration only. All berth state lives inside one
/// [`BerthScheduler::schedule`] call, so a scheduler can be shared between
/// threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BerthScheduler {
    pub selection: SelectionStrategy,
    pub sentinel: SentinelPolicy,
}

impl BerthScheduler {
    pub fn new(selection: SelectionStrategy, sentinel: SentinelPolicy) -> Self {
        BerthScheduler { selection, sentinel }
    }

    /// Assigns every ship to one of `berth_count` berths.
    ///
    /// # Returns
    /// One assignment per ship, in the order the ships were processed
    /// (arrival order), not in input order.
    ///
    /// # Errors
    /// * `Error::ConfigurationError` if `berth_count < 1`.
    /// * `Error::ValidationError` for the first invalid ship request.
    /// * `Error::TimeOverflow` if a service end is not representable.
    ///
    /// No partial schedule is returned on error.
    pub fn schedule(&self, berth_count: i64, ships: &[ShipRequest]) -> Result<Vec<Assignment>> {
        let berth_count = usize::try_from(berth_count).ok().and_then(NonZeroUsize::new).ok_or(Error::ConfigurationError { berth_count })?;

        for (position, ship) in ships.iter().enumerate() {
            ship.validate(position)?;
        }

        let Some(earliest_arrival) = ships.iter().map(|ship| ship.arrival).min() else {
            log::debug!("No ships to schedule on {} berths.", berth_count);
            return Ok(Vec::new());
        };

        let sentinel = self.sentinel.resolve(earliest_arrival);
        let mut pool = self.selection.get_instance(berth_count, sentinel);

        // `sort_by_key` is stable, so equal arrivals keep their input order.
        let mut order: Vec<usize> = (0..ships.len()).collect();
        order.sort_by_key(|&position| ships[position].arrival);

        let mut assignments = Vec::with_capacity(ships.len());

        for position in order {
            let ship = &ships[position];
            let berth = pool.earliest();

            let start = ship.arrival.max(berth.next_available);
            let end = ship
                .service_duration()
                .and_then(|duration| start.checked_add_signed(duration))
                .ok_or_else(|| Error::TimeOverflow { ship: ship.name.clone() })?;

            pool.occupy(berth.index, end);

            log::debug!("Ship '{}' (position {}) assigned to {}: {} - {}.", ship.name, position, berth.index, start, end);

            assignments.push(Assignment {
                ship_name: ship.name.clone(),
                input_position: position,
                berth: berth.index,
                arrival: ship.arrival,
                start,
                end,
                containers: ship.containers,
            });
        }

        self.log_run(pool.as_ref(), &assignments);

        Ok(assignments)
    }

    fn log_run(&self, pool: &dyn BerthPool, assignments: &[Assignment]) {
        let berths = pool.states();
        let last_release = berths.iter().map(|berth| berth.next_available).max();

        tracing::info!(
            target: ANALYTICS_TARGET,
            LogDescription = "Berth schedule computed",
            Selection = ?self.selection,
            Sentinel = ?self.sentinel,
            NumberOfBerths = berths.len(),
            NumberOfShips = assignments.len(),
            TotalWaitingMinutes = total_waiting(assignments).num_minutes(),
            LastBerthRelease = ?last_release,
        );
    }
}

/// Schedules `ships` with the default configuration: linear berth scan and a
/// sentinel at the earliest arrival.
pub fn schedule(berth_count: i64, ships: &[ShipRequest]) -> Result<Vec<Assignment>> {
    BerthScheduler::default().schedule(berth_count, ships)
}
