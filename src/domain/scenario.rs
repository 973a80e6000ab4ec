use crate::api::scenario_dto::{ScenarioDto, ShipRequestDto};
use crate::domain::assignment::Assignment;
use crate::domain::scheduler::{BerthScheduler, SelectionStrategy};
use crate::domain::sentinel::{SentinelKind, SentinelPolicy};
use crate::domain::ship::ShipRequest;
use crate::error::{Error, Result};

const DEFAULT_SERVICE_DURATION_HOURS: i64 = 2;
const DEFAULT_CONTAINERS: i64 = 1000;

/// Berth count, ship requests and scheduler configuration of one planning run.
///
/// Converting from a DTO only maps fields and applies defaults. Range checks
/// happen when the scenario is scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub berth_count: i64,
    pub scheduler: BerthScheduler,
    pub ships: Vec<ShipRequest>,
}

impl Scenario {
    pub fn schedule(&self) -> Result<Vec<Assignment>> {
        self.scheduler.schedule(self.berth_count, &self.ships)
    }
}

impl TryFrom<ScenarioDto> for Scenario {
    type Error = Error;

    fn try_from(dto: ScenarioDto) -> Result<Self> {
        let selection = match dto.selection.as_deref() {
            Some(name) => name.parse::<SelectionStrategy>()?,
            None => SelectionStrategy::default(),
        };

        let sentinel = match dto.sentinel.as_deref() {
            Some(name) => name.parse::<SentinelKind>()?.into_policy(dto.today, dto.sentinel_at)?,
            None => SentinelPolicy::default(),
        };

        let ships = dto.ships.into_iter().enumerate().map(|(position, ship)| ship_from_dto(position, ship)).collect();

        Ok(Scenario { berth_count: dto.berths, scheduler: BerthScheduler::new(selection, sentinel), ships })
    }
}

fn ship_from_dto(position: usize, dto: ShipRequestDto) -> ShipRequest {
    ShipRequest {
        name: dto.name.unwrap_or_else(|| format!("Ship-{}", position + 1)),
        arrival: dto.arrival_date.and_time(dto.arrival_time),
        service_duration_hours: dto.service_duration.unwrap_or(DEFAULT_SERVICE_DURATION_HOURS),
        containers: dto.containers.unwrap_or(DEFAULT_CONTAINERS),
    }
}
