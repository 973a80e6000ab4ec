use std::path::Path;

use crate::api::scenario_dto::{ScenarioDto, ScenarioOverrides};
use crate::domain::scenario::Scenario;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod presentation;

pub use domain::assignment::Assignment;
pub use domain::scheduler::{BerthScheduler, SelectionStrategy, schedule};
pub use domain::sentinel::SentinelPolicy;
pub use domain::ship::ShipRequest;

/// Reads a scenario file and converts it into a [`Scenario`] ready to be scheduled.
pub fn load_scenario(file_path: impl AsRef<Path>) -> Result<Scenario> {
    load_scenario_with(file_path, &ScenarioOverrides::default())
}

/// Like [`load_scenario`], with `overrides` applied to the file's settings before conversion.
pub fn load_scenario_with(file_path: impl AsRef<Path>, overrides: &ScenarioOverrides) -> Result<Scenario> {
    let file_path = file_path.as_ref();

    let mut scenario_dto: ScenarioDto = parse_json_file(file_path)?;
    log::info!("Scenario file '{}' parsed successfully ({} ships).", file_path.display(), scenario_dto.ships.len());

    overrides.apply(&mut scenario_dto);

    let scenario = Scenario::try_from(scenario_dto)?;
    log::debug!("Scenario constructed: {} berths, {:?}.", scenario.berth_count, scenario.scheduler);

    Ok(scenario)
}
