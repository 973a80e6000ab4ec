pub mod scenario_dto;
pub mod schedule_dto;
