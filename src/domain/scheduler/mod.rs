pub mod berth_pool;
pub mod berth_scheduler;
pub mod selection_strategy;

pub use berth_scheduler::{BerthScheduler, schedule};
pub use selection_strategy::SelectionStrategy;
