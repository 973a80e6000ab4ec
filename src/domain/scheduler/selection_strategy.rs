use chrono::NaiveDateTime;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::domain::scheduler::berth_pool::{BerthPool, LinearScanPool, PriorityQueuePool};
use crate::error::ConversionError;

/// How the scheduler finds the earliest free berth. Both strategies produce the same schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Scans every berth for each ship. Suited to typical fleet sizes.
    #[default]
    LinearScan,

    /// Min-heap over berth availability, for large berth counts.
    PriorityQueue,
}

impl SelectionStrategy {
    /// Factory method to create a fresh pool of `berth_count` berths, all free from `sentinel`.
    pub fn get_instance(&self, berth_count: NonZeroUsize, sentinel: NaiveDateTime) -> Box<dyn BerthPool> {
        match self {
            SelectionStrategy::LinearScan => Box::new(LinearScanPool::new(berth_count, sentinel)),
            SelectionStrategy::PriorityQueue => Box::new(PriorityQueuePool::new(berth_count, sentinel)),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear-scan" => Ok(SelectionStrategy::LinearScan),
            "priority-queue" => Ok(SelectionStrategy::PriorityQueue),
            _ => Err(ConversionError::UnknownSelectionStrategy(s.to_string())),
        }
    }
}
