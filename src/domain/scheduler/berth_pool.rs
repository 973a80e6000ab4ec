use chrono::NaiveDateTime;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::num::NonZeroUsize;

use crate::domain::berth::{BerthIndex, BerthState};

/// Availability of all berths during one scheduling run.
///
/// Implementations differ only in how the earliest free berth is found. On
/// equal availability the berth with the lowest index is the earliest. A pool
/// always holds at least one berth.
pub trait BerthPool: Debug + Send {
    /// The berth that becomes free first.
    fn earliest(&self) -> BerthState;

    /// Marks `index` as busy until `until`.
    ///
    /// Callers book the berth last returned by [`BerthPool::earliest`].
    fn occupy(&mut self, index: BerthIndex, until: NaiveDateTime);

    /// Current state of every berth, ordered by index.
    fn states(&self) -> Vec<BerthState>;
}

/// Scans all berths on every lookup.
#[derive(Debug, Clone)]
pub struct LinearScanPool {
    berths: Vec<BerthState>,
}

impl LinearScanPool {
    pub fn new(berth_count: NonZeroUsize, sentinel: NaiveDateTime) -> Self {
        LinearScanPool { berths: (0..berth_count.get()).map(|i| BerthState::new(BerthIndex(i), sentinel)).collect() }
    }
}

impl BerthPool for LinearScanPool {
    fn earliest(&self) -> BerthState {
        // Only a strictly earlier berth replaces the current pick, so ties keep the lowest index.
        self.berths[1..]
            .iter()
            .fold(self.berths[0], |best, berth| if berth.next_available < best.next_available { *berth } else { best })
    }

    fn occupy(&mut self, index: BerthIndex, until: NaiveDateTime) {
        match self.berths.get_mut(index.get()) {
            Some(berth) => berth.occupy_until(until),
            None => log::error!("Attempted to occupy unknown berth {} in a pool of {} berths.", index, self.berths.len()),
        }
    }

    fn states(&self) -> Vec<BerthState> {
        self.berths.clone()
    }
}

/// Keeps berths in a min-heap keyed on `(next_available, index)`.
#[derive(Debug, Clone)]
pub struct PriorityQueuePool {
    heap: BinaryHeap<Reverse<(NaiveDateTime, BerthIndex)>>,
}

impl PriorityQueuePool {
    pub fn new(berth_count: NonZeroUsize, sentinel: NaiveDateTime) -> Self {
        PriorityQueuePool { heap: (0..berth_count.get()).map(|i| Reverse((sentinel, BerthIndex(i)))).collect() }
    }
}

impl BerthPool for PriorityQueuePool {
    fn earliest(&self) -> BerthState {
        match self.heap.peek() {
            Some(Reverse((next_available, index))) => BerthState { index: *index, next_available: *next_available },
            // `occupy` re-inserts every berth it removes.
            None => unreachable!("priority queue pool lost all of its berths"),
        }
    }

    fn occupy(&mut self, index: BerthIndex, until: NaiveDateTime) {
        let is_top = matches!(self.heap.peek(), Some(Reverse((_, top))) if *top == index);

        if is_top {
            self.heap.pop();
        } else {
            let before = self.heap.len();
            self.heap.retain(|Reverse((_, berth))| *berth != index);

            if self.heap.len() == before {
                log::error!("Attempted to occupy unknown berth {} in a pool of {} berths.", index, before);
                return;
            }
        }

        self.heap.push(Reverse((until, index)));
    }

    fn states(&self) -> Vec<BerthState> {
        let mut states: Vec<BerthState> =
            self.heap.iter().map(|Reverse((next_available, index))| BerthState { index: *index, next_available: *next_available }).collect();
        states.sort_by_key(|state| state.index);
        states
    }
}
