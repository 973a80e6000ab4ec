use chrono::NaiveDateTime;
use std::fmt;

/// Zero-based position of a berth in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BerthIndex(pub usize);

impl BerthIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Human label used by displays, numbering berths from 1.
    pub fn label(self) -> String {
        format!("Berth {}", self.0 + 1)
    }
}

impl fmt::Display for BerthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Availability of one berth during a single scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BerthState {
    pub index: BerthIndex,
    pub next_available: NaiveDateTime,
}

impl BerthState {
    pub fn new(index: BerthIndex, sentinel: NaiveDateTime) -> Self {
        BerthState { index, next_available: sentinel }
    }

    /// Books the berth until `end`.
    pub fn occupy_until(&mut self, end: NaiveDateTime) {
        debug_assert!(end >= self.next_available, "berth {} moved back in time", self.index);
        self.next_available = end;
    }
}
