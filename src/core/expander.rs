//! Expands a pattern's intervals into one activity id per 30-minute slot.

use crate::models::Interval;
use crate::utils::time::{SLOTS_PER_DAY, token_slot};
use serde::Serialize;
use std::ops::Index;

/// Id written into slots no interval covers.
pub const EMPTY: &str = "empty";

/// Exactly [`SLOTS_PER_DAY`] activity ids, slot 0 starting at midnight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActivitySequence(Vec<String>);

impl ActivitySequence {
    pub fn empty() -> Self {
        Self(vec![EMPTY.to_string(); SLOTS_PER_DAY])
    }

    pub fn slots(&self) -> &[String] {
        &self.0
    }

    /// True when no interval covered any slot.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|s| s == EMPTY)
    }

    pub fn get(&self, slot: usize) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    pub fn count(&self, id: &str) -> usize {
        self.0.iter().filter(|s| *s == id).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for ActivitySequence {
    type Output = str;

    fn index(&self, slot: usize) -> &str {
        &self.0[slot]
    }
}

/// Later intervals overwrite earlier ones. An interval whose end slot is
/// not after its start slot wraps past midnight, so one starting and
/// ending in the same slot covers the whole day.
pub fn expand(intervals: &[Interval]) -> ActivitySequence {
    let mut seq = ActivitySequence::empty();

    for iv in intervals {
        let start = token_slot(iv.start);
        let mut end = token_slot(iv.end);

        if end <= start {
            end += SLOTS_PER_DAY;
        }

        for i in start..end {
            seq.0[i % SLOTS_PER_DAY] = iv.id.clone();
        }
    }

    seq
}
