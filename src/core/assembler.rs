//! Weekly schedule assembler: classifies the seven days, expands the
//! matching patterns and composes the 7×48 grid.

use crate::core::classifier::classify;
use crate::core::expander::{ActivitySequence, expand};
use crate::errors::{AppError, AppResult};
use crate::models::{DayCategory, Schedule, Weekday};
use crate::utils::time::{SLOT_MINUTES, SLOTS_PER_DAY};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub category: DayCategory,
    pub pattern_title: String,
    pub activities: ActivitySequence,
}

/// A maximal run of one activity inside a day; `end_slot` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityBlock {
    pub id: String,
    pub start_slot: usize,
    pub end_slot: usize,
}

impl ActivityBlock {
    pub fn minutes(&self) -> u32 {
        (self.end_slot - self.start_slot) as u32 * SLOT_MINUTES
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyGrid {
    days: Vec<DaySchedule>,
    expansions: usize,
}

impl WeeklyGrid {
    /// Days in canonical order, Sunday first.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn category(&self, day: Weekday) -> DayCategory {
        self.day(day).category
    }

    pub fn categories(&self) -> BTreeMap<Weekday, DayCategory> {
        self.days.iter().map(|d| (d.day, d.category)).collect()
    }

    pub fn activities(&self, day: Weekday) -> &ActivitySequence {
        &self.day(day).activities
    }

    pub fn activity_at(&self, day: Weekday, slot: usize) -> Option<&str> {
        self.activities(day).get(slot)
    }

    /// Number of distinct patterns expanded while building the grid.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Slot-major table: 48 rows of 7 ids, Sunday first.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        (0..SLOTS_PER_DAY)
            .map(|slot| self.days.iter().map(|d| &d.activities[slot]).collect())
            .collect()
    }

    pub fn blocks(&self, day: Weekday) -> Vec<ActivityBlock> {
        let mut blocks: Vec<ActivityBlock> = Vec::new();

        for (slot, id) in self.activities(day).iter().enumerate() {
            match blocks.last_mut() {
                Some(last) if last.id == id => last.end_slot = slot + 1,
                _ => blocks.push(ActivityBlock {
                    id: id.to_string(),
                    start_slot: slot,
                    end_slot: slot + 1,
                }),
            }
        }

        blocks
    }

    /// Minutes per activity id over the whole week.
    pub fn totals(&self) -> BTreeMap<String, u32> {
        let mut totals = BTreeMap::new();
        for d in &self.days {
            for id in d.activities.iter() {
                *totals.entry(id.to_string()).or_insert(0) += SLOT_MINUTES;
            }
        }
        totals
    }
}

/// Build the weekly grid for `schedule`.
///
/// Each distinct pattern is expanded at most once per call; the cache
/// lives only for this call. Fails with [`AppError::MissingPattern`] as
/// soon as a day's category has no pattern, and returns no partial grid.
pub fn build_weekly_grid(schedule: &Schedule) -> AppResult<WeeklyGrid> {
    let mut cache: HashMap<usize, ActivitySequence> = HashMap::new();
    let mut days = Vec::with_capacity(Weekday::ALL.len());

    for day in Weekday::ALL {
        let category = classify(day, schedule);
        let title = category.title();

        let idx = schedule
            .pattern_index(&title)
            .ok_or_else(|| AppError::MissingPattern(title.clone()))?;

        let activities = cache
            .entry(idx)
            .or_insert_with(|| expand(&schedule.patterns[idx].intervals))
            .clone();

        days.push(DaySchedule {
            day,
            category,
            pattern_title: title,
            activities,
        });
    }

    Ok(WeeklyGrid {
        days,
        expansions: cache.len(),
    })
}
