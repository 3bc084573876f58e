// src/export/model.rs

use crate::core::WeeklyGrid;
use crate::models::Weekday;
use crate::utils::time::{slot_label, slot_labels};
use serde::Serialize;
use std::collections::BTreeMap;

/// JSON shape of an exported week. Maps are keyed by weekday, Sunday
/// first, and serialize with the weekday name as key.
#[derive(Serialize, Clone, Debug)]
pub struct GridExport {
    pub categories: BTreeMap<Weekday, String>,
    pub slots: Vec<String>,
    pub days: BTreeMap<Weekday, Vec<String>>,
}

impl GridExport {
    pub fn from_grid(grid: &WeeklyGrid) -> Self {
        let categories = grid
            .days()
            .iter()
            .map(|d| (d.day, d.pattern_title.clone()))
            .collect();

        let days = grid
            .days()
            .iter()
            .map(|d| (d.day, d.activities.slots().to_vec()))
            .collect();

        Self {
            categories,
            slots: slot_labels(),
            days,
        }
    }
}

/// Header for CSV / XLSX: the slot column, then the days Sunday first.
pub fn grid_headers() -> Vec<&'static str> {
    std::iter::once("time")
        .chain(Weekday::ALL.iter().map(|d| d.name()))
        .collect()
}

/// One row per slot: `HH:MM` followed by the seven activity ids.
pub fn grid_table(grid: &WeeklyGrid) -> Vec<Vec<String>> {
    grid.rows()
        .into_iter()
        .enumerate()
        .map(|(slot, ids)| {
            std::iter::once(slot_label(slot))
                .chain(ids.into_iter().map(str::to_string))
                .collect()
        })
        .collect()
}
