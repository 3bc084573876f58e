//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with every cell padded to its column width. A `paint`
    /// callback may decorate the padded cell (ANSI colors) without
    /// breaking the alignment.
    pub fn render_with<F>(&self, paint: F) -> String
    where
        F: Fn(usize, usize, &str, String) -> String,
    {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for (r, row) in self.rows.iter().enumerate() {
            for (c, col) in self.columns.iter().enumerate() {
                let raw = row.get(c).map(String::as_str).unwrap_or("");
                out.push_str(&paint(r, c, raw, pad_right(raw, col.width)));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }

    pub fn render(&self) -> String {
        self.render_with(|_, _, _, padded| padded)
    }
}
