//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders the table with display-width aware padding so CJK text
    /// keeps the columns aligned.
    pub fn render(&self) -> String {
        let mut col_widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (c, cell) in row.iter().enumerate() {
                col_widths[c] = col_widths[c].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }

        let mut out = String::new();

        for (c, header) in self.headers.iter().enumerate() {
            out.push_str(&pad(header, col_widths[c]));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (c, cell) in row.iter().enumerate() {
                out.push_str(&pad(cell, col_widths[c]));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

fn pad(value: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(value);
    let mut s = value.to_string();
    for _ in current..width {
        s.push(' ');
    }
    s
}
