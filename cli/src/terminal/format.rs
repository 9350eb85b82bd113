//! Box-drawn grid used by the table output.

use colored::*;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use macvend_common::lookup::LookupStatus;

/// One grid cell: its text and the color used when painting.
pub struct Cell {
    pub text: String,
    pub color: Option<Color>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }

    fn render(&self, width: usize, paint: bool) -> String {
        let pad = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(self.text.as_str())));
        match self.color {
            Some(color) if paint => format!("{}{}", self.text.color(color), pad),
            _ => format!("{}{}", self.text, pad),
        }
    }
}

pub fn status_to_cell(status: &LookupStatus) -> Cell {
    let color = match status {
        LookupStatus::Found(_) => colors::FOUND,
        LookupStatus::NotFound => colors::NOT_FOUND,
        LookupStatus::ConnectionError => colors::CONNECTION_ERROR,
    };
    Cell::colored(status.label(), color)
}

/// Renders `rows` under `header` as a double-ruled grid.
///
/// Widths are measured on the uncolored text so ANSI codes never skew alignment.
pub fn grid(header: &[Cell], rows: &[Vec<Cell>], paint: bool) -> String {
    let columns = header.len();
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            std::iter::once(header)
                .chain(rows.iter().map(Vec::as_slice))
                .filter_map(|row| row.get(col))
                .map(|cell| UnicodeWidthStr::width(cell.text.as_str()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, fill: &str, mid: &str, right: &str| -> String {
        let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };
    let line = |cells: &[Cell]| -> String {
        let rendered: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(col, width)| match cells.get(col) {
                Some(cell) => cell.render(*width, paint),
                None => " ".repeat(*width),
            })
            .collect();
        format!("│ {} │", rendered.join(" │ "))
    };

    let mut out: Vec<String> = Vec::with_capacity(rows.len() * 2 + 3);
    out.push(rule("╒", "═", "╤", "╕"));
    out.push(line(header));
    out.push(rule("╞", "═", "╪", "╡"));
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            out.push(rule("├", "─", "┼", "┤"));
        }
        out.push(line(row.as_slice()));
    }
    out.push(rule("╘", "═", "╧", "╛"));
    out.join("\n")
}
