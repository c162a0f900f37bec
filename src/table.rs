//! Bordered table rendering with Unicode-width-aware alignment.
//!
//! Cells may be multi-line and may carry SGR styling; alignment is computed
//! from rendered width ([`crate::measure`]), so styled, CJK, and emoji cells
//! line up with plain ASCII ones.
//!
//! Layout quirk, preserved from the original engine: a table is stored as a
//! sequence of *columns*, each of which renders as one horizontal band of
//! output, and the cell-slot widths are sized per slot index across ALL
//! columns, with the slot count taken from the FIRST column. Ragged columns
//! degrade to blank cells rather than failing.

pub mod theme;

use crate::measure::{line_content, line_count, max_line_width, visible_width};
use bitflags::bitflags;
use self::theme::BorderTheme;
use std::io::{self, Write};
use tracing::trace;

bitflags! {
    /// Independent rendering options; bit values match the original flag set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TableFlags: u8 {
        /// Separator row between every pair of adjacent columns (bands).
        const HORIZONTAL_BORDERS = 0b00001;
        /// Vertical bars and intersections between cell slots.
        const VERTICAL_BORDERS = 0b00010;
        /// Separator row after the first column only.
        const HEADER_BORDER = 0b00100;
        /// Separator row before the last column only.
        const FOOTER_BORDER = 0b01000;
        /// Reserved for trailing free text; no rendering behavior.
        const TRAILING_TEXT = 0b10000;
    }
}

/// A grid of styled multi-line cells plus a border theme and flags.
///
/// The theme is referenced, not copied, and must outlive the table.
#[derive(Debug, Clone)]
pub struct Table<'a> {
    columns: Vec<Vec<String>>,
    flags: TableFlags,
    theme: &'a BorderTheme,
}

impl<'a> Table<'a> {
    /// Empty table with the modern box-drawing theme.
    pub fn new(flags: TableFlags) -> Self {
        Self::with_theme(flags, &theme::MODERN)
    }

    pub fn with_theme(flags: TableFlags, theme: &'a BorderTheme) -> Self {
        Self {
            columns: Vec::new(),
            flags,
            theme,
        }
    }

    /// Build a table from cell data, plain or pre-styled.
    pub fn from_columns<S: Into<String>>(data: Vec<Vec<S>>, flags: TableFlags) -> Self {
        let mut table = Self::new(flags);
        for column in data {
            table.append_column(column);
        }
        table
    }

    pub fn from_columns_with_theme<S: Into<String>>(
        data: Vec<Vec<S>>,
        flags: TableFlags,
        theme: &'a BorderTheme,
    ) -> Self {
        let mut table = Self::with_theme(flags, theme);
        for column in data {
            table.append_column(column);
        }
        table
    }

    /// Append one column (one horizontal band of output).
    pub fn append_column<S: Into<String>>(&mut self, column: Vec<S>) {
        self.columns.push(column.into_iter().map(Into::into).collect());
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Direct cell access; out-of-range indices yield `""`.
    pub fn cell(&self, column_index: usize, row_index: usize) -> &str {
        self.columns
            .get(column_index)
            .and_then(|column| column.get(row_index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of cell slots per output row, taken from the first column.
    fn slot_count(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    /// Width of slot `r`: the widest logical line of the cell at index `r`
    /// across every column.
    fn slot_width(&self, row_index: usize) -> usize {
        self.columns
            .iter()
            .map(|column| {
                column
                    .get(row_index)
                    .map(|cell| max_line_width(cell))
                    .unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
    }

    /// Render the table to a newline-terminated block. Pure: repeated calls
    /// yield byte-identical output.
    pub fn render(&self) -> String {
        let slots = self.slot_count();
        let widths: Vec<usize> = (0..slots).map(|r| self.slot_width(r)).collect();
        trace!(columns = self.columns.len(), slots, "rendering table");

        let mut out = String::new();
        self.push_border_row(
            &mut out,
            &widths,
            self.theme.top_left,
            self.theme.top_intersection,
            self.theme.top_right,
        );

        let vertical = self.flags.contains(TableFlags::VERTICAL_BORDERS);
        for (index, column) in self.columns.iter().enumerate() {
            let height = column.iter().map(|cell| line_count(cell)).max().unwrap_or(1);
            for line_index in 0..height {
                out.push_str(self.theme.vertical_bar);
                for (r, width) in widths.iter().enumerate() {
                    if vertical && r > 0 {
                        out.push_str(self.theme.vertical_bar);
                    }
                    let content = column
                        .get(r)
                        .map(|cell| line_content(cell, line_index))
                        .unwrap_or("");
                    out.push_str(self.theme.padding_left);
                    out.push_str(content);
                    let pad = width.saturating_sub(visible_width(content));
                    for _ in 0..pad {
                        out.push(' ');
                    }
                    out.push_str(self.theme.padding_right);
                }
                out.push_str(self.theme.vertical_bar);
                out.push('\n');
            }

            if index + 1 < self.columns.len() && self.separator_after(index) {
                self.push_border_row(
                    &mut out,
                    &widths,
                    self.theme.left_intersection,
                    self.theme.intersection,
                    self.theme.right_intersection,
                );
            }
        }

        self.push_border_row(
            &mut out,
            &widths,
            self.theme.bottom_left,
            self.theme.bottom_intersection,
            self.theme.bottom_right,
        );
        out
    }

    /// Render into an explicit sink.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(self.render().as_bytes())
    }

    /// Whether a separator row follows the column at `index`.
    fn separator_after(&self, index: usize) -> bool {
        if self.flags.contains(TableFlags::HORIZONTAL_BORDERS) {
            return true;
        }
        if self.flags.contains(TableFlags::HEADER_BORDER) && index == 0 {
            return true;
        }
        self.flags.contains(TableFlags::FOOTER_BORDER) && index + 2 == self.columns.len()
    }

    /// Emit one horizontal border row: `left`, a bar segment per slot sized
    /// to content plus padding, `mid` between slots when vertical borders
    /// are on, then `right`.
    fn push_border_row(&self, out: &mut String, widths: &[usize], left: &str, mid: &str, right: &str) {
        let padding =
            visible_width(self.theme.padding_left) + visible_width(self.theme.padding_right);
        out.push_str(left);
        for (r, width) in widths.iter().enumerate() {
            if self.flags.contains(TableFlags::VERTICAL_BORDERS) && r > 0 {
                out.push_str(mid);
            }
            out.push_str(&self.theme.horizontal_bar.repeat(width + padding));
        }
        out.push_str(right);
        out.push('\n');
    }
}
