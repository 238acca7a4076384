//! Table — rows of cells inside a frame.
//!
//! Rendering:
//!
//! ```text
//! rows ──render──► "| " + row text ──► max width ──► border, lines, border
//! ```
//!
//! The border is as wide as the widest display line (marker included),
//! even when rows come out at different widths because their cells do.
//! Rows never get padded to match each other. Widths and the border are
//! counted in chars unless the table is given another [`Measure`].

use gt_glyph::{GlyphCache, Measure};

use crate::cell::Cell;
use crate::error::{Result, TableError};
use crate::frame::{Frame, FrameStyle};
use crate::row::Row;

/// A framed grid of cells with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    columns: usize,
    style: FrameStyle,
    measure: Measure,
}

impl Table {
    // ─── Construction ────────────────────────────────────────────────────

    /// `rows` rows of `columns` default cells each, with the default frame.
    ///
    /// ```
    /// use gt_table::Table;
    ///
    /// let table = Table::new(2, 3);
    /// assert_eq!(table.row_count(), 2);
    /// assert_eq!(table.column_count(), 3);
    /// ```
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(columns)).collect(),
            columns,
            style: FrameStyle::default(),
            measure: Measure::Chars,
        }
    }

    /// Replace the frame style.
    #[must_use]
    pub fn with_style(self, style: FrameStyle) -> Self {
        Self { style, ..self }
    }

    /// Count cell widths and the border under `measure` instead of chars.
    #[must_use]
    pub fn with_measure(self, measure: Measure) -> Self {
        Self { measure, ..self }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in every row.
    #[inline]
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// The frame style.
    #[inline]
    #[must_use]
    pub const fn style(&self) -> FrameStyle {
        self.style
    }

    /// How widths are counted.
    #[inline]
    #[must_use]
    pub const fn measure(&self) -> Measure {
        self.measure
    }

    /// All rows, top to bottom.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The row at `index`.
    ///
    /// # Errors
    ///
    /// [`TableError::RowOutOfBounds`] past the last row.
    pub fn row(&self, index: usize) -> Result<&Row> {
        let rows = self.rows.len();
        self.rows
            .get(index)
            .ok_or(TableError::RowOutOfBounds { row: index, rows })
    }

    /// Mutable row at `index`.
    ///
    /// # Errors
    ///
    /// [`TableError::RowOutOfBounds`] past the last row.
    pub fn row_mut(&mut self, index: usize) -> Result<&mut Row> {
        let rows = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(TableError::RowOutOfBounds { row: index, rows })
    }

    /// The cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`TableError::CellOutOfBounds`] if either index is out of range.
    pub fn cell(&self, row: usize, column: usize) -> Result<&Cell> {
        let err = self.out_of_bounds(row, column);
        self.rows
            .get(row)
            .and_then(|r| r.cell(column))
            .ok_or(err)
    }

    /// Mutable cell at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`TableError::CellOutOfBounds`] if either index is out of range.
    pub fn cell_mut(&mut self, row: usize, column: usize) -> Result<&mut Cell> {
        let err = self.out_of_bounds(row, column);
        self.rows
            .get_mut(row)
            .and_then(|r| r.cell_mut(column))
            .ok_or(err)
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> TableError {
        TableError::CellOutOfBounds {
            row,
            column,
            rows: self.rows.len(),
            columns: self.columns,
        }
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Every row with the frame prefix, top to bottom, without borders.
    #[must_use]
    pub fn display_lines(&self, cache: &GlyphCache) -> Vec<String> {
        let prefix = self.style.prefix();
        self.rows
            .iter()
            .map(|row| format!("{prefix}{}", row.render_measured(cache, self.measure)))
            .collect()
    }

    /// The framed table as lines: border, rows, border.
    ///
    /// Borders are as wide as the widest display line, or empty when the
    /// table has no rows. Borders left out of the frame's parts are not
    /// emitted at all.
    #[must_use]
    pub fn render_lines(&self, cache: &GlyphCache) -> Vec<String> {
        let lines = self.display_lines(cache);
        let max_width = lines
            .iter()
            .map(|l| self.measure.len(l))
            .max()
            .unwrap_or(0);
        tracing::debug!(
            rows = self.rows.len(),
            columns = self.columns,
            max_width,
            "rendered table"
        );

        let parts = self.style.parts();
        let mut out = Vec::with_capacity(lines.len() + 2);
        if parts.contains(Frame::TOP) {
            out.push(self.style.border_line(max_width));
        }
        out.extend(lines);
        if parts.contains(Frame::BOTTOM) {
            out.push(self.style.border_line(max_width));
        }
        out
    }

    /// [`render_lines`](Self::render_lines) joined with newlines.
    #[must_use]
    pub fn render(&self, cache: &GlyphCache) -> String {
        self.render_lines(cache).join("\n")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
