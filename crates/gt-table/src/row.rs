//! Row — an ordered run of cells.
//!
//! The cell count is fixed at construction. Rendering concatenates each
//! cell's output left to right with no separators.

use gt_glyph::{GlyphCache, Measure};

use crate::cell::Cell;

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// A row of `columns` default cells.
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            cells: vec![Cell::default(); columns],
        }
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, left to right.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the cells. The slice cannot grow or shrink.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// The cell at `column`, or `None` past the end.
    #[inline]
    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }

    /// Mutable cell at `column`, or `None` past the end.
    #[inline]
    pub fn cell_mut(&mut self, column: usize) -> Option<&mut Cell> {
        self.cells.get_mut(column)
    }

    /// Concatenated output of every cell.
    #[must_use]
    pub fn render(&self, cache: &GlyphCache) -> String {
        self.render_measured(cache, Measure::Chars)
    }

    /// [`render`](Self::render), with cell widths counted under `measure`.
    #[must_use]
    pub fn render_measured(&self, cache: &GlyphCache, measure: Measure) -> String {
        self.cells
            .iter()
            .map(|cell| cell.render_measured(cache, measure))
            .collect()
    }
}
