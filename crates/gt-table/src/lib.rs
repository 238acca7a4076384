//! # gt-table — Table core for glyph-table
//!
//! Builds bordered text tables on top of the [`gt_glyph`] flyweight cache:
//!
//! - **[`justify`]** — `Justify` alignment modes and the padding loop
//! - **[`cell`]** — `Cell`, the extrinsic per-position state (text, width, justify)
//! - **[`row`]** — `Row`, an ordered run of cells rendered left to right
//! - **[`frame`]** — `FrameStyle` / `Frame`, the border and row-marker configuration
//! - **[`table`]** — `Table`, rows plus a frame, rendered top to bottom
//! - **[`error`]** — `TableError` and the crate `Result` alias
//!
//! Rendering flows strictly downward (`Table → Row → Cell → GlyphCache`)
//! and takes the cache by reference, so tests and callers own their cache.
//!
//! ```
//! use gt_glyph::GlyphCache;
//! use gt_table::{Justify, Table};
//!
//! let cache = GlyphCache::new();
//! let mut table = Table::new(1, 2);
//! table.cell_mut(0, 0).unwrap().text = "id".into();
//! let cell = table.cell_mut(0, 1).unwrap();
//! cell.text = "name".into();
//! cell.justify = Justify::Left;
//!
//! let lines = table.render_lines(&cache);
//! assert_eq!(lines[1], "|     id    name      ");
//! assert_eq!(lines[0].len(), lines[1].len());
//! ```

pub mod cell;
pub mod error;
pub mod frame;
pub mod justify;
pub mod row;
pub mod table;

pub use cell::Cell;
pub use error::{Result, TableError};
pub use frame::{Frame, FrameStyle};
pub use justify::Justify;
pub use row::Row;
pub use table::Table;
