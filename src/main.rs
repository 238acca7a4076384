// SPDX-License-Identifier: MIT
//
// glyph-table — prints a small scoreboard through the table core.
//
// This binary wires the two crates together:
//
//   gt-glyph → GlyphCache, the shared store of immutable glyphs
//   gt-table → Cell / Row / Table, the extrinsic state and the frame
//
// It builds one table, fills a few cells, prints the framed result to
// stdout, and logs cache statistics. Set RUST_LOG=debug (or trace) to see
// render and cache-miss events on stderr.

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gt_glyph::GlyphCache;
use gt_table::{Justify, Table};

/// Scoreboard contents: (name, score) per row after the header.
const SCORES: [(&str, &str); 3] = [("ada", "1200"), ("grace", "950"), ("linus", "80")];

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the scoreboard: a centered rank column, left-aligned names,
/// right-aligned scores.
fn scoreboard() -> gt_table::Result<Table> {
    let mut table = Table::new(SCORES.len() + 1, 3);

    for (column, (title, width)) in [("#", 4), ("player", 12), ("score", 8)]
        .into_iter()
        .enumerate()
    {
        let cell = table.cell_mut(0, column)?;
        cell.text = title.to_uppercase();
        cell.width = width;
    }

    for (i, (name, score)) in SCORES.iter().enumerate() {
        let row = i + 1;

        let rank = table.cell_mut(row, 0)?;
        rank.text = row.to_string();
        rank.width = 4;

        let player = table.cell_mut(row, 1)?;
        player.set_text(*name);
        player.width = 12;
        player.justify = Justify::Left;

        let points = table.cell_mut(row, 2)?;
        points.set_text(*score);
        points.width = 8;
        points.justify = Justify::Right;
    }

    Ok(table)
}

fn main() -> ExitCode {
    setup_logging();

    let cache = GlyphCache::new();
    let table = match scoreboard() {
        Ok(table) => table,
        Err(err) => {
            tracing::error!(%err, "failed to build table");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", table.render(&cache));

    let stats = cache.stats();
    tracing::info!(
        glyphs = cache.len(),
        hits = stats.hits,
        misses = stats.misses,
        "glyph cache after render"
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoreboard_renders_framed() {
        let cache = GlyphCache::new();
        let lines = scoreboard().expect("scoreboard fits").render_lines(&cache);

        assert_eq!(lines.len(), SCORES.len() + 3);
        assert_eq!(lines[1], "|   #    PLAYER     SCORE ");
        assert_eq!(lines[2], "|   1 ada             1200");
        assert_eq!(lines[0], "-".repeat(26));
        assert_eq!(lines.last(), lines.first());
    }
}
