//! Color loading policies
//!
//! Both display variants read the same table format but fail differently:
//! the single-clock loader never errors (defaults win), the quad-clock
//! loader treats an unknown position label as a file-level fault.

use std::path::Path;

use stint_core::{ClockColor, ColorLayout, Position, Rgb, StintError, StintResult};

use crate::table::{ColorTable, BACKGROUND_COLUMN, FOREGROUND_COLUMN, POSITION_COLUMN};

/// Load the single-clock color pair from `path`
///
/// Falls back to the default pair on any failure: missing or unreadable
/// file, missing columns, malformed cells. This loader never errors; the
/// failure is logged and the display keeps going.
pub fn load_single(path: &Path) -> ClockColor {
    let result = std::fs::read_to_string(path)
        .map_err(StintError::from)
        .and_then(|text| ColorTable::parse(&text))
        .and_then(|table| single_colors(&table));

    match result {
        Ok(color) => color,
        Err(e) => {
            tracing::warn!("Error reading colors, using defaults: {}", e);
            ClockColor::default()
        }
    }
}

/// Single-clock policy over a parsed table: take the first record
///
/// The first data row wins and every later row is ignored. A table with a
/// valid header but no data rows keeps the defaults.
pub fn single_colors(table: &ColorTable) -> StintResult<ClockColor> {
    let background = table.column(BACKGROUND_COLUMN)?;
    let foreground = table.column(FOREGROUND_COLUMN)?;

    if table.row_count() == 0 {
        return Ok(ClockColor::default());
    }
    row_color(table, 0, background, foreground)
}

/// Load the four-quadrant color layout from `path`
///
/// Unlike [`load_single`], a missing or unreadable file is fatal here.
pub fn load_quad(path: &Path) -> StintResult<ColorLayout> {
    let text = std::fs::read_to_string(path)?;
    let table = ColorTable::parse(&text)?;
    quad_colors(&table)
}

/// Quad-clock policy over a parsed table: read every record
///
/// A row's position label must be one of the four quadrants; an unknown
/// label aborts the whole load with no per-row fallback. Quadrants with no
/// row keep the default pair. A malformed color cell defaults only its own
/// row. When two rows name the same quadrant the last one wins.
pub fn quad_colors(table: &ColorTable) -> StintResult<ColorLayout> {
    let background = table.column(BACKGROUND_COLUMN)?;
    let foreground = table.column(FOREGROUND_COLUMN)?;
    let position = table.column(POSITION_COLUMN)?;

    let mut layout = ColorLayout::default();
    for row in 0..table.row_count() {
        let label = table.cell(row, position).unwrap_or("");
        let slot = Position::from_label(label)
            .ok_or_else(|| StintError::UnknownPosition(label.to_string()))?;

        match row_color(table, row, background, foreground) {
            Ok(color) => layout.set(slot, color),
            Err(e) => {
                tracing::warn!("Keeping default colors for {}: {}", slot.label(), e);
            }
        }
    }

    Ok(layout)
}

fn row_color(
    table: &ColorTable,
    row: usize,
    background: usize,
    foreground: usize,
) -> StintResult<ClockColor> {
    let background: Rgb = table.cell(row, background).unwrap_or("").parse()?;
    let foreground: Rgb = table.cell(row, foreground).unwrap_or("").parse()?;
    Ok(ClockColor::new(background, foreground))
}
