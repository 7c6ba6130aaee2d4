//! `starfield stars`: print a generated star field.

use crate::starfield::StarField;
use anyhow::{Context, Result};
use std::io::Write;

/// Write `field` as an aligned table, or as JSON when `json` is set
pub fn write_stars(field: &StarField, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, field.stars()).context("Failed to serialize stars")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "# {} stars in {}x{}",
        field.len(),
        field.width(),
        field.height()
    )?;
    writeln!(out, "{:>5} {:>9} {:>9} {:>6} {:>8}", "id", "x", "y", "size", "opacity")?;
    for star in field.stars() {
        writeln!(
            out,
            "{:>5} {:>9.2} {:>9.2} {:>6.2} {:>8.2}",
            star.id, star.x, star.y, star.size, star.opacity
        )?;
    }
    Ok(())
}
