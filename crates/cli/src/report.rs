//! Day-by-day inventory printout.

use std::io::Write;

use gildedrose_inventory::Item;

use crate::config::OutputFormat;

/// Write one day's inventory in the chosen format.
///
/// JSON output is one array of items per line, one line per day.
pub fn write_day<W: Write>(
    out: &mut W,
    format: OutputFormat,
    day: u64,
    items: &[Item],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {day} --------")?;
            writeln!(out, "name, sellIn, quality")?;
            for item in items {
                writeln!(out, "{item}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
