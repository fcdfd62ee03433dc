mod config;
mod report;

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use gildedrose_inventory::{GildedRose, standard_stock};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    gildedrose_observability::init(config.log_format);

    let output = config.output();
    let items = if config.items.is_empty() {
        standard_stock()
    } else {
        config.items
    };
    tracing::debug!(days = config.days, items = items.len(), "starting simulation");

    let mut shop = GildedRose::new(items);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    report::write_day(&mut out, output, shop.day(), shop.items())?;
    for _ in 0..config.days {
        shop.advance_day();
        report::write_day(&mut out, output, shop.day(), shop.items())?;
    }
    out.flush().context("failed to flush report")?;

    Ok(())
}
