//! Command-line and environment configuration.

use core::str::FromStr;

use clap::Parser;

use gildedrose_inventory::Item;
use gildedrose_observability::LogFormat;

const DEFAULT_DAYS: u64 = 2;

/// How each day's inventory is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Simulate the Gilded Rose inventory day by day.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gildedrose", version)]
pub struct Config {
    /// Number of days to simulate after the opening inventory.
    #[arg(value_name = "DAYS", default_value_t = DEFAULT_DAYS)]
    pub days: u64,

    /// Print each day as a JSON array instead of a text table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Stock item as `name,sell_in,quality`; repeat for more. Without any,
    /// the standard stock is used.
    #[arg(
        long = "item",
        value_name = "NAME,SELL_IN,QUALITY",
        value_parser = Item::from_str
    )]
    pub items: Vec<Item>,

    /// Log line format (`pretty` or `json`).
    #[arg(
        long,
        env = "GILDEDROSE_LOG_FORMAT",
        default_value = "pretty",
        value_parser = parse_log_format
    )]
    pub log_format: LogFormat,
}

impl Config {
    pub fn output(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    LogFormat::parse(value).ok_or_else(|| format!("expected `json` or `pretty`, got `{value}`"))
}
