pub mod calc;
pub mod config;
pub mod holiday;
pub mod workhours;

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;

/// Widest range `parse_id_list` expands.
pub const MAX_ID_RANGE: i64 = 10_000;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Calculate calendar and working durations of a task")]
    Calc(calc::CalcArgs),
    #[command(about = "Manage the weekly working hours")]
    Workhours(workhours::WorkhoursArgs),
    #[command(about = "Manage holidays")]
    Holiday(holiday::HolidayArgs),
    #[command(about = "Show or change the configuration")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Calc(args) => calc::cmd(args),
            Commands::Workhours(args) => workhours::cmd(args),
            Commands::Holiday(args) => holiday::cmd(args),
            Commands::Config(args) => config::cmd(args),
        }
    }
}

/// Parses a list such as `1,3-5,8` into sorted, unique ids.
///
/// Ranges are inclusive. Empty elements are skipped.
pub fn parse_id_list(input: &str) -> Result<Vec<i64>> {
    let mut ids = BTreeSet::new();

    for part in input.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match part.split_once('-') {
            Some((from, to)) => {
                if to.contains('-') {
                    return Err(msg_error_anyhow!(Message::InvalidIdRange(part.to_string())));
                }
                let start = parse_id(from.trim(), part)?;
                let end = parse_id(to.trim(), part)?;
                if start > end {
                    return Err(msg_error_anyhow!(Message::ReversedIdRange(start, end, part.to_string())));
                }
                if end.saturating_sub(start) > MAX_ID_RANGE {
                    return Err(msg_error_anyhow!(Message::IdRangeTooLarge(part.to_string(), MAX_ID_RANGE)));
                }
                ids.extend(start..=end);
            }
            None => {
                ids.insert(parse_id(part, part)?);
            }
        }
    }

    Ok(ids.into_iter().collect())
}

fn parse_id(value: &str, part: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| {
        if value == part {
            msg_error_anyhow!(Message::InvalidIdValue(value.to_string()))
        } else {
            msg_error_anyhow!(Message::InvalidIdRange(part.to_string()))
        }
    })
}
