use crate::{
    commands::parse_id_list,
    db::working_hours::WorkHours,
    libs::{
        messages::Message,
        schedule::{weekday_from_index, weekday_name, WorkingHours},
        view::View,
    },
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Weekday;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct WorkhoursArgs {
    #[command(subcommand)]
    command: WorkhoursCommand,
}

#[derive(Debug, Subcommand)]
enum WorkhoursCommand {
    /// Set the working window of one weekday
    Set {
        /// Day of week, 0 = Sunday ... 6 = Saturday
        #[arg(long)]
        day: u32,
        #[arg(long)]
        start_hour: u32,
        #[arg(long, default_value_t = 0)]
        start_minute: u32,
        /// 0-24; an end before the start runs past midnight
        #[arg(long)]
        end_hour: u32,
        #[arg(long, default_value_t = 0)]
        end_minute: u32,
        /// Break deducted from every working day
        #[arg(long, default_value_t = 0)]
        break_minutes: u32,
    },
    /// List configured working hours
    List,
    /// Delete working hours
    Del {
        /// Days to delete, e.g. "1,3-5"
        #[arg(long, conflicts_with = "all")]
        days: Option<String>,
        /// Delete all working hours
        #[arg(long)]
        all: bool,
    },
}

pub fn cmd(args: WorkhoursArgs) -> Result<()> {
    match args.command {
        WorkhoursCommand::Set {
            day,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
            break_minutes,
        } => handle_set(day, start_hour, start_minute, end_hour, end_minute, break_minutes),
        WorkhoursCommand::List => handle_list(),
        WorkhoursCommand::Del { days, all } => handle_delete(days, all),
    }
}

fn handle_set(day: u32, start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32, break_minutes: u32) -> Result<()> {
    let weekday = weekday_from_index(day)?;
    let hours = WorkingHours::new(weekday, start_hour, start_minute, end_hour, end_minute, break_minutes)?;

    let inserted = WorkHours::new()?.set(&hours)?;

    let day = weekday_name(weekday).to_string();
    let (start, end) = (hours.start_label(), hours.end_label());
    if inserted {
        msg_success!(Message::WorkingHoursSet {
            day,
            start,
            end,
            break_minutes
        });
    } else {
        msg_success!(Message::WorkingHoursUpdated {
            day,
            start,
            end,
            break_minutes
        });
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let hours = WorkHours::new()?.list()?;

    if hours.is_empty() {
        msg_info!(Message::NoWorkingHoursConfigured);
        return Ok(());
    }

    msg_print!(Message::WorkingHoursHeader, true);
    View::working_hours(&hours)?;
    Ok(())
}

fn handle_delete(days: Option<String>, all: bool) -> Result<()> {
    let mut work_hours = WorkHours::new()?;

    if all {
        let deleted = work_hours.delete_all()?;
        msg_success!(Message::WorkingHoursDeletedCount(deleted));
        return Ok(());
    }

    let Some(days) = days else {
        msg_bail_anyhow!(Message::DeleteSelectionRequired("days".to_string()));
    };

    let weekdays = parse_weekdays(&days)?;
    let configured: Vec<Weekday> = work_hours.list()?.iter().map(|hours| hours.weekday).collect();
    let missing: Vec<String> = weekdays
        .iter()
        .filter(|day| !configured.contains(day))
        .map(|day| weekday_name(*day).to_string())
        .collect();
    if !missing.is_empty() {
        msg_warning!(Message::WorkingHoursNotFoundForDays(missing));
    }

    let deleted = work_hours.delete_days(&weekdays)?;
    msg_success!(Message::WorkingHoursDeletedCount(deleted));
    Ok(())
}

fn parse_weekdays(days: &str) -> Result<Vec<Weekday>> {
    let mut weekdays = Vec::new();
    for id in parse_id_list(days)? {
        let index = u32::try_from(id).map_err(|_| msg_error_anyhow!(Message::InvalidIdValue(id.to_string())))?;
        weekdays.push(weekday_from_index(index)?);
    }
    Ok(weekdays)
}
