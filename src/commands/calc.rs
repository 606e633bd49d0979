use crate::{
    db::{holidays::Holidays, load_schedule, working_hours::WorkHours},
    libs::{
        config::Config,
        duration::TaskSpan,
        messages::Message,
        report::TaskReport,
        time::parse_datetime,
        view::View,
    },
    msg_error_anyhow, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Args;
use std::fmt::Display;

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// Task start (YYYY-MM-DD HH:MM:SS, YYYY-MM-DD, MM-DD-YYYY or DD-MM-YYYY)
    #[arg(long)]
    start: String,
    /// Task end; omit for a task that is still running
    #[arg(long)]
    end: Option<String>,
    /// Due date
    #[arg(long)]
    due: Option<String>,
    /// Start of the waiting period
    #[arg(long)]
    wait_start: Option<String>,
    /// End of the waiting period
    #[arg(long)]
    wait_end: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: CalcArgs) -> Result<()> {
    let config = Config::read()?;
    match config.zone()? {
        Some(zone) => run(&args, &zone, zone.name()),
        None => run(&args, &Local, "local"),
    }
}

fn run<Tz: TimeZone>(args: &CalcArgs, tz: &Tz, zone_label: &str) -> Result<()>
where
    Tz::Offset: Display,
{
    let span = TaskSpan::new(parse_datetime(&args.start, tz)?, parse_optional(args.end.as_deref(), tz)?)
        .with_waiting(parse_optional(args.wait_start.as_deref(), tz)?, parse_optional(args.wait_end.as_deref(), tz)?);
    let due = parse_optional(args.due.as_deref(), tz)?;

    let schedule = load_schedule(&mut WorkHours::new()?, &mut Holidays::new()?)?;
    if schedule.is_empty() && !args.json {
        msg_warning!(Message::NoScheduleForCalculation);
    }

    let report = TaskReport::build(&span, due, &schedule, tz, Utc::now()).format(tz);

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| msg_error_anyhow!(Message::ReportSerializeFailed(e.to_string())))?;
        println!("{}", json);
        return Ok(());
    }

    msg_print!(Message::TaskReportHeader(zone_label.to_string()), true);
    View::report(&report)?;
    Ok(())
}

fn parse_optional<Tz: TimeZone>(value: Option<&str>, tz: &Tz) -> Result<Option<DateTime<Utc>>> {
    match value {
        Some(text) => Ok(parse_datetime(text, tz)?),
        None => Ok(None),
    }
}
