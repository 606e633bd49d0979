use crate::{
    commands::parse_id_list,
    db::holidays::Holidays,
    libs::{messages::Message, schedule::Holiday, time::parse_date, view::View},
    msg_bail_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct HolidayArgs {
    #[command(subcommand)]
    command: HolidayCommand,
}

#[derive(Debug, Subcommand)]
enum HolidayCommand {
    /// Add a holiday
    Add {
        /// Holiday date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Holiday name
        #[arg(long)]
        name: String,
    },
    /// List holidays
    List,
    /// Delete holidays
    Del {
        /// IDs to delete, e.g. "1,3-5,8"
        #[arg(long, conflicts_with = "all")]
        ids: Option<String>,
        /// Delete all holidays
        #[arg(long)]
        all: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: HolidayArgs) -> Result<()> {
    match args.command {
        HolidayCommand::Add { date, name } => handle_add(date, name),
        HolidayCommand::List => handle_list(),
        HolidayCommand::Del { ids, all, yes } => handle_delete(ids, all, yes),
    }
}

fn handle_add(date: String, name: String) -> Result<()> {
    let date = parse_date(&date)?;
    let mut holidays = Holidays::new()?;

    // Lookups use the oldest row for a date, so a second one is stored but ignored
    if let Some(existing) = holidays.fetch_by_date(date)? {
        msg_warning!(Message::HolidayDateAlreadyTaken(date.to_string(), existing.name));
    }

    holidays.insert(&Holiday::new(date, &name))?;
    msg_success!(Message::HolidayAdded(name, date.to_string()));
    Ok(())
}

fn handle_list() -> Result<()> {
    let holidays = Holidays::new()?.list()?;

    if holidays.is_empty() {
        msg_info!(Message::NoHolidaysConfigured);
        return Ok(());
    }

    msg_print!(Message::HolidaysHeader, true);
    View::holidays(&holidays)?;
    Ok(())
}

fn handle_delete(ids: Option<String>, all: bool, yes: bool) -> Result<()> {
    let mut holidays = Holidays::new()?;

    if all {
        let count = holidays.list()?.len();
        if count == 0 {
            msg_info!(Message::NoHolidaysConfigured);
            return Ok(());
        }

        let confirmed = yes
            || Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteAllHolidays(count).to_string())
                .default(false)
                .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        let deleted = holidays.delete_all()?;
        msg_success!(Message::HolidaysDeletedCount(deleted));
        return Ok(());
    }

    let Some(ids) = ids else {
        msg_bail_anyhow!(Message::DeleteSelectionRequired("ids".to_string()));
    };

    let ids = parse_id_list(&ids)?;
    let existing = holidays.existing_ids(&ids)?;
    let missing: Vec<i64> = ids.iter().copied().filter(|id| !existing.contains(id)).collect();
    if !missing.is_empty() {
        msg_warning!(Message::HolidaysNotFoundForIds(missing));
    }

    let deleted = holidays.delete(&existing)?;
    msg_success!(Message::HolidaysDeletedCount(deleted));
    Ok(())
}
