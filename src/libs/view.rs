use super::report::FormattedReport;
use super::schedule::{weekday_name, Holiday, WorkingHours};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn report(report: &FormattedReport) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FIELD", "VALUE"]);
        table.add_row(row!["Start", report.start]);
        table.add_row(row!["End", report.end]);
        table.add_row(row!["Due", report.due]);
        table.add_row(row!["Duration", report.duration]);
        table.add_row(row!["Working time", report.working]);
        table.add_row(row!["Waiting start", report.waiting_start]);
        table.add_row(row!["Waiting end", report.waiting_end]);
        table.add_row(row!["Waiting", report.waiting]);
        table.add_row(row!["Waiting (working)", report.waiting_working]);
        table.add_row(row!["Remaining", report.remaining]);
        table.add_row(row!["Due status", report.due_status]);
        table.printstd();

        Ok(())
    }

    pub fn working_hours(hours: &[WorkingHours]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "START", "END", "BREAK (MIN)", "OVERNIGHT"]);
        for window in hours {
            let overnight = if window.is_overnight() { "yes" } else { "" };
            table.add_row(row![
                weekday_name(window.weekday),
                window.start_label(),
                window.end_label(),
                window.break_minutes,
                overnight
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn holidays(holidays: &[Holiday]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "NAME"]);
        for holiday in holidays {
            table.add_row(row![holiday.id.unwrap_or(0), holiday.date.format("%Y-%m-%d"), holiday.name]);
        }
        table.printstd();

        Ok(())
    }
}
