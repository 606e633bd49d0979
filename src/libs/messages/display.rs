//! Display implementation for tasktime application messages.
//!
//! All user-facing text lives here, in one `match` over [`Message`]. Commands
//! never build sentences themselves; they pick a variant, fill in its
//! parameters and hand it to one of the output macros.
//!
//! ## Text Formatting Standards
//!
//! - **Sentence Case**: Natural capitalization for readability
//! - **Specific Details**: Include the values the user typed
//! - **Action Guidance**: Say what to do next when something is missing
//!
//! ```rust
//! use tasktime::libs::messages::Message;
//!
//! let text = Message::HolidayAdded("New Year".to_string(), "2026-01-01".to_string()).to_string();
//! assert_eq!(text, "Holiday 'New Year' on 2026-01-01 added successfully.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORKING HOURS MESSAGES ===
            Message::WorkingHoursSet {
                day,
                start,
                end,
                break_minutes,
            } => format!("Working hours set for {} from {} to {} with a {} minute break.", day, start, end, break_minutes),
            Message::WorkingHoursUpdated {
                day,
                start,
                end,
                break_minutes,
            } => format!("Working hours updated for {} from {} to {} with a {} minute break.", day, start, end, break_minutes),
            Message::WorkingHoursHeader => "Working hours".to_string(),
            Message::NoWorkingHoursConfigured => "No working hours configured.".to_string(),
            Message::WorkingHoursDeletedCount(count) => format!("Deleted working hours for {} day(s).", count),
            Message::WorkingHoursNotFoundForDays(days) => format!("No working hours configured for: {}", days.join(", ")),
            Message::NoScheduleForCalculation => {
                "No working hours configured, working durations will be 0s. Use 'tasktime workhours set' to add some.".to_string()
            }

            // === HOLIDAY MESSAGES ===
            Message::HolidayAdded(name, date) => format!("Holiday '{}' on {} added successfully.", name, date),
            Message::HolidaysHeader => "Holidays".to_string(),
            Message::NoHolidaysConfigured => "No holidays configured.".to_string(),
            Message::HolidaysDeletedCount(count) => format!("Deleted {} holiday(s).", count),
            Message::HolidaysNotFoundForIds(ids) => format!("No holidays found with IDs: {:?}", ids),
            Message::ConfirmDeleteAllHolidays(count) => format!("Are you sure you want to delete ALL {} holidays?", count),
            Message::HolidayDateAlreadyTaken(date, name) => {
                format!("{} is already marked as '{}'. Only the first holiday on a date is used.", date, name)
            }

            // === REPORT MESSAGES ===
            Message::TaskReportHeader(zone) => format!("Task durations ({})", zone),
            Message::ReportSerializeFailed(error) => format!("Failed to serialize report: {}", error),

            // === ID LIST MESSAGES ===
            Message::InvalidIdValue(value) => format!("Invalid ID '{}'. Expected a number.", value),
            Message::InvalidIdRange(range) => format!("Invalid ID range format: {}. Expected 'start-end'.", range),
            Message::ReversedIdRange(start, end, range) => {
                format!("Start ID ({}) cannot be greater than end ID ({}) in range '{}'.", start, end, range)
            }
            Message::IdRangeTooLarge(range, limit) => {
                format!("ID range '{}' is too large. A range may cover at most {} IDs.", range, limit)
            }
            Message::DeleteSelectionRequired(flag) => format!("At least one of --{} or --all is required.", flag),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigParseError(error) => format!("Failed to parse configuration: {}", error),
            Message::TimezoneSet(zone) => format!("Reference time zone set to {}.", zone),
            Message::TimezoneCleared => "Reference time zone cleared, the system zone will be used.".to_string(),
            Message::TimezoneCurrent(zone) => format!("Reference time zone: {}", zone),
            Message::TimezoneSystemDefault => "Reference time zone: system default".to_string(),
            Message::DataDirectory(path) => format!("Data directory: {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
