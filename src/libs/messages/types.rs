#[derive(Debug, Clone)]
pub enum Message {
    // === WORKING HOURS MESSAGES ===
    WorkingHoursSet {
        day: String,
        start: String,
        end: String,
        break_minutes: u32,
    },
    WorkingHoursUpdated {
        day: String,
        start: String,
        end: String,
        break_minutes: u32,
    },
    WorkingHoursHeader,
    NoWorkingHoursConfigured,
    WorkingHoursDeletedCount(usize),
    WorkingHoursNotFoundForDays(Vec<String>),
    NoScheduleForCalculation,

    // === HOLIDAY MESSAGES ===
    HolidayAdded(String, String), // name, date
    HolidaysHeader,
    NoHolidaysConfigured,
    HolidaysDeletedCount(usize),
    HolidaysNotFoundForIds(Vec<i64>),
    ConfirmDeleteAllHolidays(usize),
    HolidayDateAlreadyTaken(String, String), // date, existing name

    // === REPORT MESSAGES ===
    TaskReportHeader(String), // reference zone
    ReportSerializeFailed(String),

    // === ID LIST MESSAGES ===
    InvalidIdValue(String),
    InvalidIdRange(String),
    ReversedIdRange(i64, i64, String), // start, end, range
    IdRangeTooLarge(String, i64),     // range, limit
    DeleteSelectionRequired(String),   // flag name

    // === CONFIGURATION MESSAGES ===
    ConfigParseError(String),
    TimezoneSet(String),
    TimezoneCleared,
    TimezoneCurrent(String),
    TimezoneSystemDefault,
    DataDirectory(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
