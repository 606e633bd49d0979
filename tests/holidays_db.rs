#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc, Weekday};
    use tasktime::db::db::{Db, DB_FILE_NAME};
    use tasktime::db::holidays::Holidays;
    use tasktime::db::load_schedule;
    use tasktime::db::working_hours::WorkHours;
    use tasktime::libs::schedule::{Holiday, WorkingHours};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct HolidayTestContext {
        temp_dir: TempDir,
    }

    impl HolidayTestContext {
        fn db(&self) -> Db {
            Db::open(&self.temp_dir.path().join(DB_FILE_NAME)).unwrap()
        }
    }

    impl TestContext for HolidayTestContext {
        fn setup() -> Self {
            HolidayTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test_context(HolidayTestContext)]
    #[test]
    fn test_insert_and_list(ctx: &mut HolidayTestContext) {
        let mut holidays = Holidays::from_db(ctx.db());

        let christmas = holidays.insert(&Holiday::new(date(12, 25), "Christmas")).unwrap();
        let new_year = holidays.insert(&Holiday::new(date(1, 1), "New Year")).unwrap();
        assert!(christmas > 0);
        assert_ne!(christmas, new_year);

        let stored = holidays.list().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].name, "New Year");
        assert_eq!(stored[0].id, Some(new_year));
        assert_eq!(stored[1].date, date(12, 25));
    }

    #[test_context(HolidayTestContext)]
    #[test]
    fn test_fetch_by_date_returns_oldest(ctx: &mut HolidayTestContext) {
        let mut holidays = Holidays::from_db(ctx.db());

        assert!(holidays.fetch_by_date(date(5, 1)).unwrap().is_none());

        holidays.insert(&Holiday::new(date(5, 1), "Labour Day")).unwrap();
        holidays.insert(&Holiday::new(date(5, 1), "May Day")).unwrap();

        assert_eq!(holidays.fetch_by_date(date(5, 1)).unwrap().unwrap().name, "Labour Day");
    }

    #[test_context(HolidayTestContext)]
    #[test]
    fn test_delete_by_ids(ctx: &mut HolidayTestContext) {
        let mut holidays = Holidays::from_db(ctx.db());

        let first = holidays.insert(&Holiday::new(date(1, 1), "New Year")).unwrap();
        let second = holidays.insert(&Holiday::new(date(12, 25), "Christmas")).unwrap();

        assert_eq!(holidays.existing_ids(&[first, 999]).unwrap(), vec![first]);
        assert_eq!(holidays.delete(&[first, 999]).unwrap(), 1);
        assert_eq!(holidays.delete(&[]).unwrap(), 0);

        let remaining = holidays.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(second));

        assert_eq!(holidays.delete_all().unwrap(), 1);
        assert!(holidays.list().unwrap().is_empty());
    }

    #[test_context(HolidayTestContext)]
    #[test]
    fn test_load_schedule(ctx: &mut HolidayTestContext) {
        let mut hours = WorkHours::from_db(ctx.db());
        let mut holidays = Holidays::from_db(ctx.db());

        for day in [Weekday::Mon, Weekday::Tue] {
            hours.set(&WorkingHours::new(day, 9, 0, 17, 0, 60).unwrap()).unwrap();
        }
        holidays.insert(&Holiday::new(date(3, 11), "Founders Day")).unwrap();
        holidays.insert(&Holiday::new(date(3, 11), "Ignored")).unwrap();

        let schedule = load_schedule(&mut hours, &mut holidays).unwrap();
        assert_eq!(schedule.holiday_on(date(3, 11)).unwrap().name, "Founders Day");

        // Monday 2025-03-10 counts, Tuesday is the holiday
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 11, 23, 0, 0).unwrap();
        assert_eq!(schedule.working_duration(Some(start), Some(end), &Utc), Duration::hours(7));
    }
}
