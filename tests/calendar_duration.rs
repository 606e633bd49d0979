#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use tasktime::libs::duration::{duration_until, time_difference, TaskSpan};

    fn utc(day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2025, 3, day, hour, minute, 0).unwrap())
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_plain_duration() {
        let span = TaskSpan::new(utc(10, 9, 0), utc(10, 17, 30));
        assert_eq!(span.calendar_duration(now()), Duration::hours(8) + Duration::minutes(30));
    }

    #[test]
    fn test_reversed_endpoints_are_swapped() {
        let span = TaskSpan::new(utc(10, 17, 30), utc(10, 9, 0));
        assert_eq!(span.calendar_duration(now()), Duration::hours(8) + Duration::minutes(30));
    }

    #[test]
    fn test_running_task_measured_until_now() {
        let span = TaskSpan::new(utc(12, 10, 0), None);
        assert_eq!(span.end_or(now()), now());
        assert_eq!(span.calendar_duration(now()), Duration::hours(2));
    }

    #[test]
    fn test_missing_start_is_zero() {
        let span = TaskSpan::new(None, utc(10, 9, 0));
        assert_eq!(span.calendar_duration(now()), Duration::zero());
    }

    #[test]
    fn test_waiting_inside_span_is_subtracted() {
        let span = TaskSpan::new(utc(10, 9, 0), utc(10, 17, 0)).with_waiting(utc(10, 11, 0), utc(10, 12, 30));

        assert_eq!(span.waiting_duration(), Duration::minutes(90));
        assert_eq!(span.calendar_duration(now()), Duration::hours(8) - Duration::minutes(90));
    }

    #[test]
    fn test_waiting_outside_span_only_overlap_counts() {
        let span = TaskSpan::new(utc(10, 9, 0), utc(10, 17, 0)).with_waiting(utc(10, 16, 0), utc(10, 20, 0));

        assert_eq!(span.waiting_duration(), Duration::hours(4));
        assert_eq!(span.calendar_duration(now()), Duration::hours(7));
    }

    #[test]
    fn test_incomplete_or_reversed_waiting_is_ignored() {
        let open = TaskSpan::new(utc(10, 9, 0), utc(10, 17, 0)).with_waiting(utc(10, 11, 0), None);
        assert!(!open.has_waiting_period());
        assert_eq!(open.waiting_duration(), Duration::zero());
        assert_eq!(open.calendar_duration(now()), Duration::hours(8));

        let reversed = TaskSpan::new(utc(10, 9, 0), utc(10, 17, 0)).with_waiting(utc(10, 12, 0), utc(10, 11, 0));
        assert!(reversed.has_waiting_period());
        assert_eq!(reversed.waiting_duration(), Duration::zero());
        assert_eq!(reversed.calendar_duration(now()), Duration::hours(8));
    }

    #[test]
    fn test_duration_until() {
        assert_eq!(duration_until(utc(12, 15, 0), now()), Duration::hours(3));
        assert_eq!(duration_until(utc(12, 9, 0), now()), Duration::zero());
        assert_eq!(duration_until(Some(now()), now()), Duration::zero());
        assert_eq!(duration_until(None, now()), Duration::zero());
    }

    #[test]
    fn test_time_difference() {
        assert_eq!(time_difference(utc(12, 15, 0), now()), (Duration::hours(3), false));
        assert_eq!(time_difference(utc(12, 9, 0), now()), (Duration::hours(3), true));
        assert_eq!(time_difference(Some(now()), now()), (Duration::zero(), false));
        assert_eq!(time_difference(None, now()), (Duration::zero(), false));
    }
}
