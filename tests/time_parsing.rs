#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
    use chrono_tz::America::Santiago;
    use chrono_tz::Europe::Berlin;
    use tasktime::libs::error::TimeError;
    use tasktime::libs::time::{
        earlier, format_display, intersection, later, overlap, parse_date, parse_datetime, parse_datetime_utc,
    };

    #[test]
    fn test_parse_accepted_layouts() {
        let midnight = Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap();

        assert_eq!(parse_datetime_utc("2025-03-14").unwrap(), Some(midnight));
        assert_eq!(parse_datetime_utc("03-14-2025").unwrap(), Some(midnight));
        assert_eq!(parse_datetime_utc("14-03-2025").unwrap(), Some(midnight));
        assert_eq!(
            parse_datetime_utc("2025-03-14 09:30:00").unwrap(),
            Some(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_month_first_wins_when_ambiguous() {
        let parsed = parse_datetime_utc("02-03-2025").unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 2, 3, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_parse_empty_is_absent() {
        assert_eq!(parse_datetime_utc("").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_unknown_layout() {
        let err = parse_datetime_utc("2025/03/14").unwrap_err();
        assert_eq!(
            err,
            TimeError::Format {
                value: "2025/03/14".to_string()
            }
        );

        let message = err.to_string();
        assert!(message.contains("2025/03/14"));
        for layout in ["YYYY-MM-DD HH:MM:SS", "YYYY-MM-DD", "MM-DD-YYYY", "DD-MM-YYYY"] {
            assert!(message.contains(layout), "missing {} in {}", layout, message);
        }
    }

    #[test]
    fn test_parse_normalizes_to_utc() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let parsed = parse_datetime("2025-03-14 09:30:00", &plus_two).unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 3, 14, 7, 30, 0).unwrap()));

        // Date-only values are local midnight
        let parsed = parse_datetime("2025-03-14", &plus_two).unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 3, 13, 22, 0, 0).unwrap()));
    }

    #[test]
    fn test_parse_dst_gap_moves_forward() {
        // 02:30 does not exist in Berlin on 2025-03-30; it reads as 03:30 CEST
        let parsed = parse_datetime("2025-03-30 02:30:00", &Berlin).unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 3, 30, 1, 30, 0).unwrap()));
    }

    #[test]
    fn test_parse_date_on_midnight_transition() {
        // Santiago skips 00:00-01:00 on 2025-09-07, so the day starts at 01:00 -03
        let parsed = parse_datetime("2025-09-07", &Santiago).unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 9, 7, 4, 0, 0).unwrap()));
    }

    #[test]
    fn test_parse_rejects_short_fields() {
        for text in ["25-03-14", "2025-3-14", "3-14-2025", "2025-03-14 9:30:00", "2025-03-14 09:30", " 2025-03-14"] {
            assert_eq!(
                parse_datetime_utc(text),
                Err(TimeError::Format {
                    value: text.to_string()
                }),
                "accepted {}",
                text
            );
        }
        assert!(parse_date("2025-3-14").is_err());
    }

    #[test]
    fn test_parse_dst_fold_takes_earlier_instant() {
        let parsed = parse_datetime("2025-10-26 02:30:00", &Berlin).unwrap();
        // 02:30 CEST, before the clocks go back
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 10, 26, 0, 30, 0).unwrap()));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-12-25").unwrap(), NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
        assert_eq!(parse_date("12-25-2025").unwrap(), NaiveDate::from_ymd_opt(2025, 12, 25).unwrap());
        assert!(parse_date("2025-12-25 10:00:00").is_err());
    }

    #[test]
    fn test_format_display() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 14, 7, 30, 0).unwrap();
        assert_eq!(format_display(Some(instant), &Utc), "Fri 2025-03-14 07:30:00");
        assert_eq!(format_display(Some(instant), &Berlin), "Fri 2025-03-14 08:30:00");
        assert_eq!(format_display(None, &Utc), "N/A");
    }

    #[test]
    fn test_later_and_earlier() {
        let a = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();

        assert_eq!(later(a, b), b);
        assert_eq!(later(b, a), b);
        assert_eq!(earlier(a, b), a);
        assert_eq!(earlier(b, a), a);
        assert_eq!(later(a, a), a);
        assert!(later(a, b) >= earlier(a, b));
    }

    #[test]
    fn test_intersection() {
        let at = |hour| Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap();

        assert_eq!(intersection(at(8), at(12), at(10), at(14)), Some((at(10), at(12))));
        assert_eq!(intersection(at(10), at(11), at(8), at(14)), Some((at(10), at(11))));
        // Touching intervals do not intersect
        assert_eq!(intersection(at(8), at(10), at(10), at(12)), None);
        assert_eq!(intersection(at(8), at(9), at(10), at(12)), None);
    }

    #[test]
    fn test_overlap() {
        let at = |hour| Utc.with_ymd_and_hms(2025, 3, 14, hour, 0, 0).unwrap();

        assert_eq!(overlap(at(8), at(12), at(10), at(14)), chrono::Duration::hours(2));
        assert_eq!(overlap(at(8), at(9), at(10), at(14)), chrono::Duration::zero());
    }
}
