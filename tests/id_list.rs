#[cfg(test)]
mod tests {
    use tasktime::commands::{parse_id_list, MAX_ID_RANGE};

    #[test]
    fn test_single_ids_and_ranges() {
        assert_eq!(parse_id_list("1,3-5,8").unwrap(), vec![1, 3, 4, 5, 8]);
        assert_eq!(parse_id_list("7").unwrap(), vec![7]);
        assert_eq!(parse_id_list(" 2 , 4 - 5 ").unwrap(), vec![2, 4, 5]);
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(parse_id_list("5,1,1-2,5").unwrap(), vec![1, 2, 5]);
    }

    #[test]
    fn test_empty_elements_are_skipped() {
        assert_eq!(parse_id_list("1,,2,").unwrap(), vec![1, 2]);
        assert!(parse_id_list("").unwrap().is_empty());
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        let err = parse_id_list("5-3").unwrap_err();
        assert!(err.to_string().contains("cannot be greater than end ID"));
    }

    #[test]
    fn test_oversized_range_is_rejected() {
        let err = parse_id_list("1-9999999999").unwrap_err();
        assert!(err.to_string().contains("too large"));

        let widest = format!("1-{}", 1 + MAX_ID_RANGE);
        assert_eq!(parse_id_list(&widest).unwrap().len() as i64, MAX_ID_RANGE + 1);
        assert!(parse_id_list(&format!("1-{}", 2 + MAX_ID_RANGE)).is_err());
    }

    #[test]
    fn test_malformed_elements() {
        assert!(parse_id_list("abc").unwrap_err().to_string().contains("Invalid ID 'abc'"));
        assert!(parse_id_list("1-x").unwrap_err().to_string().contains("Invalid ID range"));
        assert!(parse_id_list("1-2-3").unwrap_err().to_string().contains("Invalid ID range"));
    }
}
