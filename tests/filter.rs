#[cfg(test)]
mod tests {
    use srrview::libs::filter::{apply_filters, options, FilterField, FilterParseError, FilterValue, Predicate, ALL};
    use srrview::libs::record::{RecordStatus, ResponseRecord};

    fn record(case: &str, service: &str, month: &str, status: RecordStatus) -> ResponseRecord {
        ResponseRecord {
            month: Some(month.to_string()),
            working_hours: Some("No".to_string()),
            status,
            ..ResponseRecord::new(case, service)
        }
    }

    fn sample() -> Vec<ResponseRecord> {
        vec![
            record("1", "Payroll", "March", RecordStatus::InQueue),
            record("2", "Benefits", "March", RecordStatus::InProgress),
            record("3", "Payroll", "April", RecordStatus::Other("Closed".to_string())),
            record("4", "Payroll", "March", RecordStatus::Other("Closed".to_string())),
        ]
    }

    fn ids(records: &[ResponseRecord]) -> Vec<&str> {
        records.iter().map(|record| record.case_id.as_str()).collect()
    }

    #[test]
    fn test_filter_value_sentinel() {
        assert_eq!(FilterValue::from(ALL), FilterValue::All);
        assert_eq!(FilterValue::from("Payroll"), FilterValue::Exact("Payroll".to_string()));
        assert!(Predicate::new(FilterField::Service, ALL).is_unrestricted());
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let records = sample();
        assert_eq!(apply_filters(&records, &[]), records);
    }

    #[test]
    fn test_all_sentinel_is_identity() {
        let records = sample();
        let predicates = [
            Predicate::new(FilterField::Service, ALL),
            Predicate::new(FilterField::Month, ALL),
        ];
        assert_eq!(apply_filters(&records, &predicates), records);
    }

    #[test]
    fn test_single_predicate() {
        let filtered = apply_filters(&sample(), &[Predicate::new(FilterField::Service, "Payroll")]);
        assert_eq!(ids(&filtered), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let predicates = [
            Predicate::new(FilterField::Service, "Payroll"),
            Predicate::new(FilterField::Month, "March"),
        ];
        assert_eq!(ids(&apply_filters(&sample(), &predicates)), vec!["1", "4"]);
    }

    #[test]
    fn test_sentinel_mixed_with_restriction() {
        let with_all = [
            Predicate::new(FilterField::Service, "Payroll"),
            Predicate::new(FilterField::Month, ALL),
        ];
        let without = [Predicate::new(FilterField::Service, "Payroll")];
        assert_eq!(apply_filters(&sample(), &with_all), apply_filters(&sample(), &without));
    }

    #[test]
    fn test_status_filter_uses_display_text() {
        let filtered = apply_filters(&sample(), &[Predicate::new(FilterField::Status, "In Progress")]);
        assert_eq!(ids(&filtered), vec!["2"]);

        let closed = apply_filters(&sample(), &[Predicate::new(FilterField::Status, "Closed")]);
        assert_eq!(ids(&closed), vec!["3", "4"]);
    }

    #[test]
    fn test_missing_field_never_matches() {
        let mut records = sample();
        records[0].month = None;

        let filtered = apply_filters(&records, &[Predicate::new(FilterField::Month, "March")]);
        assert_eq!(ids(&filtered), vec!["2", "4"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let filtered = apply_filters(&sample(), &[Predicate::new(FilterField::Service, "Travel")]);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filtering_leaves_input_untouched() {
        let records = sample();
        let before = records.clone();
        let _ = apply_filters(&records, &[Predicate::new(FilterField::Service, "Benefits")]);
        assert_eq!(records, before);
    }

    #[test]
    fn test_options_sentinel_first_then_first_seen_order() {
        let values = options(&sample(), FilterField::Service);
        assert_eq!(values, vec![ALL, "Payroll", "Benefits"]);

        let months = options(&sample(), FilterField::Month);
        assert_eq!(months, vec![ALL, "March", "April"]);
    }

    #[test]
    fn test_options_of_empty_set() {
        assert_eq!(options(&[], FilterField::WorkingHours), vec![ALL]);
    }

    #[test]
    fn test_field_names() {
        assert_eq!(FilterField::WorkingHours.name(), "Working Hours?");
        assert_eq!(FilterField::Service.name(), "Service");
    }

    #[test]
    fn test_parse_predicate() {
        assert_eq!(
            Predicate::parse("service=Payroll").unwrap(),
            Predicate::new(FilterField::Service, "Payroll")
        );
        assert_eq!(
            Predicate::parse("Working Hours? = No").unwrap(),
            Predicate::new(FilterField::WorkingHours, "No")
        );
        assert_eq!(
            Predicate::parse("working-hours=No").unwrap(),
            Predicate::new(FilterField::WorkingHours, "No")
        );
        assert!(Predicate::parse("month=All").unwrap().is_unrestricted());
    }

    #[test]
    fn test_parse_predicate_errors() {
        assert_eq!(
            Predicate::parse("Payroll"),
            Err(FilterParseError::MissingSeparator("Payroll".to_string()))
        );
        assert_eq!(
            Predicate::parse("team=Blue"),
            Err(FilterParseError::UnknownField("team".to_string()))
        );
    }
}
