#[cfg(test)]
mod tests {
    use srrview::libs::profile::{profile, ColumnType};
    use srrview::libs::record::{Field, ResponseRecord};

    fn sample() -> Vec<ResponseRecord> {
        vec![
            ResponseRecord {
                time_to_on_it: Some("00:10:00".to_string()),
                survey_score: Some(5.0),
                ..ResponseRecord::new("1", "Payroll")
            },
            ResponseRecord {
                time_to_on_it: Some("00:20:00".to_string()),
                survey_score: Some(3.0),
                ..ResponseRecord::new("2", "Payroll")
            },
            ResponseRecord {
                time_to_on_it: Some("broken".to_string()),
                ..ResponseRecord::new("3", "Benefits")
            },
        ]
    }

    #[test]
    fn test_profile_shape() {
        let profile = profile(&sample());
        assert_eq!(profile.rows, 3);
        assert_eq!(profile.columns, Field::ALL.len());
        assert_eq!(profile.column_profiles.len(), Field::ALL.len());
    }

    #[test]
    fn test_column_counts() {
        let profile = profile(&sample());

        let service = profile.column_profiles.iter().find(|column| column.name == "Service").unwrap();
        assert_eq!(service.non_null, 3);
        assert_eq!(service.nulls, 0);
        assert_eq!(service.unique, 2);
        assert_eq!(service.duplicates, 1);

        let survey = profile.column_profiles.iter().find(|column| column.name == "Survey").unwrap();
        assert_eq!(survey.non_null, 2);
        assert_eq!(survey.nulls, 1);
        assert_eq!(survey.duplicates, 0);
    }

    #[test]
    fn test_numeric_summary_skips_malformed_durations() {
        let profile = profile(&sample());

        let on_it = &profile.numeric[0];
        assert_eq!(on_it.count, 2);
        assert_eq!(on_it.mean, 900.0);
        assert_eq!(on_it.min, 600.0);
        assert_eq!(on_it.max, 1200.0);

        let survey = profile.numeric.iter().find(|summary| summary.name == "Survey").unwrap();
        assert_eq!(survey.mean, 4.0);
    }

    #[test]
    fn test_profile_of_empty_set() {
        let profile = profile(&[]);
        assert_eq!(profile.rows, 0);
        assert!(profile.numeric.iter().all(|summary| summary.count == 0 && summary.mean.is_nan()));

        let numeric = profile.numeric_table();
        assert_eq!(numeric.cell(0, "Mean"), Some("n/a"));
    }

    #[test]
    fn test_profile_tables() {
        let tables = profile(&sample()).tables();
        let names: Vec<&str> = tables.iter().map(|table| table.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["profile_shape", "profile_head", "profile_tail", "profile_columns", "profile_numeric"]
        );
        assert_eq!(tables[0].rows, vec![vec!["3".to_string(), Field::ALL.len().to_string()]]);
        assert_eq!(tables[3].len(), Field::ALL.len());
    }

    #[test]
    fn test_head_and_tail_previews() {
        let records: Vec<ResponseRecord> = (1..=7).map(|case| ResponseRecord::new(&case.to_string(), "Payroll")).collect();
        let profile = profile(&records);

        let head: Vec<&str> = (0..profile.head.len()).filter_map(|row| profile.head.cell(row, "Case #")).collect();
        let tail: Vec<&str> = (0..profile.tail.len()).filter_map(|row| profile.tail.cell(row, "Case #")).collect();
        assert_eq!(head, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(tail, vec!["3", "4", "5", "6", "7"]);
        assert_eq!(profile.head.cell(0, "TimeTo: On It (Raw)"), Some(""));

        // Fewer records than the preview size show every record once per table.
        let short = srrview::libs::profile::profile(&sample());
        assert_eq!(short.head.len(), 3);
        assert_eq!(short.tail.len(), 3);
        assert!(srrview::libs::profile::profile(&[]).head.is_empty());
    }

    #[test]
    fn test_column_types() {
        let profile = profile(&sample());
        let kind = |name: &str| profile.column_profiles.iter().find(|column| column.name == name).map(|column| column.kind);

        assert_eq!(kind("Service"), Some(ColumnType::Text));
        assert_eq!(kind("TimeTo: On It"), Some(ColumnType::Duration));
        assert_eq!(kind("Date Created"), Some(ColumnType::DateTime));
        assert_eq!(kind("Hour_Created"), Some(ColumnType::Integer));
        assert_eq!(kind("Survey"), Some(ColumnType::Float));
        assert_eq!(profile.columns_table().cell(0, "Type"), Some("text"));
    }
}
