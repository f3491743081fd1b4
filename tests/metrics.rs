#[cfg(test)]
mod tests {
    use srrview::libs::aggregate::MeanPolicy;
    use srrview::libs::metrics::{format_mean_minutes, format_mean_seconds, format_score, overview, MetricCard, NO_DATA};
    use srrview::libs::record::ResponseRecord;

    fn record(on_it: Option<&str>, attended: Option<&str>, survey: Option<f64>) -> ResponseRecord {
        ResponseRecord {
            time_to_on_it: on_it.map(str::to_string),
            time_to_attended: attended.map(str::to_string),
            survey_score: survey,
            ..ResponseRecord::new("1", "Payroll")
        }
    }

    #[test]
    fn test_nan_mean_is_no_data_not_zero() {
        assert_eq!(format_mean_seconds(f64::NAN), NO_DATA);
        assert_eq!(format_mean_minutes(f64::NAN), NO_DATA);
        assert_eq!(format_score(f64::NAN), NO_DATA);
        assert_ne!(format_mean_seconds(f64::NAN), format_mean_seconds(0.0));
    }

    #[test]
    fn test_defined_means_format_as_durations() {
        assert_eq!(format_mean_seconds(0.0), "00:00:00");
        assert_eq!(format_mean_seconds(900.0), "00:15:00");
        assert_eq!(format_mean_minutes(90.0), "01:30:00");
        assert_eq!(format_score(4.256), "4.26");
    }

    #[test]
    fn test_overview_counts_and_means() {
        let records = vec![
            record(Some("00:10:00"), Some("00:30:00"), Some(5.0)),
            record(Some("00:20:00"), None, Some(3.0)),
            record(None, Some("00:10:00"), None),
        ];

        let zero_fill = overview(&records, MeanPolicy::ZeroFill);
        assert_eq!(zero_fill.interactions, 3);
        assert_eq!(zero_fill.answered_surveys, 2);
        assert_eq!(zero_fill.survey_avg, 4.0);
        assert_eq!(zero_fill.avg_on_it_secs, 600.0);
        assert_eq!(zero_fill.avg_attended_secs, 800.0);

        let exclude = overview(&records, MeanPolicy::ExcludeMissing);
        assert_eq!(exclude.avg_on_it_secs, 900.0);
        assert_eq!(exclude.avg_attended_secs, 1200.0);
    }

    #[test]
    fn test_overview_cards() {
        let records = vec![record(Some("00:10:00"), Some("00:30:00"), Some(4.5))];
        let cards = overview(&records, MeanPolicy::ZeroFill).cards();

        assert_eq!(
            cards,
            vec![
                MetricCard::new("Interactions", "1".to_string()),
                MetricCard::new("Survey Avg.", "4.50".to_string()),
                MetricCard::new("Answered Surveys", "1".to_string()),
                MetricCard::new("Overall Avg. TimeTo: On It", "00:10:00".to_string()),
                MetricCard::new("Overall Avg. TimeTo: Attended", "00:30:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_overview_of_empty_set() {
        let cards = overview(&[], MeanPolicy::ZeroFill).cards();
        let values: Vec<&str> = cards.iter().map(|card| card.value.as_str()).collect();
        assert_eq!(values, vec!["0", NO_DATA, "0", NO_DATA, NO_DATA]);
    }
}
