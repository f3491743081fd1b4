#[cfg(test)]
mod tests {
    use srrview::libs::duration::{format_minutes, format_seconds, parse_duration, parse_minutes, try_parse_duration};

    #[test]
    fn test_parse_duration_basic() {
        assert_eq!(parse_duration(Some("00:10:00")), 600);
        assert_eq!(parse_duration(Some("01:01:01")), 3661);
        assert_eq!(parse_duration(Some("1:2:3")), 3723);
    }

    #[test]
    fn test_parse_duration_hours_past_a_day() {
        assert_eq!(parse_duration(Some("25:00:00")), 90000);
        assert_eq!(parse_duration(Some("100:00:00")), 360000);
    }

    #[test]
    fn test_parse_duration_trims_whitespace() {
        assert_eq!(parse_duration(Some("  00:05:00 ")), 300);
    }

    #[test]
    fn test_parse_duration_missing_or_malformed_is_zero() {
        assert_eq!(parse_duration(None), 0);
        assert_eq!(parse_duration(Some("")), 0);
        assert_eq!(parse_duration(Some("   ")), 0);
        assert_eq!(parse_duration(Some("00:10")), 0);
        assert_eq!(parse_duration(Some("00:10:00:00")), 0);
        assert_eq!(parse_duration(Some("ab:cd:ef")), 0);
        assert_eq!(parse_duration(Some("-1:00:00")), 0);
        assert_eq!(parse_duration(Some("1.5:00:00")), 0);
        assert_eq!(parse_duration(Some("9999999999999999:00:00")), 0);
        assert_eq!(parse_duration(Some("00:9223372036854775807:00")), 0);
        assert_eq!(try_parse_duration(Some("9999999999999999:00:00")), None);
    }

    #[test]
    fn test_try_parse_duration_distinguishes_missing_from_zero() {
        assert_eq!(try_parse_duration(Some("00:00:00")), Some(0));
        assert_eq!(try_parse_duration(Some("garbage")), None);
        assert_eq!(try_parse_duration(None), None);
    }

    #[test]
    fn test_parse_minutes_truncates() {
        assert_eq!(parse_minutes(Some("00:10:59")), 10);
        assert_eq!(parse_minutes(Some("01:30:00")), 90);
        assert_eq!(parse_minutes(Some("bad")), 0);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "00:00:00");
        assert_eq!(format_seconds(3661.0), "01:01:01");
        assert_eq!(format_seconds(90000.0), "25:00:00");
    }

    #[test]
    fn test_format_seconds_truncates_fractions() {
        assert_eq!(format_seconds(59.9), "00:00:59");
        assert_eq!(format_seconds(450.5), "00:07:30");
    }

    #[test]
    fn test_format_seconds_degenerate_inputs() {
        assert_eq!(format_seconds(f64::NAN), "00:00:00");
        assert_eq!(format_seconds(f64::INFINITY), "00:00:00");
        assert_eq!(format_seconds(-5.0), "00:00:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0.0), "00:00:00");
        assert_eq!(format_minutes(90.0), "01:30:00");
        assert_eq!(format_minutes(7.5), "00:07:00");
        assert_eq!(format_minutes(1500.0), "25:00:00");
    }

    #[test]
    fn test_format_then_parse_keeps_whole_seconds() {
        for seconds in [0_i64, 59, 60, 3599, 3600, 86399, 90061] {
            let text = format_seconds(seconds as f64);
            assert_eq!(parse_duration(Some(&text)), seconds, "{}", text);
        }
    }
}
