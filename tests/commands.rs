#[cfg(test)]
mod tests {
    use srrview::commands::report::{selected_views, FilterArgs};
    use srrview::commands::watch::is_refresh_command;
    use srrview::libs::dashboard::ViewKind;
    use srrview::libs::filter::{FilterField, Predicate, ALL};
    use srrview::libs::table::Table;
    use srrview::libs::view::View;

    fn filters() -> FilterArgs {
        FilterArgs {
            service: ALL.to_string(),
            month: ALL.to_string(),
            status: ALL.to_string(),
            working_hours: ALL.to_string(),
            extra: Vec::new(),
            all_hours: false,
            policy: None,
            worksheet: None,
        }
    }

    #[test]
    fn test_refresh_command() {
        assert!(is_refresh_command("r"));
        assert!(is_refresh_command(" R \n"));
        assert!(!is_refresh_command(""));
        assert!(!is_refresh_command("refresh"));
    }

    #[test]
    fn test_selected_views_default_to_all() {
        assert_eq!(selected_views(&[]), ViewKind::ALL.to_vec());
        assert_eq!(selected_views(&[ViewKind::SmeSummary]), vec![ViewKind::SmeSummary]);
    }

    #[test]
    fn test_unrestricted_filters() {
        let args = filters();

        assert_eq!(args.describe(), ALL);
        assert!(args.predicates().iter().all(|predicate| predicate.is_unrestricted()));
        assert!(args.load_options().off_hours_only);
    }

    #[test]
    fn test_restricting_filters() {
        let args = FilterArgs {
            service: "Payroll".to_string(),
            status: "In Queue".to_string(),
            all_hours: true,
            ..filters()
        };

        assert_eq!(args.describe(), "Service=Payroll, Status=In Queue");
        let restricting: Vec<FilterField> = args
            .predicates()
            .iter()
            .filter(|predicate| !predicate.is_unrestricted())
            .map(|predicate| predicate.field)
            .collect();
        assert_eq!(restricting, vec![FilterField::Service, FilterField::Status]);
        assert!(!args.load_options().off_hours_only);
    }

    #[test]
    fn test_extra_filters_are_appended() {
        let args = FilterArgs {
            extra: vec![Predicate::parse("month=March").unwrap()],
            ..filters()
        };

        let predicates = args.predicates();
        assert_eq!(predicates.len(), 5);
        assert_eq!(predicates[4], Predicate::new(FilterField::Month, "March"));
        assert_eq!(args.describe(), "Month=March");
    }

    #[test]
    fn test_view_build() {
        let mut table = Table::new("Interaction Count", "interaction_count", &["Service", "Count"]);
        table.push_row(vec!["Payroll".to_string(), "2".to_string()]);

        let pretty = View::build(&table);
        assert_eq!(pretty.len(), 1);
        assert!(pretty.to_string().contains("Payroll"));
    }
}
