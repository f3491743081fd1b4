#[cfg(test)]
mod tests {
    use srrview::api::{parse_csv, CsvFile, FileConfig, SourceError, WorksheetSource};
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    const WORKSHEET: &str = "Case #,Service,Date Created,Working Hours?\n\
                             101,Payroll,2024-03-14 22:15:00,No\n\
                             102,\"Benefits, Retiree\",2024-03-15 07:05:00,No\n\
                             103,Payroll\n";

    struct SourceTestContext {
        temp_dir: TempDir,
        path: PathBuf,
    }

    impl AsyncTestContext for SourceTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("responses.csv");
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(WORKSHEET.as_bytes()).unwrap();

            SourceTestContext { temp_dir, path }
        }
    }

    #[test]
    fn test_parse_csv_keeps_headers_and_order() {
        let rows = parse_csv(WORKSHEET.as_bytes()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["Case #"], "101");
        assert_eq!(rows[1]["Service"], "Benefits, Retiree");
        assert_eq!(rows[1]["Working Hours?"], "No");
    }

    #[test]
    fn test_parse_csv_short_rows_leave_columns_out() {
        let rows = parse_csv(WORKSHEET.as_bytes()).unwrap();

        assert_eq!(rows[2]["Service"], "Payroll");
        assert!(!rows[2].contains_key("Date Created"));
    }

    #[test]
    fn test_parse_csv_header_only() {
        let rows = parse_csv("Case #,Service\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_csv_file_source(ctx: &mut SourceTestContext) {
        let source = CsvFile::new(&FileConfig { path: ctx.path.clone() });

        // The worksheet name does not matter for a single-sheet file.
        let rows = source.fetch_rows("anything").await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["Date Created"], "2024-03-14 22:15:00");
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_missing_file_is_io_error(ctx: &mut SourceTestContext) {
        let missing = ctx.temp_dir.path().join("missing.csv");
        let source = CsvFile::new(&FileConfig { path: missing.clone() });

        match source.fetch_rows("Response and Survey Form").await {
            Err(SourceError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
