#[cfg(test)]
mod tests {
    use srrview::api::{FileConfig, SheetsConfig, Source};
    use srrview::libs::aggregate::MeanPolicy;
    use srrview::libs::config::{Config, ReportConfig, CONFIG_FILE_NAME, DEFAULT_WORKSHEET, ENV_CSV_PATH, ENV_SOURCE_URL};
    use srrview::libs::data_storage::DataStorage;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file share process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(ENV_SOURCE_URL);
            std::env::remove_var(ENV_CSV_PATH);
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }

        fn teardown(self) {
            std::env::remove_var(ENV_SOURCE_URL);
            std::env::remove_var(ENV_CSV_PATH);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.sheets.is_none());
        assert!(config.file.is_none());
        assert!(config.report.is_none());

        let report = config.report_settings();
        assert_eq!(report.worksheet, DEFAULT_WORKSHEET);
        assert_eq!(report.cache_ttl(), Duration::from_secs(120));
        assert_eq!(report.refresh_interval(), Duration::from_secs(120));
        assert_eq!(report.mean_policy, MeanPolicy::ZeroFill);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.sheets.is_none());
        assert!(config.file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(_ctx: &mut ConfigTestContext) {
        let config = Config {
            sheets: Some(SheetsConfig {
                url: "https://sheets.example.com/export?format=csv".to_string(),
            }),
            file: None,
            report: Some(ReportConfig {
                worksheet: "Responses".to_string(),
                cache_ttl_secs: 30,
                refresh_interval_secs: 60,
                mean_policy: MeanPolicy::ExcludeMissing,
                export_dir: Some(PathBuf::from("/tmp/exports")),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.sheets, config.sheets);
        assert_eq!(loaded.report, config.report);
        assert!(loaded.file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_mean_policy_serialized_kebab_case(_ctx: &mut ConfigTestContext) {
        let report = ReportConfig {
            mean_policy: MeanPolicy::ExcludeMissing,
            ..ReportConfig::default()
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"exclude-missing\""));
        assert!(!json.contains("export_dir"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_source(_ctx: &mut ConfigTestContext) {
        Config {
            sheets: Some(SheetsConfig {
                url: "https://configured.example.com".to_string(),
            }),
            ..Config::default()
        }
        .save()
        .unwrap();

        std::env::set_var(ENV_SOURCE_URL, "https://override.example.com");
        let config = Config::read().unwrap();
        assert_eq!(config.sheets.unwrap().url, "https://override.example.com");

        std::env::set_var(ENV_CSV_PATH, "/data/responses.csv");
        let config = Config::read().unwrap();
        assert_eq!(config.file.unwrap().path, PathBuf::from("/data/responses.csv"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_report_section_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "report": { "export_dir": "/srv/exports", "cache_ttl_secs": 30 } }"#).unwrap();

        let report = Config::read().unwrap().report_settings();
        assert_eq!(report.export_dir, Some(PathBuf::from("/srv/exports")));
        assert_eq!(report.cache_ttl_secs, 30);
        assert_eq!(report.worksheet, DEFAULT_WORKSHEET);
        assert_eq!(report.refresh_interval_secs, 120);
        assert_eq!(report.mean_policy, MeanPolicy::ZeroFill);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());
        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_source_selection(_ctx: &mut ConfigTestContext) {
        assert!(Source::from_config(&Config::default()).is_err());

        let sheets_only = Config {
            sheets: Some(SheetsConfig {
                url: "https://sheets.example.com".to_string(),
            }),
            ..Config::default()
        };
        assert!(matches!(Source::from_config(&sheets_only), Ok(Source::Sheets(_))));

        let both = Config {
            file: Some(FileConfig {
                path: PathBuf::from("responses.csv"),
            }),
            ..sheets_only
        };
        assert!(matches!(Source::from_config(&both), Ok(Source::File(_))));
    }
}
