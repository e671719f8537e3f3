pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(&paths.settings_file())
}

pub fn save_settings(paths: &AppPaths, settings: &Settings) -> AppResult<()> {
    settings::save(&paths.settings_file(), settings)
}

/// The backend base URL: an explicit override (flag or environment) wins
/// over the settings file, which wins over the built-in default.
pub fn resolve_api_url(requested: Option<&str>, settings: &Settings) -> String {
    requested
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| settings.api_base_url())
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn scratch_paths(label: &str) -> AppPaths {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("crawlctl-{label}-{nanos}"));
        AppPaths::at(dir).unwrap()
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let paths = scratch_paths("missing");
        let settings = load_settings(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn settings_round_trip_through_file() {
        let paths = scratch_paths("roundtrip");
        let settings = Settings {
            api_base_url: Some("https://crawler.example.com/api/".to_string()),
        };

        save_settings(&paths, &settings).unwrap();

        assert_eq!(load_settings(&paths).unwrap(), settings);
        let _ = std::fs::remove_dir_all(paths.config_dir());
    }

    #[test]
    fn override_beats_settings_beats_default() {
        let settings = Settings {
            api_base_url: Some("http://from-file:8000".to_string()),
        };

        assert_eq!(
            resolve_api_url(Some("http://from-flag:9000"), &settings),
            "http://from-flag:9000"
        );
        assert_eq!(resolve_api_url(Some("  "), &settings), "http://from-file:8000");
        assert_eq!(
            resolve_api_url(None, &Settings::default()),
            "http://127.0.0.1:8000"
        );
    }
}
