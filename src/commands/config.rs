use serde::Serialize;

use crate::api::ProfilesClient;
use crate::cli::ConfigCommand;
use crate::config::{self, Settings};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct ConfigView {
    settings_file: String,
    api_base_url: String,
    effective_api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_url_error: Option<String>,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            let (effective_api_url, api_url_error) = match ctx.client() {
                Ok(client) => (client.base_url().to_string(), None),
                Err(err) => (ctx.api_url.clone(), Some(err.to_string())),
            };
            let view = ConfigView {
                settings_file: ctx.paths.settings_file().display().to_string(),
                api_base_url: ctx.settings.api_base_url().to_string(),
                effective_api_url,
                api_url_error,
            };
            let mut text = format!(
                "settings: {}\napi url: {} (effective: {})",
                view.settings_file, view.api_base_url, view.effective_api_url
            );
            if let Some(err) = &view.api_url_error {
                text.push_str(&format!("\nwarning: {err}"));
            }
            ctx.output.emit(&text, &view)
        }
        ConfigCommand::SetUrl(args) => {
            let client = ProfilesClient::new(args.url.trim())?;
            let settings = Settings {
                api_base_url: Some(client.base_url().to_string()),
            };
            config::save_settings(&ctx.paths, &settings)?;

            let text = format!("api url set to {}", client.base_url());
            ctx.output.emit(&text, &settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::cli::SetUrlArgs;
    use crate::config::AppPaths;
    use crate::output::Output;
    use crate::view::RowOptions;

    fn scratch_paths(label: &str) -> AppPaths {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("crawlctl-{label}-{nanos}"));
        AppPaths::at(dir).unwrap()
    }

    #[test]
    fn set_url_replaces_unusable_stored_url() {
        let paths = scratch_paths("bad-url");
        std::fs::write(paths.settings_file(), r#"{"api_base_url":"not a url"}"#).unwrap();

        let output = Output::new(true, false);
        let ctx = AppContext::with_paths(paths.clone(), None, output, RowOptions::default(), 0)
            .expect("a bad stored url must not block startup");
        assert!(ctx.client().is_err());
        assert!(run(&ctx, ConfigCommand::Show).is_ok());

        run(
            &ctx,
            ConfigCommand::SetUrl(SetUrlArgs {
                url: " http://127.0.0.1:9000 ".to_string(),
            }),
        )
        .unwrap();

        let stored = config::load_settings(&paths).unwrap();
        assert_eq!(stored.api_base_url.as_deref(), Some("http://127.0.0.1:9000/"));
        let _ = std::fs::remove_dir_all(paths.config_dir());
    }
}
