use std::sync::OnceLock;

use log::debug;

use crate::api::ProfilesClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::{Listing, Output};
use crate::view::{ProfileListView, RowOptions};

#[derive(Debug)]
pub struct AppContext {
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub api_url: String,
    pub output: Output,
    pub row_options: RowOptions,
    client: OnceLock<ProfilesClient>,
}

impl AppContext {
    pub fn bootstrap(
        api_url: Option<String>,
        output: Output,
        row_options: RowOptions,
        verbose: u8,
    ) -> AppResult<Self> {
        Self::with_paths(AppPaths::discover()?, api_url, output, row_options, verbose)
    }

    pub fn with_paths(
        paths: AppPaths,
        api_url: Option<String>,
        output: Output,
        row_options: RowOptions,
        verbose: u8,
    ) -> AppResult<Self> {
        let settings = config::load_settings(&paths)?;
        let api_url = config::resolve_api_url(api_url.as_deref(), &settings);

        Ok(Self {
            verbose,
            paths,
            settings,
            api_url,
            output,
            row_options,
            client: OnceLock::new(),
        })
    }

    /// The backend client, built on first use. A bad URL only fails the
    /// commands that talk to the backend, so `config set-url` can repair it.
    pub fn client(&self) -> AppResult<&ProfilesClient> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }

        debug!("using profile api at {}", self.api_url);
        let client = ProfilesClient::new(&self.api_url)?;
        Ok(self.client.get_or_init(|| client))
    }

    /// A list view over the shared client, painting into the target for the
    /// selected output mode.
    pub fn view(&self) -> AppResult<ProfileListView<&ProfilesClient, Listing>> {
        Ok(ProfileListView::new(
            self.client()?,
            self.output.listing(self.row_options),
        ))
    }
}
