pub mod client;
pub mod models;
pub mod profiles;

pub use client::ProfilesClient;
pub use models::{Ack, NewProfile, Profile, ToggleActiveRequest};

use crate::error::AppResult;

/// The profile backend as seen by the view.
///
/// Reads fail on a non-success status. Mutations only fail when the request
/// could not be made at all; whatever the backend answered comes back as an
/// [`Ack`].
#[allow(async_fn_in_trait)]
pub trait ProfileApi {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>>;
    async fn get_profile(&self, name: &str) -> AppResult<Profile>;
    async fn create_profile(&self, profile: &NewProfile) -> AppResult<Ack>;
    async fn update_profile(&self, name: &str, profile: &NewProfile) -> AppResult<Ack>;
    async fn delete_profile(&self, name: &str) -> AppResult<Ack>;
    async fn toggle_active(&self, name: &str, current_state: bool) -> AppResult<Ack>;
    async fn trigger_crawl(&self, name: &str) -> AppResult<Ack>;
    async fn trigger_analysis(&self, name: &str) -> AppResult<Ack>;
}

impl<T: ProfileApi + ?Sized> ProfileApi for &T {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        (**self).list_profiles().await
    }

    async fn get_profile(&self, name: &str) -> AppResult<Profile> {
        (**self).get_profile(name).await
    }

    async fn create_profile(&self, profile: &NewProfile) -> AppResult<Ack> {
        (**self).create_profile(profile).await
    }

    async fn update_profile(&self, name: &str, profile: &NewProfile) -> AppResult<Ack> {
        (**self).update_profile(name, profile).await
    }

    async fn delete_profile(&self, name: &str) -> AppResult<Ack> {
        (**self).delete_profile(name).await
    }

    async fn toggle_active(&self, name: &str, current_state: bool) -> AppResult<Ack> {
        (**self).toggle_active(name, current_state).await
    }

    async fn trigger_crawl(&self, name: &str) -> AppResult<Ack> {
        (**self).trigger_crawl(name).await
    }

    async fn trigger_analysis(&self, name: &str) -> AppResult<Ack> {
        (**self).trigger_analysis(name).await
    }
}
