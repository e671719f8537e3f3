pub mod form;
pub mod html;
pub mod row;
pub mod text;

pub use form::ProfileForm;
pub use html::HtmlTable;
pub use row::{ProfileRow, RowAction, RowOptions};
pub use text::TextTable;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};

use crate::api::{Ack, Profile, ProfileApi};
use crate::error::AppResult;

/// Where a refresh paints its rows.
pub trait RenderTarget {
    fn clear(&mut self);
    fn append(&mut self, profile: &Profile);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { rows: usize },
    /// A refresh issued later was painted first; this result was dropped.
    Stale,
}

#[derive(Debug)]
struct Painted<T> {
    target: T,
    ticket: u64,
}

/// The profile list: fetches, renders into an injected target, and runs
/// every mutation as request-then-refresh.
///
/// Methods take `&self` so refreshes may overlap. Each refresh takes a
/// ticket before fetching and only paints if no later ticket has painted.
#[derive(Debug)]
pub struct ProfileListView<A, T> {
    api: A,
    issued: AtomicU64,
    painted: Mutex<Painted<T>>,
}

impl<A: ProfileApi, T: RenderTarget> ProfileListView<A, T> {
    pub fn new(api: A, target: T) -> Self {
        Self {
            api,
            issued: AtomicU64::new(0),
            painted: Mutex::new(Painted { target, ticket: 0 }),
        }
    }

    pub fn with_target<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.lock().target)
    }

    pub fn into_target(self) -> T {
        self.painted
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .target
    }

    pub async fn refresh(&self) -> AppResult<RefreshOutcome> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let profiles = self.api.list_profiles().await?;

        let mut painted = self.lock();
        if ticket < painted.ticket {
            debug!(
                "dropping refresh #{ticket}: #{} already painted",
                painted.ticket
            );
            return Ok(RefreshOutcome::Stale);
        }

        painted.ticket = ticket;
        painted.target.clear();
        for profile in &profiles {
            painted.target.append(profile);
        }
        debug!("refresh #{ticket} painted {} profiles", profiles.len());

        Ok(RefreshOutcome::Applied {
            rows: profiles.len(),
        })
    }

    /// Submits the creation form. The form is reset and the list refreshed
    /// whether or not the backend accepted the profile.
    pub async fn submit(&self, form: &mut ProfileForm) -> AppResult<RefreshOutcome> {
        let payload = form.to_payload();
        let ack = self.api.create_profile(&payload).await?;
        note("create", &payload.name, &ack);
        form.reset();
        self.refresh().await
    }

    pub async fn show(&self, name: &str) -> AppResult<Profile> {
        self.api.get_profile(name).await
    }

    pub async fn update(&self, name: &str, form: &ProfileForm) -> AppResult<RefreshOutcome> {
        let ack = self.api.update_profile(name, &form.to_payload()).await?;
        note("update", name, &ack);
        self.refresh().await
    }

    pub async fn delete(&self, name: &str) -> AppResult<RefreshOutcome> {
        let ack = self.api.delete_profile(name).await?;
        note("delete", name, &ack);
        self.refresh().await
    }

    pub async fn toggle_active(
        &self,
        name: &str,
        current_state: bool,
    ) -> AppResult<RefreshOutcome> {
        let ack = self.api.toggle_active(name, current_state).await?;
        note("toggle", name, &ack);
        self.refresh().await
    }

    pub async fn crawl(&self, name: &str) -> AppResult<RefreshOutcome> {
        let ack = self.api.trigger_crawl(name).await?;
        note("crawl", name, &ack);
        self.refresh().await
    }

    pub async fn analyze(&self, name: &str) -> AppResult<RefreshOutcome> {
        let ack = self.api.trigger_analysis(name).await?;
        note("analyze", name, &ack);
        self.refresh().await
    }

    fn lock(&self) -> MutexGuard<'_, Painted<T>> {
        self.painted.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn note(action: &str, name: &str, ack: &Ack) {
    let message = ack.message.as_deref().unwrap_or("no message");
    if ack.accepted() {
        debug!("{action} `{name}` accepted ({}): {message}", ack.status);
    } else {
        warn!("{action} `{name}` not accepted ({}): {message}", ack.status);
    }
}
