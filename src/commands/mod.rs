pub mod actions;
pub mod config;
pub mod create;
pub mod list;
pub mod show;
pub mod update;

use log::info;

use crate::api::ProfilesClient;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::Listing;
use crate::view::{ProfileListView, RefreshOutcome};

/// Prints whatever the view's last applied refresh painted.
pub(crate) fn finish(
    ctx: &AppContext,
    view: ProfileListView<&ProfilesClient, Listing>,
    outcome: RefreshOutcome,
) -> AppResult<()> {
    info!("refresh outcome: {outcome:?}");
    ctx.output.show(&view.into_target())
}
