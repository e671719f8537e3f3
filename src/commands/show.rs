use crate::api::Profile;
use crate::cli::NameArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::view::row::{IDLE, NOT_AVAILABLE, active_label};

pub async fn run(ctx: &AppContext, args: NameArgs) -> AppResult<()> {
    let view = ctx.view()?;
    let profile = view.show(&args.name).await?;
    ctx.output.emit(&summary_line(&profile), &profile)
}

fn summary_line(profile: &Profile) -> String {
    format!(
        "{} | {} | {} | {} | {} | {} | {}",
        profile.name,
        profile.base_url,
        profile.language,
        profile.crawling_strategy,
        profile.crawling_state().unwrap_or(IDLE),
        profile.last_crawling().unwrap_or(NOT_AVAILABLE),
        active_label(profile.active()),
    )
}
