use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let view = ctx.view()?;
    let outcome = view.refresh().await?;
    super::finish(ctx, view, outcome)
}
