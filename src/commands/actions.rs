use crate::cli::{NameArgs, ToggleArgs};
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn delete(ctx: &AppContext, args: NameArgs) -> AppResult<()> {
    let view = ctx.view()?;
    let outcome = view.delete(&args.name).await?;
    super::finish(ctx, view, outcome)
}

pub async fn toggle(ctx: &AppContext, args: ToggleArgs) -> AppResult<()> {
    let view = ctx.view()?;
    let outcome = view.toggle_active(&args.name, args.current).await?;
    super::finish(ctx, view, outcome)
}

pub async fn crawl(ctx: &AppContext, args: NameArgs) -> AppResult<()> {
    let view = ctx.view()?;
    let outcome = view.crawl(&args.name).await?;
    super::finish(ctx, view, outcome)
}

pub async fn analyze(ctx: &AppContext, args: NameArgs) -> AppResult<()> {
    let view = ctx.view()?;
    let outcome = view.analyze(&args.name).await?;
    super::finish(ctx, view, outcome)
}
