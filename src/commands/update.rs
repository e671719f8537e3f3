use crate::cli::UpdateArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::view::ProfileForm;

use super::create::build_form;

pub async fn run(ctx: &AppContext, args: UpdateArgs) -> AppResult<()> {
    let (name, form) = build_update(&args)?;
    let view = ctx.view()?;
    let outcome = view.update(&name, &form).await?;
    super::finish(ctx, view, outcome)
}

/// The path addresses the same trimmed name the body carries, so a stray
/// space on the command line cannot rename the profile.
fn build_update(args: &UpdateArgs) -> AppResult<(String, ProfileForm)> {
    let form = build_form(&args.name, &args.fields)?;
    Ok((form.name.clone(), form))
}
