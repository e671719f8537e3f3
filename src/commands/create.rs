use crate::cli::{CreateArgs, ProfileFields};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::view::ProfileForm;

pub async fn run(ctx: &AppContext, args: CreateArgs) -> AppResult<()> {
    let mut form = build_form(&args.name, &args.fields)?;
    let view = ctx.view()?;
    let outcome = view.submit(&mut form).await?;
    super::finish(ctx, view, outcome)
}

/// Same rule as the form's `required` inputs: every field must be non-blank.
pub(crate) fn build_form(name: &str, fields: &ProfileFields) -> AppResult<ProfileForm> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput(
            "profile name must not be empty".to_string(),
        ));
    }

    ProfileForm::from_pairs([
        ("name", name),
        ("base_url", fields.base_url.trim()),
        ("language", fields.language.trim()),
        ("crawling_strategy", fields.crawling_strategy.trim()),
    ])
}
