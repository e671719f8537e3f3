use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;
use crate::output::Output;
use crate::view::RowOptions;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        api_url,
        json,
        html,
        show_active,
        verbose,
        command,
    } = cli;

    logging::init(verbose)?;
    let output = Output::new(json, html);
    let row_options = RowOptions {
        show_toggle: show_active,
    };
    let ctx = AppContext::bootstrap(api_url, output, row_options, verbose)?;

    match command {
        Command::List => commands::list::run(&ctx).await,
        Command::Show(args) => commands::show::run(&ctx, args).await,
        Command::Create(args) => commands::create::run(&ctx, args).await,
        Command::Update(args) => commands::update::run(&ctx, args).await,
        Command::Delete(args) => commands::actions::delete(&ctx, args).await,
        Command::Toggle(args) => commands::actions::toggle(&ctx, args).await,
        Command::Crawl(args) => commands::actions::crawl(&ctx, args).await,
        Command::Analyze(args) => commands::actions::analyze(&ctx, args).await,
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
