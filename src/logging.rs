use std::io::IsTerminal;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use crate::error::AppResult;

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Redirected stderr gets plain text; escapes only go to a terminal.
pub fn color_for(stderr_is_terminal: bool) -> ColorChoice {
    if stderr_is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Logs go to stderr so stdout stays parseable in `--json` and `--html` mode.
pub fn init(verbose: u8) -> AppResult<()> {
    TermLogger::init(
        level_for(verbose),
        ConfigBuilder::new()
            .set_time_format_rfc3339()
            .add_filter_allow_str("crawlctl")
            .build(),
        TerminalMode::Stderr,
        color_for(std::io::stderr().is_terminal()),
    )?;
    Ok(())
}
