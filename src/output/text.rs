use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_block(block: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", block.trim_end_matches('\n'))?;
    Ok(())
}
