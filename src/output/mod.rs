pub mod json;
pub mod listing;
pub mod text;

pub use listing::{JsonRows, Listing};

use serde::Serialize;

use crate::error::AppResult;
use crate::view::RowOptions;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
    Html,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool, html: bool) -> Self {
        let mode = match (json, html) {
            (true, _) => OutputMode::Json,
            (false, true) => OutputMode::Html,
            (false, false) => OutputMode::Text,
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// A fresh render target matching the output mode.
    pub fn listing(&self, options: RowOptions) -> Listing {
        match self.mode {
            OutputMode::Text => Listing::text(options),
            OutputMode::Json => Listing::json(),
            OutputMode::Html => Listing::html(options),
        }
    }

    pub fn show(&self, listing: &Listing) -> AppResult<()> {
        match listing {
            Listing::Text(table) => text::print_block(&table.render()),
            Listing::Html(table) => text::print_block(&table.document()),
            Listing::Json(rows) => json::print(rows.profiles()),
        }
    }

    /// Single-record output. HTML mode has no page for these and prints text.
    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text | OutputMode::Html => text::print_block(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }
}
