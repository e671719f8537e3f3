use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

use crate::api::Profile;
use crate::view::RenderTarget;
use crate::view::form::FIELDS;
use crate::view::row::{ProfileRow, RowAction, RowOptions, active_label};

pub const LIST_ID: &str = "profile-list";
pub const FORM_ID: &str = "profile-form";

/// Renders profiles as `<tr>` rows of the `profile-list` table body.
///
/// Every backend string goes through `html-escape` for the context it lands
/// in, and `base_url` is only turned into a link for http(s) URLs.
#[derive(Debug, Clone, Default)]
pub struct HtmlTable {
    options: RowOptions,
    rows: Vec<String>,
}

impl HtmlTable {
    pub fn new(options: RowOptions) -> Self {
        Self {
            options,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn fragment(&self) -> String {
        if self.rows.is_empty() {
            return format!(r#"<tbody id="{LIST_ID}"></tbody>"#);
        }

        let mut out = format!(r#"<tbody id="{LIST_ID}">"#);
        for row in &self.rows {
            out.push('\n');
            out.push_str(row);
        }
        out.push_str("\n</tbody>");
        out
    }

    /// A standalone snapshot page. It ships no script: the form is disabled
    /// and the row buttons only carry `data-action`/`data-profile` for a host
    /// page to bind. Mutations go through the `crawlctl` subcommands.
    pub fn document(&self) -> String {
        let mut headers = String::new();
        for title in column_titles(self.options) {
            let _ = write!(headers, "<th>{title}</th>");
        }

        let mut inputs = String::new();
        for (field, placeholder) in FIELDS {
            let _ = write!(
                inputs,
                "\n      <input class=\"form-control\" name=\"{field}\" placeholder=\"{placeholder}\" required>"
            );
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Crawling profiles</title>
  </head>
  <body>
    <h1>Crawling profiles</h1>
    <form id="{FORM_ID}">
      <fieldset disabled>{inputs}
      <button type="submit" class="btn btn-success">Add profile</button>
      </fieldset>
    </form>
    <table class="table">
      <thead><tr>{headers}</tr></thead>
      {fragment}
    </table>
  </body>
</html>
"#,
            fragment = self.fragment(),
        )
    }
}

impl RenderTarget for HtmlTable {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, profile: &Profile) {
        let row = ProfileRow::project(profile, self.options);
        self.rows.push(render_row(&row));
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

pub fn column_titles(options: RowOptions) -> Vec<&'static str> {
    let mut titles = vec![
        "Name",
        "Base URL",
        "Language",
        "Strategy",
        "State",
        "Last crawl",
    ];
    if options.show_toggle {
        titles.push("Active");
    }
    titles.push("Actions");
    titles
}

fn render_row(row: &ProfileRow) -> String {
    let mut out = String::from("<tr>");
    cell(&mut out, &encode_text(&row.name));
    cell(&mut out, &link(&row.base_url));
    cell(&mut out, &encode_text(&row.language));
    cell(&mut out, &encode_text(&row.crawling_strategy));
    cell(&mut out, &encode_text(&row.crawling_state));
    cell(&mut out, &encode_text(&row.last_crawling));
    if let Some(active) = row.active {
        cell(&mut out, active_label(active));
    }

    let buttons = row
        .actions
        .iter()
        .map(|action| button(*action, row))
        .collect::<Vec<_>>()
        .join(" ");
    cell(&mut out, &buttons);
    out.push_str("</tr>");
    out
}

fn cell(out: &mut String, content: &str) {
    out.push_str("<td>");
    out.push_str(content);
    out.push_str("</td>");
}

fn link(base_url: &str) -> String {
    let linkable = Url::parse(base_url)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !linkable {
        return encode_text(base_url).into_owned();
    }

    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        encode_double_quoted_attribute(base_url),
        encode_text(base_url)
    )
}

fn button(action: RowAction, row: &ProfileRow) -> String {
    let class = match action {
        RowAction::Crawl => "btn-primary",
        RowAction::Analyze => "btn-info",
        RowAction::Delete => "btn-danger",
        RowAction::ToggleActive if row.active == Some(true) => "btn-success",
        RowAction::ToggleActive => "btn-secondary",
    };
    let state = match (action, row.active) {
        (RowAction::ToggleActive, Some(active)) => format!(r#" data-active="{active}""#),
        _ => String::new(),
    };

    format!(
        r#"<button type="button" class="btn btn-sm {class}" data-action="{}" data-profile="{}"{state}>{}</button>"#,
        action.key(),
        encode_double_quoted_attribute(&row.name),
        action.label()
    )
}
