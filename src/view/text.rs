use crate::api::Profile;
use crate::view::RenderTarget;
use crate::view::html::column_titles;
use crate::view::row::{ProfileRow, RowOptions, active_label};

const GAP: &str = "  ";

#[derive(Debug, Clone, Default)]
pub struct TextTable {
    options: RowOptions,
    rows: Vec<ProfileRow>,
}

impl TextTable {
    pub fn new(options: RowOptions) -> Self {
        Self {
            options,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "0 profiles".to_string();
        }

        let header = column_titles(self.options)
            .into_iter()
            .map(|title| title.to_uppercase())
            .collect::<Vec<_>>();
        let lines = self.rows.iter().map(cells).collect::<Vec<_>>();

        let mut widths = header.iter().map(|title| width(title)).collect::<Vec<_>>();
        for line in &lines {
            for (slot, value) in widths.iter_mut().zip(line) {
                *slot = (*slot).max(width(value));
            }
        }

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        for line in &lines {
            push_line(&mut out, line, &widths);
        }
        out.truncate(out.trim_end().len());
        out
    }
}

impl RenderTarget for TextTable {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append(&mut self, profile: &Profile) {
        self.rows.push(ProfileRow::project(profile, self.options));
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

fn cells(row: &ProfileRow) -> Vec<String> {
    let mut out = vec![
        row.name.clone(),
        row.base_url.clone(),
        row.language.clone(),
        row.crawling_strategy.clone(),
        row.crawling_state.clone(),
        row.last_crawling.clone(),
    ];
    if let Some(active) = row.active {
        out.push(active_label(active).to_string());
    }
    out.push(
        row.actions
            .iter()
            .map(|action| format!("[{}]", action.label()))
            .collect::<String>(),
    );
    out
}

// Control characters would break the column layout.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect()
}

fn width(value: &str) -> usize {
    value.chars().count()
}

fn push_line(out: &mut String, values: &[String], widths: &[usize]) {
    let last = values.len().saturating_sub(1);
    for (index, (value, width)) in values.iter().zip(widths).enumerate() {
        let value = sanitize(value);
        out.push_str(&value);
        if index < last {
            let pad = width.saturating_sub(value.chars().count());
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(GAP);
        }
    }
    out.push('\n');
}
