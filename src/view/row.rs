use crate::api::Profile;

pub const IDLE: &str = "Idle";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOptions {
    /// Adds the active column and the toggle action.
    pub show_toggle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Crawl,
    Analyze,
    Delete,
    ToggleActive,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Crawl => "Crawl",
            RowAction::Analyze => "Analyze",
            RowAction::Delete => "Delete",
            RowAction::ToggleActive => "Toggle",
        }
    }

    /// Identifier used in markup and in `crawlctl` subcommands.
    pub fn key(self) -> &'static str {
        match self {
            RowAction::Crawl => "crawl",
            RowAction::Analyze => "analyze",
            RowAction::Delete => "delete",
            RowAction::ToggleActive => "toggle",
        }
    }
}

/// Display projection of one profile, with the fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub name: String,
    pub base_url: String,
    pub language: String,
    pub crawling_strategy: String,
    pub crawling_state: String,
    pub last_crawling: String,
    pub active: Option<bool>,
    pub actions: Vec<RowAction>,
}

impl ProfileRow {
    pub fn project(profile: &Profile, options: RowOptions) -> Self {
        let mut actions = vec![RowAction::Crawl, RowAction::Analyze, RowAction::Delete];
        if options.show_toggle {
            actions.insert(0, RowAction::ToggleActive);
        }

        Self {
            name: profile.name.clone(),
            base_url: profile.base_url.clone(),
            language: profile.language.clone(),
            crawling_strategy: profile.crawling_strategy.clone(),
            crawling_state: profile.crawling_state().unwrap_or(IDLE).to_string(),
            last_crawling: profile.last_crawling().unwrap_or(NOT_AVAILABLE).to_string(),
            active: options.show_toggle.then_some(profile.active()),
            actions,
        }
    }
}

pub fn active_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(state: Option<&str>, last: Option<&str>) -> Profile {
        Profile {
            id: None,
            name: "acme".to_string(),
            base_url: "https://a.com".to_string(),
            language: "en".to_string(),
            crawling_strategy: "bfs".to_string(),
            crawling_state: state.map(ToOwned::to_owned),
            last_crawling: last.map(ToOwned::to_owned),
            last_crawled: None,
            active: Some(true),
            is_active: None,
        }
    }

    #[test]
    fn falls_back_to_idle_and_not_available() {
        let row = ProfileRow::project(&profile(None, Some("")), RowOptions::default());
        assert_eq!(row.crawling_state, "Idle");
        assert_eq!(row.last_crawling, "N/A");
        assert_eq!(
            row.actions,
            [RowAction::Crawl, RowAction::Analyze, RowAction::Delete]
        );
        assert_eq!(row.active, None);
    }

    #[test]
    fn keeps_backend_values_when_present() {
        let row = ProfileRow::project(
            &profile(Some("crawling"), Some("2025-03-01T10:00:00")),
            RowOptions::default(),
        );
        assert_eq!(row.crawling_state, "crawling");
        assert_eq!(row.last_crawling, "2025-03-01T10:00:00");
    }

    #[test]
    fn toggle_option_exposes_active_state() {
        let row = ProfileRow::project(
            &profile(None, None),
            RowOptions { show_toggle: true },
        );
        assert_eq!(row.active, Some(true));
        assert_eq!(row.actions[0], RowAction::ToggleActive);
        assert_eq!(row.actions.len(), 4);
    }
}
