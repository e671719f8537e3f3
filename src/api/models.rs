use serde::{Deserialize, Serialize};

/// A crawling profile as returned by the backend.
///
/// Only the fields the view renders are modelled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub base_url: String,
    pub language: String,
    pub crawling_strategy: String,
    #[serde(default)]
    pub crawling_state: Option<String>,
    #[serde(default)]
    pub last_crawling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_crawled: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Profile {
    pub fn crawling_state(&self) -> Option<&str> {
        non_empty(self.crawling_state.as_deref())
    }

    /// `last_crawling`, or the backend's `last_crawled` column when the
    /// former is absent or empty.
    pub fn last_crawling(&self) -> Option<&str> {
        non_empty(self.last_crawling.as_deref()).or(non_empty(self.last_crawled.as_deref()))
    }

    pub fn active(&self) -> bool {
        self.active.or(self.is_active).unwrap_or(false)
    }
}

/// Body of the create and replace requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProfile {
    pub name: String,
    pub base_url: String,
    pub language: String,
    pub crawling_strategy: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleActiveRequest {
    pub active: bool,
}

impl ToggleActiveRequest {
    pub fn from_current(current_state: bool) -> Self {
        Self {
            active: !current_state,
        }
    }
}

/// What the backend said about a mutation. Never fails the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub status: u16,
    pub message: Option<String>,
}

impl Ack {
    pub fn accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_backend_field_aliases() {
        let profile: Profile = serde_json::from_str(
            r#"{"id":7,"name":"acme","base_url":"https://a.com","language":"en",
                "crawling_strategy":"bfs","crawling_state":"not_started",
                "is_active":true,"last_crawled":"2025-03-01T10:00:00"}"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.id, Some(7));
        assert!(profile.active());
        assert_eq!(profile.last_crawling(), Some("2025-03-01T10:00:00"));
        assert_eq!(profile.crawling_state(), Some("not_started"));
    }

    #[test]
    fn empty_and_null_states_are_absent() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"acme","base_url":"https://a.com","language":"en",
                "crawling_strategy":"bfs","crawling_state":"","last_crawling":null}"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.crawling_state(), None);
        assert_eq!(profile.last_crawling(), None);
        assert!(!profile.active());
    }

    #[test]
    fn tolerates_both_spellings_in_one_row() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"acme","base_url":"https://a.com","language":"en",
                "crawling_strategy":"bfs","last_crawling":null,"last_crawled":"2025",
                "active":false,"is_active":true}"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.last_crawling(), Some("2025"));
        assert!(!profile.active());
    }

    #[test]
    fn canonical_last_crawling_wins() {
        let profile: Profile = serde_json::from_str(
            r#"{"name":"acme","base_url":"https://a.com","language":"en",
                "crawling_strategy":"bfs","last_crawling":"2025-04-01",
                "last_crawled":"2025-03-01"}"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.last_crawling(), Some("2025-04-01"));
    }

    #[test]
    fn toggle_request_negates_current_state() {
        assert_eq!(
            serde_json::to_value(ToggleActiveRequest::from_current(true)).unwrap(),
            serde_json::json!({"active": false})
        );
        assert_eq!(
            serde_json::to_value(ToggleActiveRequest::from_current(false)).unwrap(),
            serde_json::json!({"active": true})
        );
    }

    #[test]
    fn new_profile_serializes_exactly_four_fields() {
        let payload = NewProfile {
            name: "acme".to_string(),
            base_url: "https://a.com".to_string(),
            language: "en".to_string(),
            crawling_strategy: "bfs".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let keys = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
        assert_eq!(
            keys,
            ["base_url", "crawling_strategy", "language", "name"]
        );
    }
}
