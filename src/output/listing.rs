use crate::api::Profile;
use crate::view::{HtmlTable, RenderTarget, RowOptions, TextTable};

/// Keeps the raw profiles for JSON output.
#[derive(Debug, Clone, Default)]
pub struct JsonRows {
    profiles: Vec<Profile>,
}

impl JsonRows {
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
}

impl RenderTarget for JsonRows {
    fn clear(&mut self) {
        self.profiles.clear();
    }

    fn append(&mut self, profile: &Profile) {
        self.profiles.push(profile.clone());
    }

    fn len(&self) -> usize {
        self.profiles.len()
    }
}

#[derive(Debug, Clone)]
pub enum Listing {
    Text(TextTable),
    Html(HtmlTable),
    Json(JsonRows),
}

impl Listing {
    pub fn text(options: RowOptions) -> Self {
        Listing::Text(TextTable::new(options))
    }

    pub fn html(options: RowOptions) -> Self {
        Listing::Html(HtmlTable::new(options))
    }

    pub fn json() -> Self {
        Listing::Json(JsonRows::default())
    }

    fn target(&mut self) -> &mut dyn RenderTarget {
        match self {
            Listing::Text(table) => table,
            Listing::Html(table) => table,
            Listing::Json(rows) => rows,
        }
    }
}

impl RenderTarget for Listing {
    fn clear(&mut self) {
        self.target().clear();
    }

    fn append(&mut self, profile: &Profile) {
        self.target().append(profile);
    }

    fn len(&self) -> usize {
        match self {
            Listing::Text(table) => table.len(),
            Listing::Html(table) => table.len(),
            Listing::Json(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Profile {
        serde_json::from_str(
            r#"{"name":"acme","base_url":"https://a.com","language":"en","crawling_strategy":"bfs"}"#,
        )
        .unwrap()
    }

    #[test]
    fn every_variant_tracks_rows() {
        for mut listing in [
            Listing::text(RowOptions::default()),
            Listing::html(RowOptions::default()),
            Listing::json(),
        ] {
            listing.append(&acme());
            listing.append(&acme());
            assert_eq!(listing.len(), 2);
            listing.clear();
            assert!(listing.is_empty());
        }
    }

    #[test]
    fn json_rows_keep_raw_profiles() {
        let mut listing = Listing::json();
        listing.append(&acme());
        match listing {
            Listing::Json(rows) => assert_eq!(rows.profiles()[0].crawling_state, None),
            other => panic!("expected json listing, got {other:?}"),
        }
    }
}
