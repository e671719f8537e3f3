use crate::api::NewProfile;
use crate::error::{AppError, AppResult};

/// Named fields of the `profile-form` creation form with their placeholders.
pub const FIELDS: [(&str, &str); 4] = [
    ("name", "Name"),
    ("base_url", "Base URL"),
    ("language", "Language"),
    ("crawling_strategy", "Crawling strategy"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub base_url: String,
    pub language: String,
    pub crawling_strategy: String,
}

impl ProfileForm {
    /// Fills the form from `(field, value)` pairs, the way a submitted form
    /// arrives. Unknown fields are ignored; every known field is required.
    pub fn from_pairs<'a, I>(pairs: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::default();
        for (field, value) in pairs {
            if let Some(slot) = form.field_mut(field) {
                *slot = value.to_string();
            }
        }

        if let Some(missing) = form.missing_field() {
            return Err(AppError::InvalidInput(format!(
                "form field `{missing}` is required"
            )));
        }

        Ok(form)
    }

    pub fn to_payload(&self) -> NewProfile {
        NewProfile {
            name: self.name.clone(),
            base_url: self.base_url.clone(),
            language: self.language.clone(),
            crawling_strategy: self.crawling_strategy.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            "name" => Some(&mut self.name),
            "base_url" => Some(&mut self.base_url),
            "language" => Some(&mut self.language),
            "crawling_strategy" => Some(&mut self.crawling_strategy),
            _ => None,
        }
    }

    fn missing_field(&self) -> Option<&'static str> {
        let values = [
            &self.name,
            &self.base_url,
            &self.language,
            &self.crawling_strategy,
        ];
        FIELDS
            .iter()
            .zip(values)
            .find(|(_, value)| value.is_empty())
            .map(|((field, _), _)| *field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_payload_from_pairs() {
        let form = ProfileForm::from_pairs([
            ("name", "acme"),
            ("base_url", "https://a.com"),
            ("language", "en"),
            ("crawling_strategy", "bfs"),
            ("submit", "Add profile"),
        ])
        .expect("form should be complete");

        assert_eq!(form.to_payload().crawling_strategy, "bfs");
        assert_eq!(form.name, "acme");
    }

    #[test]
    fn requires_every_field() {
        let result = ProfileForm::from_pairs([("name", "acme"), ("base_url", "https://a.com")]);
        match result {
            Err(AppError::InvalidInput(message)) => assert!(message.contains("`language`")),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn reset_clears_fields() {
        let mut form = ProfileForm {
            name: "acme".to_string(),
            ..ProfileForm::default()
        };
        form.reset();
        assert!(form.is_blank());
    }
}
