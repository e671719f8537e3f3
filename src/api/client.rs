use log::{debug, trace};
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, AppResult};

use super::ProfileApi;
use super::models::{Ack, NewProfile, Profile, ToggleActiveRequest};
use super::profiles;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ProfilesClient {
    http: Client,
    base_url: Url,
}

impl ProfilesClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "api url `{base_url}` cannot carry a path"
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<T> {
        let url = self.endpoint_url(segments)?;
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        self.parse_json_response(response).await
    }

    async fn send_ack<B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> AppResult<Ack> {
        let url = self.endpoint_url(segments)?;
        debug!("{method} {url}");
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        trace!("{status}: {body}");

        Ok(Ack {
            status: status.as_u16(),
            message: parse_message(&body),
        })
    }

    fn endpoint_url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Config(format!("api url `{}` cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl ProfileApi for ProfilesClient {
    async fn list_profiles(&self) -> AppResult<Vec<Profile>> {
        self.get_json(&profiles::collection_segments()).await
    }

    async fn get_profile(&self, name: &str) -> AppResult<Profile> {
        self.get_json(&profiles::profile_segments(name)).await
    }

    async fn create_profile(&self, profile: &NewProfile) -> AppResult<Ack> {
        self.send_ack(Method::POST, &profiles::collection_segments(), Some(profile))
            .await
    }

    async fn update_profile(&self, name: &str, profile: &NewProfile) -> AppResult<Ack> {
        self.send_ack(Method::PUT, &profiles::profile_segments(name), Some(profile))
            .await
    }

    async fn delete_profile(&self, name: &str) -> AppResult<Ack> {
        self.send_ack::<()>(Method::DELETE, &profiles::profile_segments(name), None)
            .await
    }

    async fn toggle_active(&self, name: &str, current_state: bool) -> AppResult<Ack> {
        let body = ToggleActiveRequest::from_current(current_state);
        self.send_ack(
            Method::PATCH,
            &profiles::toggle_active_segments(name),
            Some(&body),
        )
        .await
    }

    async fn trigger_crawl(&self, name: &str) -> AppResult<Ack> {
        self.send_ack::<()>(Method::POST, &profiles::crawl_segments(name), None)
            .await
    }

    async fn trigger_analysis(&self, name: &str) -> AppResult<Ack> {
        self.send_ack::<()>(Method::POST, &profiles::analyze_segments(name), None)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: Option<String>,
    detail: Option<serde_json::Value>,
}

fn parse_message(body: &str) -> Option<String> {
    let envelope = serde_json::from_str::<MessageEnvelope>(body).ok()?;
    if let Some(message) = envelope.message.filter(|message| !message.trim().is_empty()) {
        return Some(message);
    }

    match envelope.detail? {
        serde_json::Value::String(detail) => Some(detail),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    AppError::Api(format!("profile api request failed ({status}): {message}"))
}
