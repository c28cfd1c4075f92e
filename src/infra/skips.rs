#![allow(dead_code)]

//! Asynchronous client for the skip pricing API.
//!
//! - One request per call, no retries and no caching.
//! - Transport failures and malformed bodies are reported as distinct error kinds.

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::Deserialize;
use thiserror::Error;
use time::{macros::format_description, Date};
use tracing::{error, info, warn};
use url::Url;

use crate::domain::{Location, Skip, SkipQuote, SkipSource};
use crate::infra::config::ApiConfig;

const USER_AGENT: &str = concat!("skip-booking/", env!("CARGO_PKG_VERSION"));

pub const NETWORK_ERROR: &str = "Network error. Please check your internet connection.";
pub const SERVER_ERROR: &str = "Server error. Please try again later.";
pub const TIMEOUT_ERROR: &str = "Request timeout. Please try again.";
pub const INVALID_RESPONSE: &str = "Invalid response from server.";
pub const NO_SKIPS_FOUND: &str = "No skips found for this location.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// Timeout, connection failure or a non-2xx status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response format: {0}")]
    InvalidResponseFormat(String),
    #[error("invalid date: {0}")]
    InvalidDate(#[from] time::error::Format),
    #[error("{context}: {source}")]
    Lookup {
        context: String,
        source: Box<FetchError>,
    },
}

impl FetchError {
    fn lookup(context: impl Into<String>, source: FetchError) -> Self {
        FetchError::Lookup {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// HTTP status of the failed response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Transport(err) => err.status(),
            FetchError::Lookup { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Transport(err) => err.is_timeout(),
            FetchError::Lookup { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Short text suitable for showing to the person booking.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Transport(err) if err.is_timeout() => TIMEOUT_ERROR,
            FetchError::Transport(err) if err.status().is_some() => SERVER_ERROR,
            FetchError::Transport(_) | FetchError::InvalidUrl(_) | FetchError::InvalidBaseUrl(_) => {
                NETWORK_ERROR
            }
            FetchError::InvalidResponseFormat(_) | FetchError::InvalidDate(_) => INVALID_RESPONSE,
            FetchError::Lookup { source, .. } => source.user_message(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityDto {
    available: bool,
}

#[derive(Clone)]
pub struct SkipClient {
    http: Client,
    base_url: Url,
}

impl SkipClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(&ApiConfig::default())
    }

    pub fn with_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Lists the skips priced for a postcode and area.
    pub async fn get_skips_by_location(
        &self,
        postcode: &str,
        area: &str,
    ) -> Result<Vec<SkipQuote>, FetchError> {
        let mut url = self.endpoint(&["skips", "by-location"])?;
        url.query_pairs_mut()
            .append_pair("postcode", postcode)
            .append_pair("area", area);

        let body = self.get_json(url).await?;
        let quotes = parse_skip_quotes(body)?;
        info!(postcode, area, count = quotes.len(), "parsed skip quotes");
        Ok(quotes)
    }

    pub async fn get_skip_by_id(&self, skip_id: &str) -> Result<Skip, FetchError> {
        self.fetch_skip(skip_id).await.map_err(|err| {
            error!(skip_id, error = %err, "error fetching skip by id");
            FetchError::lookup(format!("Failed to fetch skip with ID {skip_id}"), err)
        })
    }

    /// Asks whether a skip can be delivered on `date`.
    pub async fn check_availability(&self, skip_id: &str, date: Date) -> Result<bool, FetchError> {
        self.fetch_availability(skip_id, date).await.map_err(|err| {
            error!(skip_id, %date, error = %err, "error checking skip availability");
            FetchError::lookup(
                format!("Failed to check availability for skip {skip_id}"),
                err,
            )
        })
    }

    async fn fetch_skip(&self, skip_id: &str) -> Result<Skip, FetchError> {
        let url = self.endpoint(&["skips", skip_id])?;
        let body = self.get_json(url).await?;
        let quote: SkipQuote = serde_json::from_value(body)
            .map_err(|err| FetchError::InvalidResponseFormat(format!("malformed skip record: {err}")))?;
        Ok(Skip::from(quote))
    }

    async fn fetch_availability(&self, skip_id: &str, date: Date) -> Result<bool, FetchError> {
        let date = date.format(format_description!("[year]-[month]-[day]"))?;
        let mut url = self.endpoint(&["skips", skip_id, "availability"])?;
        url.query_pairs_mut().append_pair("date", &date);

        let body = self.get_json(url).await?;
        let dto: AvailabilityDto = serde_json::from_value(body).map_err(|err| {
            FetchError::InvalidResponseFormat(format!("malformed availability payload: {err}"))
        })?;
        Ok(dto.available)
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, FetchError> {
        info!(method = "GET", url = %url, "sending skip API request");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .inspect_err(|err| log_transport_failure(&url, err))?
            .error_for_status()
            .inspect_err(|err| log_transport_failure(&url, err))?;
        info!(url = %url, status = response.status().as_u16(), "skip API response received");

        let body = response
            .bytes()
            .await
            .inspect_err(|err| log_transport_failure(&url, err))?;
        serde_json::from_slice(&body).map_err(|err| {
            warn!(url = %url, error = %err, "skip API returned a non-JSON body");
            FetchError::InvalidResponseFormat(format!("body is not valid JSON: {err}"))
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl SkipSource for SkipClient {
    type Error = FetchError;

    async fn skips_by_location(&self, location: &Location) -> Result<Vec<SkipQuote>, FetchError> {
        self.get_skips_by_location(&location.postcode, &location.area)
            .await
    }
}

fn parse_skip_quotes(body: serde_json::Value) -> Result<Vec<SkipQuote>, FetchError> {
    if !body.is_array() {
        return Err(FetchError::InvalidResponseFormat(format!(
            "expected an array of skips, got {}",
            json_kind(&body)
        )));
    }

    serde_json::from_value(body)
        .map_err(|err| FetchError::InvalidResponseFormat(format!("malformed skip record: {err}")))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn log_transport_failure(url: &Url, err: &reqwest::Error) {
    let status = err.status().map(|status| status.as_u16());
    error!(url = %url, status, error = %err, "skip API request failed");

    match err.status() {
        Some(StatusCode::NOT_FOUND) => warn!(url = %url, "resource not found"),
        Some(StatusCode::INTERNAL_SERVER_ERROR) => warn!(url = %url, "server error"),
        _ if err.is_timeout() => warn!(url = %url, "request timeout"),
        _ => {}
    }
}
