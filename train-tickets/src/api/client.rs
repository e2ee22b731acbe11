//! Ticketing API HTTP client.
//!
//! Provides async methods for the availability query and the per-train
//! price query, converting responses into domain types.

use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{PLACEHOLDER, SeatValues, Telecode, TrainEntry, TravelDate};

use super::convert::{parse_records, price_table};
use super::error::ApiError;
use super::types::{AvailabilityData, AvailabilityResponse, PriceResponse, messages_text};

/// Default base URL for the ticketing API.
pub const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn/otn";

/// Default path of the availability query, relative to the base URL.
///
/// The operator renames this endpoint from time to time (`leftTicket/queryZ`,
/// `leftTicket/queryA`, ...), so it is configurable.
pub const DEFAULT_QUERY_PATH: &str = "leftTicket/query";

/// Path of the price query, relative to the base URL.
const PRICE_PATH: &str = "leftTicket/queryTicketPrice";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// How much of an unparseable body to keep in errors.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the ticketing client.
#[derive(Debug, Clone)]
pub struct TicketClientConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Availability query path, relative to `base_url`
    pub query_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TicketClientConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query_path: DEFAULT_QUERY_PATH.to_string(),
            timeout_secs: 15,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the availability query path.
    pub fn with_query_path(mut self, path: impl Into<String>) -> Self {
        self.query_path = path.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TicketClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of one price lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    /// Internal train id.
    pub train_no: String,
    /// Origin stop index.
    pub from_station_no: String,
    /// Destination stop index.
    pub to_station_no: String,
    /// Seat-type code from the availability record.
    pub seat_types: String,
    /// Travel date.
    pub date: TravelDate,
}

impl PriceRequest {
    /// Build the lookup for an entry.
    ///
    /// Returns `None` if any field the price endpoint needs is the
    /// placeholder, since such a lookup cannot succeed.
    pub fn for_entry(entry: &TrainEntry, date: TravelDate) -> Option<Self> {
        let required = [
            &entry.train_no,
            &entry.from_station_no,
            &entry.to_station_no,
            &entry.seat_type_code,
        ];
        if required.iter().any(|v| v.as_str() == PLACEHOLDER) {
            return None;
        }

        Some(Self {
            train_no: entry.train_no.clone(),
            from_station_no: entry.from_station_no.clone(),
            to_station_no: entry.to_station_no.clone(),
            seat_types: entry.seat_type_code.clone(),
            date,
        })
    }
}

/// Ticketing API client.
#[derive(Debug, Clone)]
pub struct TicketClient {
    http: reqwest::Client,
    base_url: String,
    query_path: String,
}

impl TicketClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TicketClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh;q=0.9"));
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        // The API rejects queries that do not appear to come from its own page
        let referer = format!("{}/leftTicket/init", config.base_url.trim_end_matches('/'));
        let referer = HeaderValue::from_str(&referer).map_err(|_| ApiError::Api {
            status: 0,
            message: format!("Invalid base URL: {}", config.base_url),
        })?;
        headers.insert(REFERER, referer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            query_path: config.query_path.trim_matches('/').to_string(),
        })
    }

    /// Query remaining tickets between two stations on a date.
    ///
    /// Returns the raw records and the code → name map; see
    /// [`TicketClient::query_trains`] for parsed entries.
    pub async fn query_availability(
        &self,
        from: Telecode,
        to: Telecode,
        date: TravelDate,
    ) -> Result<AvailabilityData, ApiError> {
        let url = format!("{}/{}", self.base_url, self.query_path);
        let query = [
            ("leftTicketDTO.train_date", date.to_string()),
            ("leftTicketDTO.from_station", from.to_string()),
            ("leftTicketDTO.to_station", to.to_string()),
            ("purpose_codes", "ADULT".to_string()),
        ];

        let response: AvailabilityResponse = self.get_json(&url, &query).await?;

        if !response.data.is_object() {
            return Err(ApiError::MissingData {
                message: messages_text(&response.messages),
            });
        }

        serde_json::from_value(response.data).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Query remaining tickets and parse them into train entries.
    ///
    /// Malformed records are skipped with a warning.
    pub async fn query_trains(
        &self,
        from: Telecode,
        to: Telecode,
        date: TravelDate,
    ) -> Result<Vec<TrainEntry>, ApiError> {
        let data = self.query_availability(from, to, date).await?;
        debug!(
            records = data.result.len(),
            stations = data.map.len(),
            "Availability response received"
        );
        Ok(parse_records(&data.result, &data.map))
    }

    /// Query indicative prices for one train.
    pub async fn query_prices(&self, request: &PriceRequest) -> Result<SeatValues, ApiError> {
        let url = format!("{}/{}", self.base_url, PRICE_PATH);
        let query = [
            ("train_no", request.train_no.clone()),
            ("from_station_no", request.from_station_no.clone()),
            ("to_station_no", request.to_station_no.clone()),
            ("seat_types", request.seat_types.clone()),
            ("train_date", request.date.to_string()),
        ];

        let response: PriceResponse = self.get_json(&url, &query).await?;

        let fares = response
            .data
            .as_object()
            .ok_or_else(|| ApiError::MissingData {
                message: messages_text(&response.messages),
            })?;

        Ok(price_table(fares))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
        })
    }
}
