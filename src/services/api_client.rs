// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Tres lecturas GET contra /api/history*, con Basic-Auth.
// Sin reintentos, sin caché, sin paginación: el siguiente tick reintenta.
// ============================================================================

use chrono::NaiveDate;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Credentials, HistoryResponse, Location, LocationQuery};
use crate::services::auth_service::basic_auth_header;
use crate::utils::constants::{HISTORY_BY_DATE_PATH, HISTORY_BY_DEVICE_PATH, HISTORY_PATH};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(CONFIG.backend_url(), credentials)
    }

    pub fn with_base_url(base_url: &str, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// `GET /api/history`
    pub async fn get_all_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get_history(&history_url(&self.base_url, &LocationQuery::All)).await
    }

    /// `GET /api/history/date?query_date=YYYY-MM-DD`
    pub async fn get_locations_by_date(&self, date: NaiveDate) -> Result<Vec<Location>, ApiError> {
        self.get_history(&history_url(&self.base_url, &LocationQuery::ByDate(date))).await
    }

    /// `GET /api/history/device/{device}`
    pub async fn get_locations_by_device(&self, device: &str) -> Result<Vec<Location>, ApiError> {
        self.get_history(&history_url(&self.base_url, &LocationQuery::ByDevice(device.to_string())))
            .await
    }

    pub async fn fetch(&self, query: &LocationQuery) -> Result<Vec<Location>, ApiError> {
        match query {
            LocationQuery::All => self.get_all_locations().await,
            LocationQuery::ByDate(date) => self.get_locations_by_date(*date).await,
            LocationQuery::ByDevice(device) => self.get_locations_by_device(device).await,
        }
    }

    async fn get_history(&self, url: &str) -> Result<Vec<Location>, ApiError> {
        let response = Request::get(url)
            .header("Authorization", &basic_auth_header(&self.credentials))
            .send()
            .await?;

        if !response.ok() {
            log::warn!("⚠️ GET {} -> HTTP {} {}", url, response.status(), response.status_text());
            return Err(ApiError::Status(response.status()));
        }

        let body = response.json::<HistoryResponse>().await?;

        if CONFIG.is_logging_enabled() {
            log::debug!("📍 GET {} -> {}", url, body.summary());
        }

        Ok(body.data)
    }
}

/// URL completa de la ruta de historial para `query`
pub fn history_url(base_url: &str, query: &LocationQuery) -> String {
    let base_url = base_url.trim_end_matches('/');
    match query {
        LocationQuery::All => format!("{}{}", base_url, HISTORY_PATH),
        LocationQuery::ByDate(date) => format!(
            "{}{}?query_date={}",
            base_url,
            HISTORY_BY_DATE_PATH,
            date.format("%Y-%m-%d")
        ),
        LocationQuery::ByDevice(device) => format!(
            "{}{}/{}",
            base_url,
            HISTORY_BY_DEVICE_PATH,
            encode_path_segment(device)
        ),
    }
}

fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_history_urls() {
        assert_eq!(history_url("", &LocationQuery::All), "/api/history");
        assert_eq!(
            history_url("https://tracker.example.org/", &LocationQuery::All),
            "https://tracker.example.org/api/history"
        );

        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            history_url("https://tracker.example.org", &LocationQuery::ByDate(date)),
            "https://tracker.example.org/api/history/date?query_date=2024-03-07"
        );
    }

    #[test]
    fn device_segment_is_percent_encoded() {
        let query = LocationQuery::ByDevice("alice phone/2".to_string());
        assert_eq!(history_url("", &query), "/api/history/device/alice%20phone%2F2");

        let plain = LocationQuery::ByDevice("pixel-7_a.b~c".to_string());
        assert_eq!(history_url("", &plain), "/api/history/device/pixel-7_a.b~c");
    }

    #[test]
    fn non_ascii_device_names_are_utf8_encoded() {
        assert_eq!(encode_path_segment("móvil"), "m%C3%B3vil");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8000///", Credentials::new("a", "b"));
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
