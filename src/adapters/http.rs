use crate::core::{ConfigProvider, Geocoder, LocalSearch};
use crate::domain::model::{GeocodeResponse, Language, LocalSearchResponse, SortMode};
use crate::utils::error::{MapError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const LOCAL_SEARCH_PATH: &str = "/v1/search/local.json";
pub const GEOCODE_PATH: &str = "/map-geocode/v2/geocode";

#[derive(Debug, Clone)]
struct Endpoint {
    base_url: String,
    client_id: String,
    client_secret: String,
}

impl Endpoint {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Naver 搜尋 API 與 NCP 地理編碼 API 的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct NaverMapsClient {
    client: Client,
    search: Endpoint,
    geocode: Endpoint,
}

impl NaverMapsClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()
            .map_err(|e| MapError::Config {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        let (search_id, search_secret) = config.search_credentials();
        let (geocode_id, geocode_secret) = config.geocode_credentials();

        Ok(Self {
            client,
            search: Endpoint {
                base_url: config.search_base_url().to_string(),
                client_id: search_id.to_string(),
                client_secret: search_secret.to_string(),
            },
            geocode: Endpoint {
                base_url: config.geocode_base_url().to_string(),
                client_id: geocode_id.to_string(),
                client_secret: geocode_secret.to_string(),
            },
        })
    }

    /// 單次請求，不重試
    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(MapError::backend(format!("HTTP {}: {}", status, body.trim())));
        }

        serde_json::from_str(&body)
            .map_err(|e| MapError::backend(format!("Malformed response: {}", e)))
    }
}

#[async_trait]
impl LocalSearch for NaverMapsClient {
    async fn search(
        &self,
        query: &str,
        display: u8,
        sort: SortMode,
        start: u32,
    ) -> Result<LocalSearchResponse> {
        let url = self.search.url(LOCAL_SEARCH_PATH);
        tracing::debug!("Making local search request to: {} (start={})", url, start);

        let request = self
            .client
            .get(&url)
            .header("X-Naver-Client-Id", &self.search.client_id)
            .header("X-Naver-Client-Secret", &self.search.client_secret)
            .query(&[
                ("query", query.to_string()),
                ("display", display.to_string()),
                ("start", start.to_string()),
                ("sort", sort.as_query_value().to_string()),
            ]);

        self.send_json(request).await
    }
}

#[async_trait]
impl Geocoder for NaverMapsClient {
    async fn geocode(
        &self,
        address: &str,
        language: Language,
        page: u32,
        count: u32,
    ) -> Result<GeocodeResponse> {
        let url = self.geocode.url(GEOCODE_PATH);
        tracing::debug!("Making geocode request to: {}", url);

        let request = self
            .client
            .get(&url)
            .header("X-NCP-APIGW-API-KEY-ID", &self.geocode.client_id)
            .header("X-NCP-APIGW-API-KEY", &self.geocode.client_secret)
            .query(&[
                ("query", address.to_string()),
                ("language", language.as_query_value().to_string()),
                ("page", page.to_string()),
                ("count", count.to_string()),
            ]);

        self.send_json(request).await
    }
}
