use crate::core::outcome::ToolOutcome;
use crate::core::radius_search::{self, RadiusSearchRequest, MAX_DISPLAY};
use crate::core::{Geocoder, LocalSearch};
use crate::domain::model::{GeocodeResponse, Language, LocalSearchResponse, SortMode};
use crate::utils::error::Result;
use crate::utils::validation;

pub const MAX_GEOCODE_COUNT: u32 = 100;

/// 地圖工具入口：所有錯誤轉為 `ToolOutcome::Failure`，不會向外拋出
pub struct NaverMapService<S: LocalSearch, G: Geocoder> {
    search: S,
    geocoder: G,
}

impl<S: LocalSearch, G: Geocoder> NaverMapService<S, G> {
    pub fn new(search: S, geocoder: G) -> Self {
        Self { search, geocoder }
    }

    pub async fn geocode(
        &self,
        address: &str,
        language: Language,
        page: u32,
        count: u32,
    ) -> ToolOutcome<GeocodeResponse> {
        tracing::info!(
            "🗺️ geocode - address='{}' language={} page={} count={}",
            address,
            language.as_query_value(),
            page,
            count
        );

        let result = self.try_geocode(address, language, page, count).await;
        match &result {
            Ok(response) => tracing::info!(
                "🗺️ geocode - status={} addresses={} total={}",
                response.status,
                response.addresses.len(),
                response.meta.total_count
            ),
            Err(e) => tracing::error!("❌ geocode failed: {}", e),
        }
        result.into()
    }

    async fn try_geocode(
        &self,
        address: &str,
        language: Language,
        page: u32,
        count: u32,
    ) -> Result<GeocodeResponse> {
        validation::validate_non_empty_string("address", address)?;
        validation::validate_min("page", page, 1)?;
        validation::validate_range("count", count, 1, MAX_GEOCODE_COUNT)?;
        self.geocoder.geocode(address, language, page, count).await
    }

    pub async fn local_search(
        &self,
        query: &str,
        display: u8,
        sort: SortMode,
        start: u32,
    ) -> ToolOutcome<LocalSearchResponse> {
        // `display` 在 tracing 巨集內會解析成 tracing::field::display
        let page_size = display;
        tracing::info!(
            "🔎 localSearch - query='{}' display={} sort={} start={}",
            query,
            page_size,
            sort.as_query_value(),
            start
        );

        let result = self.try_local_search(query, display, sort, start).await;
        match &result {
            Ok(response) => tracing::info!(
                "🔎 localSearch - total={} returned={}",
                response.total,
                response.items.len()
            ),
            Err(e) => tracing::error!("❌ localSearch failed: {}", e),
        }
        result.into()
    }

    async fn try_local_search(
        &self,
        query: &str,
        display: u8,
        sort: SortMode,
        start: u32,
    ) -> Result<LocalSearchResponse> {
        validation::validate_non_empty_string("query", query)?;
        validation::validate_range("display", display, 1, MAX_DISPLAY)?;
        validation::validate_min("start", start, 1)?;
        self.search.search(query, display, sort, start).await
    }

    pub async fn local_search_by_coordinate(
        &self,
        request: &RadiusSearchRequest,
    ) -> ToolOutcome<LocalSearchResponse> {
        match radius_search::search_by_radius(&self.search, request).await {
            Ok(result) => {
                if tracing::enabled!(tracing::Level::DEBUG) {
                    if let Ok(items) = serde_json::to_string(&result.response.items) {
                        tracing::debug!("📍 Found items: {}", items);
                    }
                }
                ToolOutcome::Success(result.response)
            }
            Err(e) => {
                tracing::error!("❌ localSearchByCoordinate failed: {}", e);
                ToolOutcome::failure(e.to_string())
            }
        }
    }
}
