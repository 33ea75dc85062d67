use crate::domain::model::{GeocodeResponse, Language, LocalSearchResponse, SortMode};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 分頁式地點文字搜尋
#[async_trait]
pub trait LocalSearch: Send + Sync {
    /// `start` is the 1-indexed item offset of the page.
    async fn search(
        &self,
        query: &str,
        display: u8,
        sort: SortMode,
        start: u32,
    ) -> Result<LocalSearchResponse>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(
        &self,
        address: &str,
        language: Language,
        page: u32,
        count: u32,
    ) -> Result<GeocodeResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn search_base_url(&self) -> &str;
    fn search_credentials(&self) -> (&str, &str);
    fn geocode_base_url(&self) -> &str;
    fn geocode_credentials(&self) -> (&str, &str);
    fn timeout_seconds(&self) -> u64;
}
