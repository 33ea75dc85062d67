use crate::core::{LocalSearch, LocalSearchResponse, PlaceItem};
use crate::domain::model::{GeoPoint, SortMode};
use crate::utils::error::{MapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// 每次搜尋最多抓取的頁數
pub const MAX_PAGES: u32 = 10;
pub const MAX_DISPLAY: u8 = 5;
pub const MAX_RADIUS_METERS: u32 = 10_000;

fn default_radius() -> u32 {
    1000
}

fn default_display() -> u8 {
    MAX_DISPLAY
}

fn default_min_results() -> u8 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusSearchRequest {
    pub query: String,
    pub longitude: f64,
    pub latitude: f64,
    /// 公尺
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default = "default_display")]
    pub display: u8,
    #[serde(default)]
    pub sort: SortMode,
    #[serde(default = "default_min_results")]
    pub min_results: u8,
}

impl RadiusSearchRequest {
    pub fn new(query: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            query: query.into(),
            longitude,
            latitude,
            radius: default_radius(),
            display: default_display(),
            sort: SortMode::default(),
            min_results: default_min_results(),
        }
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_display(mut self, display: u8) -> Self {
        self.display = display;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_min_results(mut self, min_results: u8) -> Self {
        self.min_results = min_results;
        self
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

impl Validate for RadiusSearchRequest {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("query", &self.query)?;
        validation::validate_finite("longitude", self.longitude)?;
        validation::validate_finite("latitude", self.latitude)?;
        validation::validate_range("radius", self.radius, 1, MAX_RADIUS_METERS)?;
        validation::validate_range("display", self.display, 1, MAX_DISPLAY)?;
        validation::validate_range("min_results", self.min_results, 1, self.display)?;
        Ok(())
    }
}

/// 每頁處理後的迴圈決策
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopControl {
    Continue,
    StopQuotaMet,
    StopExhausted,
    StopCeilingReached,
}

impl LoopControl {
    pub fn is_stop(&self) -> bool {
        !matches!(self, LoopControl::Continue)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub pages_searched: u32,
    pub items_scanned: u64,
    pub items_matched: usize,
    pub stop_reason: Option<LoopControl>,
}

/// Decide whether to fetch another page.
///
/// `reported_total` is compared against raw items consumed, not matches.
pub fn next_step(
    stats: &SearchStats,
    last_page_len: usize,
    reported_total: u64,
    min_results: usize,
) -> LoopControl {
    if last_page_len == 0 {
        return LoopControl::StopExhausted;
    }
    if stats.items_matched >= min_results {
        return LoopControl::StopQuotaMet;
    }
    if reported_total <= stats.items_scanned {
        return LoopControl::StopExhausted;
    }
    if stats.pages_searched >= MAX_PAGES {
        return LoopControl::StopCeilingReached;
    }
    LoopControl::Continue
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSearchResult {
    pub response: LocalSearchResponse,
    pub stats: SearchStats,
}

/// 篩出位於半徑內的項目，保持原順序
pub fn filter_within_radius<'a>(
    items: &'a [PlaceItem],
    center: &'a GeoPoint,
    radius_meters: f64,
) -> impl Iterator<Item = &'a PlaceItem> + 'a {
    items.iter().filter(move |item| {
        item.position()
            .map(|position| center.haversine_distance(&position) <= radius_meters)
            .unwrap_or(false)
    })
}

pub async fn search_by_radius<S>(search: &S, request: &RadiusSearchRequest) -> Result<RadiusSearchResult>
where
    S: LocalSearch + ?Sized,
{
    request.validate()?;

    tracing::info!(
        "📍 Radius search: query='{}' center=({}, {}) radius={}m display={} sort={} min_results={}",
        request.query,
        request.longitude,
        request.latitude,
        request.radius,
        request.display,
        request.sort.as_query_value(),
        request.min_results
    );

    let center = request.center();
    let radius = f64::from(request.radius);
    let min_results = usize::from(request.min_results);
    let mut matches: Vec<PlaceItem> = Vec::new();
    let mut stats = SearchStats::default();

    loop {
        let start = 1 + stats.pages_searched * u32::from(request.display);
        let page = search
            .search(&request.query, request.display, request.sort, start)
            .await
            .map_err(|e| match e {
                MapError::SearchBackend { .. } => e,
                other => MapError::backend(other.to_string()),
            })?;
        stats.pages_searched += 1;

        tracing::debug!(
            "📄 Page {} (start={}): total={}, items={}",
            stats.pages_searched,
            start,
            page.total,
            page.items.len()
        );

        stats.items_scanned += page.items.len() as u64;
        let before = matches.len();
        matches.extend(filter_within_radius(&page.items, &center, radius).cloned());
        stats.items_matched = matches.len();
        tracing::debug!(
            "📄 Page {}: {} of {} items within {}m",
            stats.pages_searched,
            matches.len() - before,
            page.items.len(),
            request.radius
        );

        let control = next_step(&stats, page.items.len(), page.total, min_results);
        if control.is_stop() {
            stats.stop_reason = Some(control);
            break;
        }
    }

    let total = matches.len() as u64;
    matches.truncate(usize::from(request.display));

    tracing::info!(
        "✅ Radius search done: matched={}, returned={}, pages={}, scanned={}, stop={:?}",
        total,
        matches.len(),
        stats.pages_searched,
        stats.items_scanned,
        stats.stop_reason
    );

    Ok(RadiusSearchResult {
        response: LocalSearchResponse {
            total,
            start: 1,
            display: matches.len() as u32,
            items: matches,
        },
        stats,
    })
}
