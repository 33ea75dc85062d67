use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Naver 座標為 10^7 倍的定點整數
pub const COORDINATE_SCALE: f64 = 10_000_000.0;

/// 地球平均半徑（公尺）
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

pub fn decode_scaled(raw: i64) -> f64 {
    raw as f64 / COORDINATE_SCALE
}

/// 經緯度（十進位度數）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn from_scaled(mapx: i64, mapy: i64) -> Self {
        Self::new(decode_scaled(mapx), decode_scaled(mapy))
    }

    /// Great-circle distance in meters (haversine).
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMode {
    #[default]
    #[serde(rename = "random", alias = "by-relevance")]
    Relevance,
    #[serde(rename = "comment", alias = "by-review-count")]
    ReviewCount,
}

impl SortMode {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            SortMode::Relevance => "random",
            SortMode::ReviewCount => "comment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "kor")]
    Korean,
    #[serde(rename = "eng")]
    English,
}

impl Language {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Language::Korean => "kor",
            Language::English => "eng",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub telephone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub road_address: String,
    #[serde(
        default,
        serialize_with = "serialize_scaled",
        deserialize_with = "deserialize_scaled"
    )]
    pub mapx: Option<i64>,
    #[serde(
        default,
        serialize_with = "serialize_scaled",
        deserialize_with = "deserialize_scaled"
    )]
    pub mapy: Option<i64>,
}

impl PlaceItem {
    /// 兩個座標欄位都存在時才有位置
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.mapx, self.mapy) {
            (Some(x), Some(y)) => Some(GeoPoint::from_scaled(x, y)),
            _ => None,
        }
    }
}

// 寫回與 API 相同的字串形式
fn serialize_scaled<S>(value: &Option<i64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&v.to_string()),
        None => serializer.serialize_none(),
    }
}

// API 以字串回傳座標（"1269780493"），也接受數字
fn deserialize_scaled<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(Raw::Int(v)) => Some(v),
        Some(Raw::Float(v)) if v.is_finite() => Some(v.round() as i64),
        Some(Raw::Text(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.round() as i64))
        }
        _ => None,
    })
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub items: Vec<PlaceItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeMeta {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub jibun_address: String,
    #[serde(default)]
    pub english_address: String,
    /// 經度
    #[serde(default)]
    pub x: String,
    /// 緯度
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub distance: f64,
}

impl Address {
    pub fn position(&self) -> Option<GeoPoint> {
        let lon = self.x.trim().parse::<f64>().ok()?;
        let lat = self.y.trim().parse::<f64>().ok()?;
        Some(GeoPoint::new(lon, lat))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub meta: GeocodeMeta,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub error_message: String,
}
