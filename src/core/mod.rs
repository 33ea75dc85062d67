pub mod outcome;
pub mod radius_search;
pub mod service;

pub use crate::domain::model::{GeoPoint, LocalSearchResponse, PlaceItem, SortMode};
pub use crate::domain::ports::{ConfigProvider, Geocoder, LocalSearch};
pub use crate::utils::error::Result;
