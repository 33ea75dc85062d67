pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::NaverMapsClient;
pub use config::MapConfig;
pub use core::outcome::ToolOutcome;
pub use core::radius_search::{search_by_radius, RadiusSearchRequest, RadiusSearchResult};
pub use core::service::NaverMapService;
pub use utils::error::{MapError, Result};
