// Adapters layer: concrete implementations for external systems (http).

pub mod http;

pub use http::NaverMapsClient;
