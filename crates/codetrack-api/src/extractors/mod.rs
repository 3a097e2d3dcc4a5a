//! Custom Axum extractors.

pub mod api_key;
pub mod json;

pub use api_key::ApiKey;
pub use json::JsonBody;
