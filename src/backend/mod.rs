pub mod http;
pub mod provider;
pub mod types;

pub use http::HttpBackend;
pub use provider::{ShortenBackend, ShortenError};
