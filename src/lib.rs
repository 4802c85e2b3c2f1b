//! AnimeVietSub streaming provider adapter backed by the AniMapper
//! aggregation API: catalog search, episode listing with normalized
//! display ordering, and video source resolution.

mod episode;
mod provider;
mod types;


pub use episode::{EpisodeKind, ParsedEpisode, order_labels};
pub use provider::{
    AniMapperProvider, HttpClient, ProviderConfig, ProviderSettings, SearchQuery,
    StreamingProvider,
};
pub use types::{Episode, EpisodeServer, SearchResult, SubOrDub, VideoSource, VideoSourceType};

/// Provider result type
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Provider error types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid media id: {0}")]
    InvalidMediaId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Create a provider wired to the production AniMapper API
#[must_use]
pub fn create_default_provider() -> AniMapperProvider {
    AniMapperProvider::new()
}
