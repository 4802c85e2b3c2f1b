use crate::{
    Result,
    types::{Episode, EpisodeServer, SearchResult},
};
use async_trait::async_trait;

/// Search input carried over from the host
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Free-text query
    pub query: String,
    /// Upstream media id, when the host already knows the mapping
    pub media_id: Option<i64>,
    /// Host-side English title, used as a title fallback
    pub english_title: Option<String>,
    /// Host-side romanized title, used as a title fallback
    pub romaji_title: Option<String>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_media_id(mut self, media_id: i64) -> Self {
        self.media_id = Some(media_id);
        self
    }

    pub fn with_english_title(mut self, title: impl Into<String>) -> Self {
        self.english_title = Some(title.into());
        self
    }

    pub fn with_romaji_title(mut self, title: impl Into<String>) -> Self {
        self.romaji_title = Some(title.into());
        self
    }
}

/// Capabilities a provider declares to the host
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Servers the host may request sources from
    pub episode_servers: Vec<String>,
    /// Whether a dubbed audio track can be requested
    pub supports_dub: bool,
}

/// Core trait for streaming providers
#[async_trait]
pub trait StreamingProvider: Send + Sync {
    /// Provider identifier (e.g., "animevietsub")
    fn id(&self) -> &'static str;

    /// Human-readable provider name
    fn name(&self) -> &'static str;

    /// Capabilities declared to the host
    fn settings(&self) -> ProviderSettings;

    /// Search the catalog. Failures are invisible to the caller: a
    /// transport or parse error logs a warning and yields an empty list.
    async fn search(&self, query: &SearchQuery) -> Vec<SearchResult>;

    /// List every episode for a media id, in display order. Fails with
    /// `NotFound` when nothing resolves, never with an empty list.
    async fn find_episodes(&self, media_id: &str) -> Result<Vec<Episode>>;

    /// Resolve a playable source from the given server; `None` or
    /// `"default"` selects the provider's default server
    async fn find_episode_server(
        &self,
        episode_id: &str,
        server: Option<&str>,
    ) -> Result<EpisodeServer>;
}
