use super::api_types::*;
use crate::{
    ProviderError, Result,
    episode::order_labels,
    provider::{HttpClient, ProviderConfig, ProviderSettings, SearchQuery, StreamingProvider},
    types::{Episode, EpisodeServer, SearchResult, VideoSource, VideoSourceType},
};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Servers the upstream exposes for this catalog
const EPISODE_SERVERS: [&str; 2] = ["DU", "HDX"];

/// Page size for episode listing requests
const EPISODE_PAGE_SIZE: usize = 100;

/// Upstream 404 codes meaning the listing simply does not exist
const NOT_FOUND_CODES: [&str; 2] = ["MAPPING_NOT_FOUND", "EPISODES_NOT_FOUND"];

pub struct AniMapperProvider {
    client: HttpClient,
    config: ProviderConfig,
}

impl Default for AniMapperProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AniMapperProvider {
    /// Create a provider against the production AniMapper API
    pub fn new() -> Self {
        Self::with_config(ProviderConfig::default())
    }

    /// Create a provider with an explicit configuration
    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            client: HttpClient::new(config.base_url.clone()),
            config,
        }
    }

    async fn search_impl(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        // Known-mapping shortcut: one metadata call instead of a search
        if let Some(media_id) = query.media_id {
            let endpoint = format!("/api/v1/metadata?id={media_id}");
            match self.client.get::<MetadataResponse>(&endpoint).await {
                Ok(metadata) => {
                    if let Some(result) = self.mapped_result(metadata, query, media_id) {
                        return Ok(vec![result]);
                    }
                }
                // An error status falls through to free-text search
                Err(ProviderError::Api { status, .. }) => {
                    debug!("Metadata lookup for {media_id} returned {status}");
                }
                Err(e) => return Err(e),
            }
        }

        let endpoint = format!(
            "/api/v1/search?title={}&mediaType=ANIME&limit=20&offset=0",
            urlencoding::encode(&query.query)
        );
        let response: SearchResponse = self.client.get(&endpoint).await?;

        if !response.success {
            return Ok(Vec::new());
        }

        let results = response
            .results
            .unwrap_or_default()
            .into_iter()
            .filter(|hit| {
                // A hit without a providers map is kept; only an explicit
                // map lacking our key filters it out
                hit.providers
                    .as_ref()
                    .is_none_or(|p| p.contains_key(&self.config.provider))
            })
            .map(|hit| {
                let title = hit
                    .titles
                    .preferred()
                    .unwrap_or_else(|| query.query.clone());
                SearchResult::new(hit.id.to_string(), title)
            })
            .collect();

        Ok(results)
    }

    fn mapped_result(
        &self,
        metadata: MetadataResponse,
        query: &SearchQuery,
        media_id: i64,
    ) -> Option<SearchResult> {
        if !metadata.success {
            return None;
        }
        let result = metadata.result?;
        result.providers.as_ref()?.get(&self.config.provider)?;

        let title = result
            .titles
            .as_ref()
            .and_then(Titles::preferred)
            .or_else(|| query.english_title.clone())
            .or_else(|| query.romaji_title.clone())
            .unwrap_or_else(|| query.query.clone());

        Some(SearchResult::new(media_id.to_string(), title))
    }
}

#[async_trait]
impl StreamingProvider for AniMapperProvider {
    fn id(&self) -> &'static str {
        "animevietsub"
    }

    fn name(&self) -> &'static str {
        "AnimeVietSub"
    }

    fn settings(&self) -> ProviderSettings {
        ProviderSettings {
            episode_servers: EPISODE_SERVERS.iter().map(ToString::to_string).collect(),
            supports_dub: false,
        }
    }

    async fn search(&self, query: &SearchQuery) -> Vec<SearchResult> {
        match self.search_impl(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Search failed for '{}': {e}", query.query);
                Vec::new()
            }
        }
    }

    async fn find_episodes(&self, media_id: &str) -> Result<Vec<Episode>> {
        let media_id: i64 = media_id
            .trim()
            .parse()
            .map_err(|_| ProviderError::InvalidMediaId(media_id.to_string()))?;

        let mut entries: Vec<(String, String)> = Vec::new();
        let mut offset = 0usize;

        loop {
            let endpoint = format!(
                "/api/v1/stream/episodes?id={}&provider={}&limit={}&offset={}",
                media_id, self.config.provider, EPISODE_PAGE_SIZE, offset
            );

            let page: EpisodesResponse = match self.client.get(&endpoint).await {
                Ok(page) => page,
                Err(ProviderError::Api { status: 404, message })
                    if is_missing_listing(&message) =>
                {
                    return Err(ProviderError::NotFound(format!(
                        "No episodes found for media id {media_id}"
                    )));
                }
                Err(e) => return Err(e),
            };

            let episodes = page.episodes.unwrap_or_default();
            // An empty page ends the walk even if the upstream claims more
            if episodes.is_empty() {
                break;
            }

            entries.extend(
                episodes
                    .into_iter()
                    .map(|e| (e.episode_number, e.episode_id)),
            );

            if !page.has_next_page {
                break;
            }
            offset += EPISODE_PAGE_SIZE;
        }

        let ordered = order_labels(entries);
        if ordered.is_empty() {
            return Err(ProviderError::NotFound("No episodes found.".to_string()));
        }

        debug!("Listed {} episodes for media id {media_id}", ordered.len());

        Ok(ordered
            .into_iter()
            .map(|(parsed, id)| Episode {
                id,
                number: parsed.base,
                title: parsed.title(),
                url: String::new(),
            })
            .collect())
    }

    async fn find_episode_server(
        &self,
        episode_id: &str,
        server: Option<&str>,
    ) -> Result<EpisodeServer> {
        let server = match server {
            Some(name) if !name.is_empty() && name != "default" => name,
            _ => self.config.default_server.as_str(),
        };

        let endpoint = format!(
            "/api/v1/stream/source?episodeData={}&provider={}&server={}",
            urlencoding::encode(episode_id),
            self.config.provider,
            server
        );
        let source: SourceResponse = self.client.get(&endpoint).await?;

        let source_type = classify_source(source.source_type.as_deref(), &source.url);
        let url = self.client.resolve(&source.url);
        let headers = source.proxy_headers.unwrap_or_default();

        Ok(EpisodeServer {
            server: server.to_string(),
            headers,
            video_sources: vec![VideoSource::new(url, source_type)],
        })
    }
}

/// Classify the upstream type tag and URL. Embed responses are
/// unsupported and always classify as unknown.
fn classify_source(type_tag: Option<&str>, url: &str) -> VideoSourceType {
    if type_tag == Some("HLS") || url.contains(".m3u8") || url.contains("/m3u8/") {
        VideoSourceType::M3u8
    } else if type_tag == Some("EMBED") {
        VideoSourceType::Unknown
    } else if url.contains(".mp4") {
        VideoSourceType::Mp4
    } else {
        VideoSourceType::Unknown
    }
}

/// 404 bodies carry a code telling a missing mapping apart from other
/// upstream failures
fn is_missing_listing(body: &str) -> bool {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.code)
        .is_some_and(|code| NOT_FOUND_CODES.contains(&code.as_str()))
}
