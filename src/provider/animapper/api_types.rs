use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub results: Option<Vec<SearchHit>>,
    pub total: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: i64,
    pub media_type: Option<String>,
    pub titles: Titles,
    pub images: Option<CoverImages>,
    pub status: Option<String>,
    pub providers: Option<HashMap<String, ProviderMapping>>,
}

#[derive(Debug, Deserialize)]
pub struct Titles {
    pub en: Option<String>,
    pub ja: Option<String>,
    pub vi: Option<String>,
}

impl Titles {
    /// Preferred display title: English, then Vietnamese, then Japanese
    pub fn preferred(&self) -> Option<String> {
        self.en
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| self.vi.clone().filter(|s| !s.is_empty()))
            .or_else(|| self.ja.clone().filter(|s| !s.is_empty()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImages {
    pub cover_xl: Option<String>,
    pub cover_lg: Option<String>,
    pub cover_md: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMapping {
    pub provider_media_id: Option<String>,
    pub similarity: Option<f64>,
    pub mapping_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MetadataResponse {
    pub success: bool,
    pub result: Option<MetadataResult>,
}

#[derive(Debug, Deserialize)]
pub struct MetadataResult {
    pub providers: Option<HashMap<String, ProviderMapping>>,
    pub titles: Option<Titles>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodesResponse {
    pub provider: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub total: Option<i64>,
    #[serde(default)]
    pub has_next_page: bool,
    pub episodes: Option<Vec<EpisodeEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeEntry {
    pub episode_number: String,
    pub episode_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponse {
    pub server: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    pub cors_proxy_required: Option<bool>,
    pub proxy_headers: Option<HashMap<String, String>>,
    pub url: String,
}

/// Error body attached to 404 responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}
