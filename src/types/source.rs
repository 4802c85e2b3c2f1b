use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single episode entry, emitted in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Opaque upstream episode identifier
    pub id: String,
    /// Integer base of the episode label; annotations only affect the
    /// title and the position in the listing
    pub number: u64,
    /// Display title, e.g. "Episode 195" or "Episode 195_end"
    pub title: String,
    /// Always empty
    pub url: String,
}

/// Container format of a resolved video source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VideoSourceType {
    M3u8,
    Mp4,
    #[default]
    Unknown,
}

impl std::fmt::Display for VideoSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::M3u8 => write!(f, "m3u8"),
            Self::Mp4 => write!(f, "mp4"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A playable source handed back to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSource {
    pub url: String,
    #[serde(rename = "type")]
    pub source_type: VideoSourceType,
    /// Always "auto"; the upstream exposes no per-quality variants
    pub quality: String,
    /// Subtitles are burned into the upstream streams
    pub subtitles: Vec<String>,
}

impl VideoSource {
    pub fn new(url: impl Into<String>, source_type: VideoSourceType) -> Self {
        Self {
            url: url.into(),
            source_type,
            quality: "auto".to_string(),
            subtitles: Vec::new(),
        }
    }
}

/// Result of resolving an episode against one server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeServer {
    /// Server the source was resolved from
    pub server: String,
    /// Proxy headers the host must attach verbatim when fetching
    pub headers: HashMap<String, String>,
    pub video_sources: Vec<VideoSource>,
}
