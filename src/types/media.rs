use serde::{Deserialize, Serialize};

/// Audio/subtitle mode of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubOrDub {
    #[default]
    Sub,
    Dub,
}

impl std::fmt::Display for SubOrDub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sub => write!(f, "sub"),
            Self::Dub => write!(f, "dub"),
        }
    }
}

/// A catalog hit returned to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Upstream media id
    pub id: String,
    /// Display title after language fallback
    pub title: String,
    /// Always empty; playback goes through episode ids, not page URLs
    pub url: String,
    /// The catalog only carries subtitled releases
    pub sub_or_dub: SubOrDub,
}

impl SearchResult {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: String::new(),
            sub_or_dub: SubOrDub::Sub,
        }
    }
}
