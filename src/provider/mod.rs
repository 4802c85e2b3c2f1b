mod animapper;
mod http;
mod traits;

pub use animapper::AniMapperProvider;
pub use http::HttpClient;
pub use traits::{ProviderSettings, SearchQuery, StreamingProvider};

const API_BASE_URL: &str = "https://api.animapper.net";
const PROVIDER_NAME: &str = "ANIMEVIETSUB";
const DEFAULT_SERVER: &str = "DU";

/// Provider base configuration. Immutable once the provider is built;
/// there is no process-wide state.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Upstream API base URL, without a trailing slash
    pub base_url: String,
    /// Key identifying this catalog in the upstream provider mappings
    pub provider: String,
    /// Server queried when the host asks for "default"
    pub default_server: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            provider: PROVIDER_NAME.to_string(),
            default_server: DEFAULT_SERVER.to_string(),
        }
    }
}

impl ProviderConfig {
    /// Create a configuration against a custom API base
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the provider key
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Set the default server
    pub fn with_default_server(mut self, server: impl Into<String>) -> Self {
        self.default_server = server.into();
        self
    }
}
