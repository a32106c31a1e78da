use serde::{Deserialize, Serialize};

/// Resolver configuration for one run. The upstream server is selected once
/// before the walk begins and every query of the run goes to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverSettings {
    pub upstream: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_max_alias_redirects")]
    pub max_alias_redirects: u32,
}

impl ResolverSettings {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            upstream: upstream.into(),
            query_timeout_ms: default_query_timeout_ms(),
            max_alias_redirects: default_max_alias_redirects(),
        }
    }
}

fn default_query_timeout_ms() -> u64 {
    5000
}

fn default_max_alias_redirects() -> u32 {
    10
}
