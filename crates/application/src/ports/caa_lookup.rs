use async_trait::async_trait;
use caa_guard_domain::{CaaRecord, DomainError};

/// Port for one CAA query against the configured upstream resolver.
///
/// Implementations follow CNAME/DNAME redirects transparently, so callers
/// only ever see the records of the final, non-alias answer. An empty list
/// is a valid "no records at this name" response, not an error.
#[async_trait]
pub trait CaaLookup: Send + Sync {
    async fn lookup_caa(&self, name: &str) -> Result<Vec<CaaRecord>, DomainError>;
}
