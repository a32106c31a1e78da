use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid server address: {0}")]
    InvalidServerAddress(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout after {timeout_ms}ms waiting on {server}")]
    QueryTimeout { server: String, timeout_ms: u64 },

    #[error("CAA query for {name} answered with {rcode}")]
    ResolutionFailed { name: String, rcode: String },

    #[error("Stuck in alias loop at {name} ({redirects} redirects)")]
    AliasLoop { name: String, redirects: u32 },

    #[error("Answer for {name} contains malformed {record_type} record")]
    MalformedAnswer { name: String, record_type: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No nameservers configured")]
    NoNameservers,
}
