use crate::dns::forwarding::{AnswerSection, DnsForwarder, MessageBuilder, ResponseParser};
use async_trait::async_trait;
use caa_guard_application::ports::CaaLookup;
use caa_guard_domain::{CaaRecord, DomainError, RecordType, ResolverSettings};
use tracing::debug;

/// CAA lookups against one upstream server, transparently following
/// CNAME/DNAME redirects up to the configured bound.
pub struct ForwardingCaaResolver {
    forwarder: DnsForwarder,
    settings: ResolverSettings,
}

impl ForwardingCaaResolver {
    pub fn new(settings: ResolverSettings) -> Self {
        Self {
            forwarder: DnsForwarder::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }
}

#[async_trait]
impl CaaLookup for ForwardingCaaResolver {
    async fn lookup_caa(&self, name: &str) -> Result<Vec<CaaRecord>, DomainError> {
        let mut target = name.to_string();
        let mut redirects = 0u32;

        loop {
            // The bound is checked before the next query goes out, so a
            // redirect chain can never cause more sends than it allows.
            if redirects >= self.settings.max_alias_redirects {
                return Err(DomainError::AliasLoop {
                    name: target,
                    redirects,
                });
            }

            let request = MessageBuilder::build_query(&target, RecordType::CAA)?;
            let response_bytes = self
                .forwarder
                .exchange(
                    &self.settings.upstream,
                    &request,
                    self.settings.query_timeout_ms,
                )
                .await?;

            let response = ResponseParser::parse(&target, &response_bytes)?;

            if !response.is_success() {
                return Err(DomainError::ResolutionFailed {
                    name: target,
                    rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
                });
            }

            match response.answer {
                AnswerSection::Alias {
                    record_type,
                    target: alias,
                } => {
                    debug!(
                        name = %target,
                        alias = %alias,
                        record_type = %record_type,
                        redirects,
                        "Following alias"
                    );
                    target = alias;
                    redirects += 1;
                }
                AnswerSection::Records(records) => {
                    debug!(name = %target, records = records.len(), "CAA lookup complete");
                    return Ok(records);
                }
            }
        }
    }
}
