use crate::ports::CaaLookup;
use caa_guard_domain::{
    evaluate, CaaRecord, CaaRecordSet, DomainError, IssuanceRequest, LabelChain, LevelDecision,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// One queried level of the label chain: the classified records it returned
/// and what they meant for the request.
#[derive(Debug, Clone, Serialize)]
pub struct LevelReport {
    pub domain: String,
    pub set: CaaRecordSet,
    pub decision: LevelDecision,
}

/// Terminal result of a hierarchy walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WalkOutcome {
    /// An issue/issuewild record at `domain` permits the requested issuer.
    Authorized { domain: String, record: CaaRecord },
    /// `domain` carries issue records and none of them name the issuer.
    Unauthorized { domain: String },
    /// `domain` carries an unrecognized critical tag; issuance must not
    /// proceed no matter what the rest of the chain says.
    CriticalUnknown { domain: String },
    /// The chain was exhausted without finding actionable records. Absence
    /// of CAA records is not a denial.
    NoCaaFound,
    /// Discovery mode walked the whole chain and reported what it found.
    DiscoveryComplete,
}

impl WalkOutcome {
    pub fn is_denial(&self) -> bool {
        matches!(
            self,
            WalkOutcome::Unauthorized { .. } | WalkOutcome::CriticalUnknown { .. }
        )
    }
}

/// A query failure pinned to the domain level at which it occurred.
#[derive(Error, Debug, Clone)]
#[error("[{domain}] {source}")]
pub struct WalkError {
    pub domain: String,
    #[source]
    pub source: DomainError,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalkReport {
    pub request: IssuanceRequest,
    pub levels: Vec<LevelReport>,
    pub outcome: WalkOutcome,
}

/// Walks a domain's label chain most-specific-first, querying CAA records at
/// each level and evaluating them until a terminal decision is reached or
/// the chain is exhausted.
///
/// Strictly sequential: a level is queried only after the previous one came
/// back inconclusive. A single query failure aborts the walk; there are no
/// retries.
pub struct CheckIssuanceUseCase {
    lookup: Arc<dyn CaaLookup>,
}

impl CheckIssuanceUseCase {
    pub fn new(lookup: Arc<dyn CaaLookup>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self, request: &IssuanceRequest) -> Result<WalkReport, WalkError> {
        let chain = LabelChain::new(&request.domain);
        let mut levels = Vec::with_capacity(chain.len());

        for domain in &chain {
            let records = self.lookup.lookup_caa(domain).await.map_err(|source| {
                tracing::error!(domain = %domain, error = %source, "CAA query failed");
                WalkError {
                    domain: domain.clone(),
                    source,
                }
            })?;

            let set = CaaRecordSet::classify(records);
            let decision = evaluate(&set, request);

            tracing::debug!(
                domain = %domain,
                records = set.len(),
                decision = ?decision,
                "CAA level evaluated"
            );

            let terminal = match &decision {
                LevelDecision::Authorized { record } => Some(WalkOutcome::Authorized {
                    domain: domain.clone(),
                    record: record.clone(),
                }),
                LevelDecision::Unauthorized => Some(WalkOutcome::Unauthorized {
                    domain: domain.clone(),
                }),
                LevelDecision::CriticalUnknown => Some(WalkOutcome::CriticalUnknown {
                    domain: domain.clone(),
                }),
                LevelDecision::Inconclusive => None,
            };

            levels.push(LevelReport {
                domain: domain.clone(),
                set,
                decision,
            });

            if let Some(outcome) = terminal {
                match &outcome {
                    WalkOutcome::Authorized { domain, record } => {
                        tracing::info!(domain = %domain, record = %record, "Issuer authorized");
                    }
                    WalkOutcome::Unauthorized { domain } => {
                        tracing::warn!(domain = %domain, "Issuer not present in issue set");
                    }
                    WalkOutcome::CriticalUnknown { domain } => {
                        tracing::warn!(domain = %domain, "Critical record with unknown tag");
                    }
                    _ => {}
                }

                return Ok(WalkReport {
                    request: request.clone(),
                    levels,
                    outcome,
                });
            }
        }

        let outcome = if request.is_discovery() {
            WalkOutcome::DiscoveryComplete
        } else {
            WalkOutcome::NoCaaFound
        };

        tracing::debug!(domain = %request.domain, outcome = ?outcome, "Label chain exhausted");

        Ok(WalkReport {
            request: request.clone(),
            levels,
            outcome,
        })
    }
}
