use crate::caa_record::CaaRecord;
use crate::record_set::CaaRecordSet;
use serde::Serialize;

/// What the caller wants checked: a domain, and optionally the CA expected
/// to issue for it. Without an issuer the lookup runs in discovery mode and
/// only reports what it finds.
#[derive(Debug, Clone, Serialize)]
pub struct IssuanceRequest {
    pub domain: String,
    pub issuer: Option<String>,
}

impl IssuanceRequest {
    pub fn new(domain: impl Into<String>, issuer: Option<String>) -> Self {
        Self {
            domain: domain.into(),
            issuer: issuer.filter(|issuer| !issuer.is_empty()),
        }
    }

    pub fn is_discovery(&self) -> bool {
        self.issuer.is_none()
    }

    pub fn is_wildcard(&self) -> bool {
        self.domain.starts_with("*.")
    }
}

/// Outcome of evaluating one domain level's record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum LevelDecision {
    Authorized { record: CaaRecord },
    Unauthorized,
    Inconclusive,
    CriticalUnknown,
}

impl LevelDecision {
    /// Everything except `Inconclusive` ends the walk at this level.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LevelDecision::Inconclusive)
    }
}

/// Apply the authorization rules to one level's classified records.
///
/// Rules, in priority order: a critical unknown tag is fatal; a set with no
/// issue/issuewild records is inconclusive; discovery mode never decides;
/// wildcard requests consult `issuewild` only; otherwise the `issue` records
/// are scanned in order for an exact issuer match, and a non-empty bucket
/// with no match is a definitive denial.
pub fn evaluate(set: &CaaRecordSet, request: &IssuanceRequest) -> LevelDecision {
    if set.has_critical_unknown() {
        return LevelDecision::CriticalUnknown;
    }

    if !set.is_useful() {
        return LevelDecision::Inconclusive;
    }

    let Some(issuer) = request.issuer.as_deref() else {
        return LevelDecision::Inconclusive;
    };

    if request.is_wildcard() {
        // Known divergence from strict RFC 6844 matching, kept for
        // compatibility with existing deployments: any issuewild record
        // authorizes without a value comparison, and an empty bucket defers
        // to the next ancestor instead of falling back to `issue`.
        return match set.issuewild.first() {
            Some(record) => LevelDecision::Authorized {
                record: record.clone(),
            },
            None => LevelDecision::Inconclusive,
        };
    }

    if set.issue.is_empty() {
        return LevelDecision::Inconclusive;
    }

    match set.issue.iter().find(|record| record.matches_issuer(issuer)) {
        Some(record) => LevelDecision::Authorized {
            record: record.clone(),
        },
        None => LevelDecision::Unauthorized,
    }
}
