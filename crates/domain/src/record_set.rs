use crate::caa_record::{CaaRecord, CaaTagClass};
use serde::Serialize;

/// CAA records returned for one domain level, partitioned by tag.
///
/// Every classified record lands in exactly one bucket and keeps its
/// original order relative to the other records of the same bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaaRecordSet {
    pub issue: Vec<CaaRecord>,
    pub issuewild: Vec<CaaRecord>,
    pub iodef: Vec<CaaRecord>,
    pub unknown: Vec<CaaRecord>,
}

impl CaaRecordSet {
    pub fn classify(records: Vec<CaaRecord>) -> Self {
        let mut set = Self::default();
        for record in records {
            match record.tag_class() {
                CaaTagClass::Issue => set.issue.push(record),
                CaaTagClass::IssueWild => set.issuewild.push(record),
                CaaTagClass::Iodef => set.iodef.push(record),
                CaaTagClass::Unknown => set.unknown.push(record),
            }
        }
        set
    }

    /// An unrecognized tag with the critical bit set means issuance must not
    /// proceed, regardless of anything else in the chain.
    pub fn has_critical_unknown(&self) -> bool {
        self.unknown.iter().any(|record| record.is_critical())
    }

    /// Only `issue`/`issuewild` records are actionable for authorization.
    /// A set with nothing but `iodef` or non-critical unknown entries is
    /// treated exactly like an empty response.
    pub fn is_useful(&self) -> bool {
        !self.issue.is_empty() || !self.issuewild.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.issue.len() + self.issuewild.len() + self.iodef.len() + self.unknown.len()
    }

    /// All records in bucket order: issue, issuewild, iodef, unknown.
    pub fn iter(&self) -> impl Iterator<Item = &CaaRecord> {
        self.issue
            .iter()
            .chain(self.issuewild.iter())
            .chain(self.iodef.iter())
            .chain(self.unknown.iter())
    }
}
