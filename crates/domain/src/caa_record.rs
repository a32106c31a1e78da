use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit 128 of the flags octet marks a record as critical (RFC 6844 §5.1).
pub const CRITICAL_BIT: u8 = 0b1000_0000;

/// CAA (Certification Authority Authorization) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaRecord {
    pub flags: u8,

    pub tag: String,

    pub value: String,
}

impl CaaRecord {
    pub fn new(flags: u8, tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            flags,
            tag: tag.into(),
            value: value.into(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.flags & CRITICAL_BIT != 0
    }

    pub fn tag_class(&self) -> CaaTagClass {
        CaaTagClass::from_tag(&self.tag)
    }

    /// The issuer domain carried by an `issue`/`issuewild` value: surrounding
    /// whitespace stripped and anything from the first `;` parameter
    /// separator onward discarded.
    pub fn issuer_value(&self) -> &str {
        let trimmed = self.value.trim();
        match trimmed.find(';') {
            Some(index) => trimmed[..index].trim(),
            None => trimmed,
        }
    }

    /// Exact, case-sensitive comparison of the normalized value against an
    /// issuer name. `"ca.example.com"` does not match `"sub.ca.example.com"`.
    pub fn matches_issuer(&self, issuer: &str) -> bool {
        self.issuer_value() == issuer
    }
}

impl fmt::Display for CaaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.flags, self.tag, self.value)
    }
}

/// Case-insensitive classification of a CAA tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaaTagClass {
    Issue,
    IssueWild,
    Iodef,
    Unknown,
}

impl CaaTagClass {
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("issue") {
            CaaTagClass::Issue
        } else if tag.eq_ignore_ascii_case("issuewild") {
            CaaTagClass::IssueWild
        } else if tag.eq_ignore_ascii_case("iodef") {
            CaaTagClass::Iodef
        } else {
            CaaTagClass::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaaTagClass::Issue => "issue",
            CaaTagClass::IssueWild => "issuewild",
            CaaTagClass::Iodef => "iodef",
            CaaTagClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CaaTagClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
