#![allow(dead_code)]
use caa_guard_domain::caa_record::CRITICAL_BIT;
use caa_guard_domain::CaaRecord;

pub struct CaaRecordBuilder {
    flags: u8,
    tag: String,
    value: String,
}

impl CaaRecordBuilder {
    pub fn new() -> Self {
        Self {
            flags: 0,
            tag: "issue".to_string(),
            value: "ca.example.net".to_string(),
        }
    }

    pub fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    pub fn critical(mut self) -> Self {
        self.flags |= CRITICAL_BIT;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn build(self) -> CaaRecord {
        CaaRecord::new(self.flags, self.tag, self.value)
    }
}

impl Default for CaaRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn issue(value: &str) -> CaaRecord {
    CaaRecordBuilder::new().tag("issue").value(value).build()
}

pub fn issuewild(value: &str) -> CaaRecord {
    CaaRecordBuilder::new().tag("issuewild").value(value).build()
}

pub fn iodef(value: &str) -> CaaRecord {
    CaaRecordBuilder::new().tag("iodef").value(value).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caa_record_builder() {
        let record = CaaRecordBuilder::new()
            .tag("issuewild")
            .value("wild.example.net")
            .critical()
            .build();

        assert_eq!(record.tag, "issuewild");
        assert_eq!(record.value, "wild.example.net");
        assert!(record.is_critical());
    }
}
