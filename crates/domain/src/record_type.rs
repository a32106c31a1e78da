use std::fmt;

/// The record types a CAA lookup touches: the CAA records themselves and the
/// two alias types a response may redirect through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    CAA,
    CNAME,
    DNAME,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::CAA => "CAA",
            RecordType::CNAME => "CNAME",
            RecordType::DNAME => "DNAME",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::CAA => 257,
            RecordType::CNAME => 5,
            RecordType::DNAME => 39,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            257 => Some(RecordType::CAA),
            5 => Some(RecordType::CNAME),
            39 => Some(RecordType::DNAME),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
