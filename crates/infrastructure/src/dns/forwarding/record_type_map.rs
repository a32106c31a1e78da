//! Mapping between `caa_guard_domain::RecordType` and
//! `hickory_proto::rr::RecordType`.

use caa_guard_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::CAA => HickoryRecordType::CAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            // hickory has no first-class DNAME type; the raw code still
            // round-trips through the wire format.
            RecordType::DNAME => HickoryRecordType::Unknown(RecordType::DNAME.to_u16()),
        }
    }

    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
