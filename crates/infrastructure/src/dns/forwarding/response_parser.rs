use caa_guard_domain::caa_record::CRITICAL_BIT;
use caa_guard_domain::{CaaRecord, DomainError, RecordType};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::rdata::caa::Value;
use hickory_proto::rr::rdata::CAA;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinDecodable, BinDecoder};
use tracing::debug;

/// What the answer section of a CAA response amounts to.
#[derive(Debug, Clone)]
pub enum AnswerSection {
    /// Exactly one alias record: the query must be repeated at the target.
    Alias {
        record_type: RecordType,
        target: String,
    },
    /// CAA records with aliasing done. May be empty; answer records of any
    /// other type are ignored.
    Records(Vec<CaaRecord>),
}

#[derive(Debug, Clone)]
pub struct CaaResponse {
    pub rcode: ResponseCode,
    pub answer: AnswerSection,
}

impl CaaResponse {
    pub fn is_success(&self) -> bool {
        self.rcode == ResponseCode::NoError
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(name: &str, response_bytes: &[u8]) -> Result<CaaResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let answers = message.answers();

        if answers.len() == 1 {
            if let Some(alias) = Self::try_alias(name, &answers[0])? {
                return Ok(CaaResponse {
                    rcode,
                    answer: alias,
                });
            }
        }

        let records: Vec<CaaRecord> = answers.iter().filter_map(Self::to_caa_record).collect();

        debug!(
            name = %name,
            rcode = ?rcode,
            answers = answers.len(),
            records = records.len(),
            "CAA response parsed"
        );

        Ok(CaaResponse {
            rcode,
            answer: AnswerSection::Records(records),
        })
    }

    /// A lone CNAME/DNAME answer redirects the lookup. A record whose header
    /// claims an alias type but whose rdata does not decode as one is
    /// malformed.
    fn try_alias(name: &str, record: &Record) -> Result<Option<AnswerSection>, DomainError> {
        let code = u16::from(record.record_type());

        if code == RecordType::CNAME.to_u16() {
            let target = match record.data() {
                Some(RData::CNAME(cname)) => cname.0.to_utf8(),
                _ => {
                    return Err(DomainError::MalformedAnswer {
                        name: name.to_string(),
                        record_type: RecordType::CNAME.to_string(),
                    })
                }
            };
            return Ok(Some(AnswerSection::Alias {
                record_type: RecordType::CNAME,
                target,
            }));
        }

        if code == RecordType::DNAME.to_u16() {
            let target = Self::decode_dname_target(record).ok_or_else(|| {
                DomainError::MalformedAnswer {
                    name: name.to_string(),
                    record_type: RecordType::DNAME.to_string(),
                }
            })?;
            return Ok(Some(AnswerSection::Alias {
                record_type: RecordType::DNAME,
                target,
            }));
        }

        Ok(None)
    }

    /// hickory carries DNAME rdata as an opaque payload. The target is a
    /// single uncompressed domain name (RFC 6672 §2.1), so it decodes
    /// standalone.
    fn decode_dname_target(record: &Record) -> Option<String> {
        let rdata_bytes = match record.data() {
            Some(RData::Unknown { rdata, .. }) => rdata.anything(),
            _ => return None,
        };

        let mut decoder = BinDecoder::new(rdata_bytes);
        Name::read(&mut decoder).ok().map(|target| target.to_utf8())
    }

    fn to_caa_record(record: &Record) -> Option<CaaRecord> {
        let caa = match record.data() {
            Some(RData::CAA(caa)) => caa,
            _ => return None,
        };

        let flags = if caa.issuer_critical() { CRITICAL_BIT } else { 0 };
        let tag = caa.tag().as_str().to_string();
        let value = Self::caa_value_string(caa);

        Some(CaaRecord::new(flags, tag, value))
    }

    /// Rebuild the presentation form of a CAA value from hickory's
    /// structured rdata.
    fn caa_value_string(caa: &CAA) -> String {
        match caa.value() {
            Value::Issuer(issuer, parameters) => {
                let mut out = issuer
                    .as_ref()
                    .map(|name| name.to_utf8().trim_end_matches('.').to_string())
                    .unwrap_or_default();

                for parameter in parameters {
                    out.push_str("; ");
                    out.push_str(parameter.key());
                    out.push('=');
                    out.push_str(parameter.value());
                }

                // An issuer-less value is the explicit "no CA may issue"
                // form and renders as a bare separator.
                if out.is_empty() {
                    out.push(';');
                }

                out
            }
            Value::Url(url) => url.to_string(),
            Value::Unknown(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
