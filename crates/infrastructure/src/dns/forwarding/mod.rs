mod forwarder;
mod message_builder;
mod record_type_map;
mod response_parser;

pub use forwarder::DnsForwarder;
pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{AnswerSection, CaaResponse, ResponseParser};
