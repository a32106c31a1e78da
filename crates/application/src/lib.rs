//! CAA Guard Application Layer
pub mod ports;
pub mod use_cases;

pub use ports::CaaLookup;
pub use use_cases::{CheckIssuanceUseCase, LevelReport, WalkError, WalkOutcome, WalkReport};
