pub mod check_issuance;

pub use check_issuance::{CheckIssuanceUseCase, LevelReport, WalkError, WalkOutcome, WalkReport};
