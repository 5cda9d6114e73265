pub mod match_request;
pub mod match_response;

pub use match_request::{AvailabilityStatus, MatchRequest};
pub use match_response::{build_response, CandidateMatchDto, ScoreBreakdownDto, ENGINE_VERSION};
