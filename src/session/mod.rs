pub mod match_session;

pub use match_session::{GameSnapshot, MatchSession, MatchUpdate, TimerRequest, TimerToken};
