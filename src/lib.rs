pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use config::{ConfigError, EngineConfig};
pub use error::{AiError, GameError, Result};
