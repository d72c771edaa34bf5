pub mod board;
pub mod rules;
pub mod score;
pub mod state;
pub mod types;

pub use board::Board;
pub use rules::Rules;
pub use state::{GameState, Turn, TurnEvent};
pub use types::{Cell, Move, Outcome, Player, Position};
