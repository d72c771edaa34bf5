pub mod evaluation;
pub mod strategies;

pub use evaluation::{MoveEvaluator, DEFAULT_CORNER_BONUS};
pub use strategies::{FixedPolicy, GreedyPolicy, MovePolicy};
