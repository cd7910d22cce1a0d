//! Turn engine: guess resolution and game hosting.
//!
//! ## Key Types
//!
//! - `GameHost`: owns deck, hands, and RNG; sequences turns; detects game over
//! - `GamePhase`: `Uninitialized -> InProgress -> Finished`
//! - `GuessOutcome`: correct or incorrect, for a fully validated guess
//! - `GameResult`: winner or draw, once finished

pub mod host;
pub mod resolver;

pub use host::{GameHost, GamePhase, GameResult};
pub use resolver::GuessOutcome;
