//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services talk to the player through the `Interaction` trait
//! but are themselves concrete structs, not traits.

mod guess;
mod learning;

pub use guess::{GuessService, RoundOutcome};
pub use learning::LearningService;
