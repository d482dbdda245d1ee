//! Spaced repetition scheduling core for a flashcard study app.
//!
//! Pure functions only: the caller reads a card's [`SchedulingState`] from
//! storage, maps the review outcome to a quality score, runs
//! [`SpacedRepetition::update`], and persists the returned state.

pub mod error;
pub mod models;
pub mod progress;
pub mod spaced_repetition;

pub use error::SrsError;
pub use models::{Confidence, ReviewStats, SchedulingState};
pub use progress::Progress;
pub use spaced_repetition::SpacedRepetition;
