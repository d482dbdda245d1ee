use crate::error::SrsError;
use crate::models::{Confidence, SchedulingState};
use chrono::{DateTime, Duration, Utc};

// Easiness floor; below this, review intervals degrade pathologically.
const MIN_EASINESS: f64 = 1.3;

/// SM-2 spaced repetition algorithm implementation
pub struct SpacedRepetition;

impl SpacedRepetition {
    /// Computes the scheduling state following a review of the given quality
    /// (0 = complete failure, 4 = perfect recall), evaluated at `now`.
    ///
    /// The input state is never modified; callers persist the returned value.
    pub fn update(
        state: &SchedulingState,
        quality: i32,
        now: DateTime<Utc>,
    ) -> Result<SchedulingState, SrsError> {
        if !(0..=4).contains(&quality) {
            return Err(SrsError::InvalidQuality { quality });
        }

        let (repetitions, interval_days) = if quality < 3 {
            // Failed review: the card restarts its schedule from scratch
            (0, 1)
        } else {
            let repetitions = state.repetitions + 1;
            let interval_days = match repetitions {
                1 => 1,
                2 => 6,
                // Grows by the easiness the card had going into this review;
                // floored at 1 so a fresh card (interval 0) can't round to 0
                _ => ((state.interval_days as f64) * state.easiness)
                    .round()
                    .max(1.0) as i64,
            };
            (repetitions, interval_days)
        };

        // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)), floored at 1.3.
        // Applied on both branches, from the pre-review easiness.
        let q = quality as f64;
        let easiness =
            (state.easiness + (0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02))).max(MIN_EASINESS);

        let next_due = now + Duration::days(interval_days);

        log::debug!(
            "review quality {}: reps {} -> {}, interval {} -> {} days, ef {:.2} -> {:.2}",
            quality,
            state.repetitions,
            repetitions,
            state.interval_days,
            interval_days,
            state.easiness,
            easiness
        );

        Ok(SchedulingState {
            easiness,
            interval_days,
            repetitions,
            next_due,
        })
    }

    /// [`Self::update`] evaluated at the current time.
    pub fn update_now(state: &SchedulingState, quality: i32) -> Result<SchedulingState, SrsError> {
        Self::update(state, quality, Utc::now())
    }

    /// Maps a review outcome onto the algorithm's 0-4 quality scale.
    ///
    /// Any incorrect answer is a complete failure regardless of confidence.
    /// Medium and high confidence both map to 4.
    pub fn quality_from_answer(correct: bool, confidence: Confidence) -> i32 {
        if !correct {
            return 0;
        }
        match confidence {
            Confidence::Low => 3,
            Confidence::Medium | Confidence::High => 4,
        }
    }

    /// Check if a card is due for review at `now` (inclusive).
    pub fn is_due(next_due: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        next_due <= now
    }

    /// [`Self::is_due`] against the current time.
    pub fn is_due_now(next_due: DateTime<Utc>) -> bool {
        Self::is_due(next_due, Utc::now())
    }

    /// Filters states down to the cards due at `now`, earliest due first.
    pub fn due_cards(states: &[SchedulingState], now: DateTime<Utc>) -> Vec<&SchedulingState> {
        let mut due: Vec<&SchedulingState> = states
            .iter()
            .filter(|state| Self::is_due(state.next_due, now))
            .collect();
        due.sort_by_key(|state| state.next_due);
        due
    }
}
