use crate::models::{ReviewStats, SchedulingState};
use crate::spaced_repetition::SpacedRepetition;
use chrono::{DateTime, Duration, Utc};

// Cards with an interval at least this long count as mature.
const MATURE_INTERVAL_DAYS: i64 = 21;

// How many calendar days back the streak scan looks.
const STREAK_WINDOW_DAYS: u32 = 30;

/// Progress statistics derived from scheduling state and review history.
pub struct Progress;

impl Progress {
    /// Buckets a deck's cards by learning stage at `now`.
    pub fn review_stats(states: &[SchedulingState], now: DateTime<Utc>) -> ReviewStats {
        ReviewStats {
            total_cards: states.len(),
            cards_due: states
                .iter()
                .filter(|state| SpacedRepetition::is_due(state.next_due, now))
                .count(),
            cards_new: states.iter().filter(|state| state.repetitions == 0).count(),
            cards_learning: states
                .iter()
                .filter(|state| {
                    state.repetitions > 0 && state.interval_days < MATURE_INTERVAL_DAYS
                })
                .count(),
            cards_mature: states
                .iter()
                .filter(|state| state.interval_days >= MATURE_INTERVAL_DAYS)
                .count(),
        }
    }

    /// Rounded percentage of reviews that passed (quality >= 3).
    pub fn accuracy(qualities: &[i32]) -> u32 {
        if qualities.is_empty() {
            return 0;
        }
        let correct = qualities.iter().filter(|&&quality| quality >= 3).count();
        ((correct as f64 / qualities.len() as f64) * 100.0).round() as u32
    }

    /// Consecutive calendar days ending at `now` with at least one review,
    /// looking back at most 30 days.
    pub fn streak_days(review_times: &[DateTime<Utc>], now: DateTime<Utc>) -> u32 {
        let mut streak = 0;
        let mut day = now.date_naive();

        for _ in 0..STREAK_WINDOW_DAYS {
            if review_times.iter().any(|time| time.date_naive() == day) {
                streak += 1;
                day = day - Duration::days(1);
            } else {
                break;
            }
        }
        streak
    }
}
