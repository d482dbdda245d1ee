use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-card scheduling state consumed and produced by the scheduler.
///
/// Serialized field names match the study app's card columns
/// (`ef`, `interval`, `reps`, `next_due`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingState {
    #[serde(rename = "ef")]
    pub easiness: f64, // SM-2 easiness factor, >= 1.3
    #[serde(rename = "interval")]
    pub interval_days: i64, // days until next review
    #[serde(rename = "reps")]
    pub repetitions: u32, // consecutive successful reviews since last reset
    pub next_due: DateTime<Utc>,
}

impl SchedulingState {
    /// State for a freshly created card: due immediately for its first review.
    pub fn new(now: DateTime<Utc>) -> Self {
        SchedulingState {
            easiness: 2.5, // SM-2 default
            interval_days: 0,
            repetitions: 0,
            next_due: now,
        }
    }
}

/// Self-reported confidence accompanying a correct answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    /// Parses a confidence label, falling back to `Low` for anything
    /// unrecognized rather than failing.
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => Confidence::Low,
            "medium" => Confidence::Medium,
            "high" => Confidence::High,
            _ => Confidence::Low,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStats {
    pub total_cards: usize,
    pub cards_due: usize,
    pub cards_new: usize,
    pub cards_learning: usize,
    pub cards_mature: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let now = Utc::now();
        let state = SchedulingState::new(now);

        assert_eq!(state.easiness, 2.5);
        assert_eq!(state.interval_days, 0);
        assert_eq!(state.repetitions, 0);
        assert_eq!(state.next_due, now);
    }

    #[test]
    fn test_state_serializes_with_storage_field_names() {
        let state = SchedulingState::new(Utc::now());
        let json = serde_json::to_value(&state).unwrap();

        assert!(json.get("ef").is_some());
        assert!(json.get("interval").is_some());
        assert!(json.get("reps").is_some());
        assert!(json.get("next_due").is_some());
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = SchedulingState {
            easiness: 2.36,
            interval_days: 15,
            repetitions: 3,
            next_due: Utc::now(),
        };

        let json = serde_json::to_string(&state).unwrap();
        let decoded: SchedulingState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_confidence_parse() {
        assert_eq!(Confidence::parse("low"), Confidence::Low);
        assert_eq!(Confidence::parse("medium"), Confidence::Medium);
        assert_eq!(Confidence::parse("high"), Confidence::High);
    }

    #[test]
    fn test_confidence_parse_falls_back_to_low() {
        assert_eq!(Confidence::parse("very-high"), Confidence::Low);
        assert_eq!(Confidence::parse(""), Confidence::Low);
    }

    #[test]
    fn test_confidence_defaults_to_medium() {
        assert_eq!(Confidence::default(), Confidence::Medium);
    }
}
