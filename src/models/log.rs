// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout log model: what was actually performed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full log, keyed by tracking week (1..=52).
pub type WorkoutLog = BTreeMap<u32, WeeklyLog>;

/// One week of the log, keyed by training day (1..=3).
pub type WeeklyLog = BTreeMap<u32, DailyLog>;

/// One day of the log, keyed by the id of the planned exercise it belongs to.
///
/// An entry is only meaningful together with the plan entry sharing its id;
/// removing a planned exercise must remove its log entry in the same
/// mutation (see the store's `remove_planned_exercise`).
pub type DailyLog = BTreeMap<String, LoggedExerciseData>;

/// Everything logged against one planned exercise on one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggedExerciseData {
    /// Ordered set list; order matters for the max-set tie-break
    pub sets: Vec<LoggedSet>,
}

/// A single performed set.
///
/// RIR/RPE are user-entered subjective intensity numbers; the core stores
/// them without validating against a fixed scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Stable id, generated at creation; unique within the set list
    pub id: String,
    /// Weight moved (kg)
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Reps in reserve
    pub rir: f64,
    /// Rate of perceived exertion
    pub rpe: f64,
}

impl LoggedSet {
    pub fn new(weight: f64, reps: u32, rir: f64, rpe: f64) -> Self {
        Self {
            id: format!("set-{}", uuid::Uuid::new_v4()),
            weight,
            reps,
            rir,
            rpe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_ids_are_unique() {
        let a = LoggedSet::new(60.0, 5, 2.0, 8.0);
        let b = LoggedSet::new(60.0, 5, 2.0, 8.0);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("set-"));
    }

    #[test]
    fn test_daily_log_round_trip() {
        let mut daily: DailyLog = DailyLog::new();
        daily.insert(
            "e-1".to_string(),
            LoggedExerciseData {
                sets: vec![LoggedSet::new(60.0, 5, 2.0, 8.0)],
            },
        );

        let json = serde_json::to_string(&daily).unwrap();
        let back: DailyLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back["e-1"].sets.len(), 1);
        assert_eq!(back["e-1"].sets[0].weight, 60.0);
        assert_eq!(back["e-1"].sets[0].reps, 5);
    }
}
