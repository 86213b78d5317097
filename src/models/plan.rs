// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training plan model: what a day is intended to look like.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::CheckinData;

/// Full plan, keyed by tracking week (1..=52).
pub type WorkoutPlan = BTreeMap<u32, WeeklyPlan>;

/// One week of the plan, keyed by training day (1..=3).
///
/// A missing day means "no plan entered", which is distinct from a present
/// day with `did_not_train` set and from a present day with no exercises.
pub type WeeklyPlan = BTreeMap<u32, DailyPlan>;

/// A planned warm-up entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedWarmup {
    /// Stable id, generated at creation; unique within the day's list
    pub id: String,
    /// Joint the warm-up targets
    pub joint: String,
    /// Exercise name
    pub exercise: String,
}

impl PlannedWarmup {
    pub fn new(joint: impl Into<String>, exercise: impl Into<String>) -> Self {
        Self {
            id: format!("w-{}", uuid::Uuid::new_v4()),
            joint: joint.into(),
            exercise: exercise.into(),
        }
    }
}

/// A planned main exercise.
///
/// `muscle_group`/`pattern`/`exercise` are free-form strings drawn from the
/// catalog plus per-user custom entries, but deliberately not validated
/// against either (the manual-entry path allows arbitrary text).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Stable id, generated at creation; log entries are keyed by this id
    pub id: String,
    /// Muscle group
    pub muscle_group: String,
    /// Movement pattern
    pub pattern: String,
    /// Exercise name
    pub exercise: String,
    /// Free-form notes shown alongside the exercise
    #[serde(default)]
    pub observations: String,
}

impl PlannedExercise {
    pub fn new(
        muscle_group: impl Into<String>,
        pattern: impl Into<String>,
        exercise: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("e-{}", uuid::Uuid::new_v4()),
            muscle_group: muscle_group.into(),
            pattern: pattern.into(),
            exercise: exercise.into(),
            observations: String::new(),
        }
    }
}

/// Plan for a single training day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Training day this plan belongs to (1..=3)
    pub day: u32,
    /// Reduced-intensity flag; never excludes the day from aggregation
    pub is_deload: bool,
    /// Explicitly marked rest/skip day
    #[serde(default)]
    pub did_not_train: bool,
    /// Daily self-report
    pub checkin: CheckinData,
    /// Ordered warm-up list; order is display and iteration order
    pub warmups: Vec<PlannedWarmup>,
    /// Ordered main exercise list; order is display and iteration order
    pub exercises: Vec<PlannedExercise>,
}

impl DailyPlan {
    /// Fresh plan for a day: nothing planned, nothing recorded.
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            is_deload: false,
            did_not_train: false,
            checkin: CheckinData::default(),
            warmups: Vec::new(),
            exercises: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = PlannedExercise::new("Piernas", "Dominante de Rodilla", "Sentadillas");
        let b = PlannedExercise::new("Piernas", "Dominante de Rodilla", "Sentadillas");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("e-"));
    }

    #[test]
    fn test_empty_daily_plan() {
        let plan = DailyPlan::empty(2);
        assert_eq!(plan.day, 2);
        assert!(!plan.is_deload);
        assert!(!plan.did_not_train);
        assert!(plan.warmups.is_empty());
        assert!(plan.exercises.is_empty());
        assert!(plan.checkin.sueno.is_none());
    }

    #[test]
    fn test_daily_plan_deserializes_without_did_not_train() {
        // Older snapshots predate the did_not_train flag.
        let json = r#"{
            "day": 1,
            "is_deload": false,
            "checkin": {},
            "warmups": [],
            "exercises": []
        }"#;
        let plan: DailyPlan = serde_json::from_str(json).unwrap();
        assert!(!plan.did_not_train);
    }
}
