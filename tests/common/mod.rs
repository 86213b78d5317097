// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use curmove::models::{
    DailyLog, DailyPlan, LoggedExerciseData, LoggedSet, PlannedExercise,
};
use curmove::store::{SnapshotStorage, Store};
use tempfile::TempDir;

/// Create a store backed by a temp directory. The directory guard must stay
/// alive for the duration of the test.
#[allow(dead_code)]
pub fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = Store::open(SnapshotStorage::new(dir.path().join("users.json")))
        .expect("Failed to open store");
    (dir, store)
}

/// A daily plan holding one exercise with a fixed id.
#[allow(dead_code)]
pub fn plan_with_exercise(
    day: u32,
    id: &str,
    muscle_group: &str,
    pattern: &str,
    exercise: &str,
) -> DailyPlan {
    let mut planned = PlannedExercise::new(muscle_group, pattern, exercise);
    planned.id = id.to_string();

    let mut daily_plan = DailyPlan::empty(day);
    daily_plan.exercises.push(planned);
    daily_plan
}

/// A daily log holding one exercise entry with the given sets.
#[allow(dead_code)]
pub fn log_with_sets(exercise_id: &str, sets: Vec<(f64, u32, f64, f64)>) -> DailyLog {
    let mut daily_log = DailyLog::new();
    daily_log.insert(
        exercise_id.to_string(),
        LoggedExerciseData {
            sets: sets
                .into_iter()
                .map(|(weight, reps, rir, rpe)| LoggedSet::new(weight, reps, rir, rpe))
                .collect(),
        },
    );
    daily_log
}
