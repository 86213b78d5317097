//! User profile and per-user data container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{CompositionLog, WorkoutLog, WorkoutPlan};

/// The whole persisted data set: every account, keyed by username.
pub type AllUsers = BTreeMap<String, UserData>;

/// Per-user custom warm-up catalog: joint → exercise names.
pub type ExerciseList = BTreeMap<String, Vec<String>>;

/// Per-user custom main-exercise catalog: muscle group → pattern → names.
pub type MainExerciseData = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Free-text goals keyed by tracking month (1..=12).
pub type MonthlyGoals = BTreeMap<u32, String>;

/// Free-text goals keyed by tracking week (1..=52).
pub type WeeklyGoals = BTreeMap<u32, String>;

/// Account profile.
///
/// The password is stored and compared verbatim: this is a local
/// single-user tool, not a hardened login system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique, immutable account key
    pub username: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Plain-text password
    pub password: String,
}

/// Everything one account owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub profile: UserProfile,
    #[serde(default)]
    pub plan: WorkoutPlan,
    #[serde(default)]
    pub log: WorkoutLog,
    #[serde(default)]
    pub monthly_goals: MonthlyGoals,
    #[serde(default)]
    pub weekly_goals: WeeklyGoals,
    #[serde(default)]
    pub custom_warmup_exercises: ExerciseList,
    #[serde(default)]
    pub custom_main_exercises: MainExerciseData,
    #[serde(default)]
    pub composition_log: CompositionLog,
}

impl UserData {
    /// A fresh account with every sub-collection empty.
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            plan: WorkoutPlan::new(),
            log: WorkoutLog::new(),
            monthly_goals: MonthlyGoals::new(),
            weekly_goals: WeeklyGoals::new(),
            custom_warmup_exercises: ExerciseList::new(),
            custom_main_exercises: MainExerciseData::new(),
            composition_log: CompositionLog::new(),
        }
    }
}
