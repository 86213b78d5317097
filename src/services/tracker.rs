// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collector client for completed training logs.
//!
//! Handles:
//! - Flattening a day's log into one record per performed set
//! - Posting each record independently (partial success is expected)
//! - Reporting per-record failures to the caller, without retrying
//!
//! Local persistence and submission are independent: a failed submission
//! never rolls back the local snapshot.

use serde::ser::Serializer;
use serde::Serialize;

use crate::catalog::month_of_week;
use crate::error::AppError;
use crate::models::{CheckinQuality, UserData};

/// Placeholder for fields the check-in does not capture.
const NOT_SPECIFIED: &str = "No especificado";

/// Serialize a missing value as the literal "N/A" the collector expects.
fn or_na<T: Serialize, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_str("N/A"),
    }
}

fn level_or_na(quality: Option<CheckinQuality>) -> String {
    quality.map_or_else(|| "N/A".to_string(), |q| q.as_str().to_string())
}

/// One performed set, flattened for the collector.
///
/// Field names follow the collector's row schema; the endpoint it lives at
/// is configuration (`CURMOVE_TRACKER_URL`).
#[derive(Debug, Clone, Serialize)]
pub struct SetRecord {
    #[serde(rename = "usuario_nombre")]
    pub username: String,
    #[serde(rename = "estado_animo")]
    pub mood_level: String,
    #[serde(rename = "objetivo_mensual")]
    pub monthly_goal: String,
    #[serde(rename = "objetivo_semanal")]
    pub weekly_goal: String,
    #[serde(rename = "nivel_sueno")]
    pub sleep_level: String,
    #[serde(rename = "nivel_nutricion")]
    pub nutrition_level: String,
    #[serde(rename = "nivel_energia")]
    pub energy_level: String,
    #[serde(rename = "semana")]
    pub week: u32,
    #[serde(rename = "dia")]
    pub day: u32,
    #[serde(rename = "ejercicio")]
    pub exercise: String,
    /// 1-based position of the set within its exercise
    #[serde(rename = "serie")]
    pub set_index: u32,
    #[serde(rename = "peso", serialize_with = "or_na")]
    pub weight: Option<f64>,
    #[serde(rename = "repeticiones", serialize_with = "or_na")]
    pub reps: Option<u32>,
    #[serde(serialize_with = "or_na")]
    pub rir: Option<f64>,
    #[serde(serialize_with = "or_na")]
    pub rpe: Option<f64>,
}

/// Flatten one day's log into collector records.
///
/// Walks the day's planned exercises in plan order and their logged sets in
/// list order. Days without a plan or log produce no records; goal texts
/// default to empty and unrecorded check-in levels to "N/A".
pub fn build_set_records(data: &UserData, week: u32, day: u32) -> Vec<SetRecord> {
    let Some(daily_plan) = data.plan.get(&week).and_then(|w| w.get(&day)) else {
        return Vec::new();
    };
    let Some(daily_log) = data.log.get(&week).and_then(|w| w.get(&day)) else {
        return Vec::new();
    };

    let monthly_goal = data
        .monthly_goals
        .get(&month_of_week(week))
        .cloned()
        .unwrap_or_default();
    let weekly_goal = data.weekly_goals.get(&week).cloned().unwrap_or_default();

    let mut records = Vec::new();
    for planned in &daily_plan.exercises {
        let Some(logged) = daily_log.get(&planned.id) else {
            continue;
        };
        for (index, set) in logged.sets.iter().enumerate() {
            records.push(SetRecord {
                username: data.profile.username.clone(),
                mood_level: NOT_SPECIFIED.to_string(),
                monthly_goal: monthly_goal.clone(),
                weekly_goal: weekly_goal.clone(),
                sleep_level: level_or_na(daily_plan.checkin.sueno),
                nutrition_level: level_or_na(daily_plan.checkin.comida),
                energy_level: level_or_na(daily_plan.checkin.energia),
                week,
                day,
                exercise: planned.exercise.clone(),
                set_index: index as u32 + 1,
                weight: Some(set.weight),
                reps: Some(set.reps),
                rir: Some(set.rir),
                rpe: Some(set.rpe),
            });
        }
    }
    records
}

/// A record the collector rejected or never received.
#[derive(Debug, Clone)]
pub struct SubmissionFailure {
    pub exercise: String,
    pub set_index: u32,
    pub error: String,
}

/// Outcome of submitting a batch of records.
#[derive(Debug, Clone, Default)]
pub struct SubmissionReport {
    /// Records the collector accepted
    pub submitted: u32,
    /// Records that failed, in submission order
    pub failures: Vec<SubmissionFailure>,
}

impl SubmissionReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Collector API client.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TrackerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Submit a single record.
    pub async fn submit_record(&self, record: &SetRecord) -> Result<(), AppError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| AppError::Tracker(e.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Tracker(format!("HTTP {}: {}", status, body)))
    }

    /// Submit every record, each independently.
    ///
    /// A failed record never stops the rest of the batch, and nothing is
    /// retried; the report carries the per-record outcomes.
    pub async fn submit_all(&self, records: &[SetRecord]) -> SubmissionReport {
        let mut report = SubmissionReport::default();

        for record in records {
            match self.submit_record(record).await {
                Ok(()) => report.submitted += 1,
                Err(e) => {
                    tracing::warn!(
                        exercise = %record.exercise,
                        set_index = record.set_index,
                        error = %e,
                        "Record submission failed"
                    );
                    report.failures.push(SubmissionFailure {
                        exercise: record.exercise.clone(),
                        set_index: record.set_index,
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            submitted = report.submitted,
            failed = report.failures.len(),
            "Batch submission finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CheckinQuality, DailyLog, DailyPlan, LoggedExerciseData, LoggedSet, PlannedExercise,
        UserProfile,
    };

    fn user_with_logged_day() -> UserData {
        let mut data = UserData::new(UserProfile {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password: "pw".to_string(),
        });

        let mut exercise = PlannedExercise::new("Piernas", "Dominante de Rodilla", "Sentadillas");
        exercise.id = "e-1".to_string();
        let mut daily_plan = DailyPlan::empty(1);
        daily_plan.checkin.sueno = Some(CheckinQuality::Bien);
        daily_plan.exercises.push(exercise);
        data.plan.entry(5).or_default().insert(1, daily_plan);

        let mut daily_log = DailyLog::new();
        daily_log.insert(
            "e-1".to_string(),
            LoggedExerciseData {
                sets: vec![LoggedSet::new(60.0, 5, 2.0, 8.0), LoggedSet::new(62.5, 3, 1.0, 9.0)],
            },
        );
        data.log.entry(5).or_default().insert(1, daily_log);

        data.monthly_goals.insert(2, "Ganar fuerza".to_string());
        data.weekly_goals.insert(5, "Técnica".to_string());

        data
    }

    #[test]
    fn test_build_records_one_per_set() {
        let data = user_with_logged_day();
        let records = build_set_records(&data, 5, 1);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].set_index, 1);
        assert_eq!(records[0].weight, Some(60.0));
        assert_eq!(records[1].set_index, 2);
        assert_eq!(records[1].weight, Some(62.5));
        assert_eq!(records[0].exercise, "Sentadillas");
        assert_eq!(records[0].username, "alice");
    }

    #[test]
    fn test_build_records_resolves_goals_by_window() {
        // Week 5 belongs to month 2; the monthly goal must come from there.
        let data = user_with_logged_day();
        let records = build_set_records(&data, 5, 1);

        assert_eq!(records[0].monthly_goal, "Ganar fuerza");
        assert_eq!(records[0].weekly_goal, "Técnica");
    }

    #[test]
    fn test_build_records_checkin_levels() {
        let data = user_with_logged_day();
        let records = build_set_records(&data, 5, 1);

        assert_eq!(records[0].sleep_level, "bien");
        assert_eq!(records[0].nutrition_level, "N/A");
        assert_eq!(records[0].mood_level, NOT_SPECIFIED);
    }

    #[test]
    fn test_build_records_missing_day_is_empty() {
        let data = user_with_logged_day();
        assert!(build_set_records(&data, 5, 2).is_empty());
        assert!(build_set_records(&data, 6, 1).is_empty());
    }

    #[test]
    fn test_record_wire_field_names() {
        let data = user_with_logged_day();
        let records = build_set_records(&data, 5, 1);

        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["usuario_nombre"], "alice");
        assert_eq!(json["semana"], 5);
        assert_eq!(json["dia"], 1);
        assert_eq!(json["ejercicio"], "Sentadillas");
        assert_eq!(json["serie"], 1);
        assert_eq!(json["peso"], 60.0);
        assert_eq!(json["repeticiones"], 5);
        assert_eq!(json["nivel_sueno"], "bien");
        assert_eq!(json["objetivo_mensual"], "Ganar fuerza");
    }

    #[test]
    fn test_missing_set_values_serialize_as_na() {
        let record = SetRecord {
            username: "alice".to_string(),
            mood_level: NOT_SPECIFIED.to_string(),
            monthly_goal: String::new(),
            weekly_goal: String::new(),
            sleep_level: "N/A".to_string(),
            nutrition_level: "N/A".to_string(),
            energy_level: "N/A".to_string(),
            week: 1,
            day: 1,
            exercise: "Sentadillas".to_string(),
            set_index: 1,
            weight: None,
            reps: None,
            rir: None,
            rpe: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["peso"], "N/A");
        assert_eq!(json["repeticiones"], "N/A");
        assert_eq!(json["rir"], "N/A");
        assert_eq!(json["rpe"], "N/A");
    }
}
