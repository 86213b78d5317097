// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-exercise performance: daily maxima within a week and week-by-week
//! progression over a window.

use crate::analytics::{LabelValue, XyPoint};
use crate::catalog::DAYS_PER_WEEK;
use crate::models::{DailyLog, DailyPlan, LoggedSet, WorkoutLog, WorkoutPlan};

/// Weight and reps series for one exercise across one week's days.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyPerformance {
    /// Max weight per day, labeled "Día N"
    pub weight: Vec<LabelValue>,
    /// Reps of that max-weight set, labeled "Día N"
    pub reps: Vec<LabelValue>,
}

/// Week-by-week progression for one exercise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progression {
    /// Best weight per week, ascending week order
    pub weight: Vec<XyPoint>,
    /// Reps of the best-weight set per week; never an independent reps max
    pub reps_at_max: Vec<XyPoint>,
}

/// The day's maximum set: strictly greatest weight wins, ties keep the set
/// encountered first in list order. Its reps ride along unmodified.
pub fn day_max_set(sets: &[LoggedSet]) -> Option<&LoggedSet> {
    sets.iter().fold(None, |best: Option<&LoggedSet>, set| match best {
        Some(current) if set.weight <= current.weight => Some(current),
        _ => Some(set),
    })
}

/// Find the day's logged max set for an exercise name, resolving the plan
/// entry first and then its log data by id.
fn day_max_for_exercise<'a>(
    daily_plan: &DailyPlan,
    daily_log: &'a DailyLog,
    exercise: &str,
) -> Option<&'a LoggedSet> {
    if daily_plan.did_not_train {
        return None;
    }
    let planned = daily_plan.exercises.iter().find(|e| e.exercise == exercise)?;
    let logged = daily_log.get(&planned.id)?;
    day_max_set(&logged.sets)
}

/// Per-day maxima for one exercise in one week.
///
/// Emits one point per day that has a logged set; days without a plan
/// entry, without a log, or without sets contribute nothing.
pub fn weekly_exercise_performance(
    plan: &WorkoutPlan,
    log: &WorkoutLog,
    week: u32,
    exercise: &str,
) -> WeeklyPerformance {
    let mut performance = WeeklyPerformance::default();

    let Some(weekly_log) = log.get(&week) else {
        return performance;
    };

    for day in 1..=DAYS_PER_WEEK {
        let Some(daily_log) = weekly_log.get(&day) else {
            continue;
        };
        let Some(daily_plan) = plan.get(&week).and_then(|w| w.get(&day)) else {
            continue;
        };

        if let Some(max_set) = day_max_for_exercise(daily_plan, daily_log, exercise) {
            let label = format!("Día {}", day);
            performance
                .weight
                .push(LabelValue::new(label.clone(), max_set.weight));
            performance
                .reps
                .push(LabelValue::new(label, f64::from(max_set.reps)));
        }
    }

    performance
}

/// Week-by-week best set for one exercise, bounded by a window length in
/// weeks (4, 13, 26 or 52).
///
/// For each logged week the single best set across all days is selected
/// with the same tie-break as [`day_max_set`]; weeks whose best weight is
/// not positive are skipped. Points come out in ascending week order.
pub fn exercise_progression(
    plan: &WorkoutPlan,
    log: &WorkoutLog,
    exercise: &str,
    window_weeks: u32,
) -> Progression {
    let mut progression = Progression::default();

    for (&week, weekly_log) in log {
        if week > window_weeks {
            continue;
        }

        let mut week_best: Option<&LoggedSet> = None;
        for (&day, daily_log) in weekly_log {
            let Some(daily_plan) = plan.get(&week).and_then(|w| w.get(&day)) else {
                continue;
            };
            if let Some(max_set) = day_max_for_exercise(daily_plan, daily_log, exercise) {
                match week_best {
                    Some(best) if max_set.weight <= best.weight => {}
                    _ => week_best = Some(max_set),
                }
            }
        }

        if let Some(best) = week_best.filter(|s| s.weight > 0.0) {
            progression.weight.push(XyPoint {
                x: week,
                y: best.weight,
            });
            progression.reps_at_max.push(XyPoint {
                x: week,
                y: f64::from(best.reps),
            });
        }
    }

    progression
}

/// Every exercise name appearing anywhere in the plan, alphabetically.
pub fn distinct_exercises(plan: &WorkoutPlan) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for weekly_plan in plan.values() {
        for daily_plan in weekly_plan.values() {
            for planned in &daily_plan.exercises {
                if !names.contains(&planned.exercise) {
                    names.push(planned.exercise.clone());
                }
            }
        }
    }
    names.sort();
    names
}
