// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Muscle-group and movement-pattern frequency over a tracking month.

use crate::analytics::LabelValue;
use crate::catalog::{weeks_for_month, DAYS_PER_WEEK};
use crate::models::{DailyPlan, WorkoutPlan};

/// Frequency counts for a whole month, unfiltered.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySummary {
    /// Occurrences per muscle group, descending
    pub by_muscle_group: Vec<LabelValue>,
    /// Occurrences per movement pattern, descending
    pub by_pattern: Vec<LabelValue>,
    /// False when the month's weeks hold no planned exercises at all
    pub has_data: bool,
}

/// Frequency counts within one muscle group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupFrequencySummary {
    /// Occurrences per movement pattern within the group, descending
    pub by_pattern: Vec<LabelValue>,
    /// Occurrences per exercise within the group, descending
    pub by_exercise: Vec<LabelValue>,
    /// False when the group never appears in the month
    pub has_data: bool,
}

/// Insertion-ordered counter. Descending stable sort over this preserves
/// first-encountered order between equal counts.
#[derive(Default)]
struct CountBag(Vec<(String, u32)>);

impl CountBag {
    fn bump(&mut self, label: &str) {
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => self.0.push((label.to_string(), 1)),
        }
    }

    fn into_sorted(self) -> Vec<LabelValue> {
        let mut counts = self.0;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(label, n)| LabelValue::new(label, f64::from(n)))
            .collect()
    }
}

/// Visit every day of the month that counts for frequency aggregation:
/// present in the plan, at least one exercise, and not marked as skipped.
/// The deload flag never excludes a day.
fn for_each_counting_day(plan: &WorkoutPlan, month: u32, mut visit: impl FnMut(&DailyPlan)) {
    for week in weeks_for_month(month) {
        let Some(weekly_plan) = plan.get(&week) else {
            continue;
        };
        for day in 1..=DAYS_PER_WEEK {
            if let Some(daily_plan) = weekly_plan.get(&day) {
                if !daily_plan.exercises.is_empty() && !daily_plan.did_not_train {
                    visit(daily_plan);
                }
            }
        }
    }
}

/// Count muscle-group and pattern occurrences across a month.
pub fn monthly_frequency(plan: &WorkoutPlan, month: u32) -> FrequencySummary {
    let mut muscle_counts = CountBag::default();
    let mut pattern_counts = CountBag::default();
    let mut has_data = false;

    for_each_counting_day(plan, month, |daily_plan| {
        has_data = true;
        for exercise in &daily_plan.exercises {
            muscle_counts.bump(&exercise.muscle_group);
            pattern_counts.bump(&exercise.pattern);
        }
    });

    FrequencySummary {
        by_muscle_group: muscle_counts.into_sorted(),
        by_pattern: pattern_counts.into_sorted(),
        has_data,
    }
}

/// Count pattern and exercise occurrences for one muscle group across a month.
pub fn monthly_group_frequency(
    plan: &WorkoutPlan,
    month: u32,
    muscle_group: &str,
) -> GroupFrequencySummary {
    let mut pattern_counts = CountBag::default();
    let mut exercise_counts = CountBag::default();

    for_each_counting_day(plan, month, |daily_plan| {
        for exercise in &daily_plan.exercises {
            if exercise.muscle_group == muscle_group {
                pattern_counts.bump(&exercise.pattern);
                exercise_counts.bump(&exercise.exercise);
            }
        }
    });

    let by_pattern = pattern_counts.into_sorted();
    let by_exercise = exercise_counts.into_sorted();
    let has_data = !by_pattern.is_empty() || !by_exercise.is_empty();

    GroupFrequencySummary {
        by_pattern,
        by_exercise,
        has_data,
    }
}

/// Whether any day of the month's weeks plans at least one exercise.
pub fn month_has_planned_exercises(plan: &WorkoutPlan, month: u32) -> bool {
    weeks_for_month(month).into_iter().any(|week| {
        plan.get(&week).is_some_and(|weekly_plan| {
            (1..=DAYS_PER_WEEK).any(|day| {
                weekly_plan
                    .get(&day)
                    .is_some_and(|daily_plan| !daily_plan.exercises.is_empty())
            })
        })
    })
}
