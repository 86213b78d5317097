// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure snapshot transforms.
//!
//! Every store mutation is expressed as `(old UserData, params) → new
//! UserData`; the store applies the transform and persists the result.
//! Nothing here performs I/O, so each contract is testable in isolation.

use crate::models::{CompositionRecord, DailyLog, DailyPlan, UserData};

/// Which goal map a goal mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalScope {
    Monthly,
    Weekly,
}

/// Replace the plan slot at (week, day) wholesale.
pub fn with_daily_plan(data: &UserData, week: u32, day: u32, daily_plan: DailyPlan) -> UserData {
    let mut next = data.clone();
    next.plan.entry(week).or_default().insert(day, daily_plan);
    next
}

/// Replace the log slot at (week, day) wholesale.
pub fn with_daily_log(data: &UserData, week: u32, day: u32, daily_log: DailyLog) -> UserData {
    let mut next = data.clone();
    next.log.entry(week).or_default().insert(day, daily_log);
    next
}

/// Set or clear a goal. Empty text deletes the key; afterwards the map
/// either lacks the key or maps it to exactly `text`.
pub fn with_goal(data: &UserData, scope: GoalScope, key: u32, text: &str) -> UserData {
    let mut next = data.clone();
    let goals = match scope {
        GoalScope::Monthly => &mut next.monthly_goals,
        GoalScope::Weekly => &mut next.weekly_goals,
    };
    if text.is_empty() {
        goals.remove(&key);
    } else {
        goals.insert(key, text.to_string());
    }
    next
}

/// Add a custom warm-up exercise. Inserting an existing name is a no-op.
pub fn with_custom_warmup(data: &UserData, joint: &str, name: &str) -> UserData {
    let mut next = data.clone();
    let list = next
        .custom_warmup_exercises
        .entry(joint.to_string())
        .or_default();
    if !list.iter().any(|n| n == name) {
        list.push(name.to_string());
    }
    next
}

/// Remove a custom warm-up exercise; the joint key is dropped once its list
/// empties, leaving no empty-list residue.
pub fn without_custom_warmup(data: &UserData, joint: &str, name: &str) -> UserData {
    let mut next = data.clone();
    if let Some(list) = next.custom_warmup_exercises.get_mut(joint) {
        list.retain(|n| n != name);
        if list.is_empty() {
            next.custom_warmup_exercises.remove(joint);
        }
    }
    next
}

/// Add a custom main exercise under (group, pattern). Idempotent.
pub fn with_custom_main_exercise(
    data: &UserData,
    group: &str,
    pattern: &str,
    name: &str,
) -> UserData {
    let mut next = data.clone();
    let list = next
        .custom_main_exercises
        .entry(group.to_string())
        .or_default()
        .entry(pattern.to_string())
        .or_default();
    if !list.iter().any(|n| n == name) {
        list.push(name.to_string());
    }
    next
}

/// Remove a custom main exercise, cascading cleanup two levels up: an
/// emptied pattern is dropped, and a group with no patterns left is dropped.
pub fn without_custom_main_exercise(
    data: &UserData,
    group: &str,
    pattern: &str,
    name: &str,
) -> UserData {
    let mut next = data.clone();
    if let Some(patterns) = next.custom_main_exercises.get_mut(group) {
        if let Some(list) = patterns.get_mut(pattern) {
            list.retain(|n| n != name);
            if list.is_empty() {
                patterns.remove(pattern);
            }
        }
        if patterns.is_empty() {
            next.custom_main_exercises.remove(group);
        }
    }
    next
}

/// Upsert the composition record for (record.year, record.month).
pub fn with_composition_record(data: &UserData, record: CompositionRecord) -> UserData {
    let mut next = data.clone();
    next.composition_log
        .entry(record.year)
        .or_default()
        .insert(record.month, record);
    next
}

/// Remove a planned exercise and its log entry in one step.
///
/// Log entries are only meaningful together with the plan entry sharing
/// their id; removing both here keeps the two maps from drifting apart.
pub fn without_planned_exercise(
    data: &UserData,
    week: u32,
    day: u32,
    exercise_id: &str,
) -> UserData {
    let mut next = data.clone();
    if let Some(daily_plan) = next.plan.get_mut(&week).and_then(|w| w.get_mut(&day)) {
        daily_plan.exercises.retain(|e| e.id != exercise_id);
    }
    if let Some(daily_log) = next.log.get_mut(&week).and_then(|w| w.get_mut(&day)) {
        daily_log.remove(exercise_id);
    }
    next
}

/// Update display name and email; username and password untouched.
pub fn with_profile(data: &UserData, name: &str, email: &str) -> UserData {
    let mut next = data.clone();
    next.profile.name = name.to_string();
    next.profile.email = email.to_string();
    next
}

/// Replace the password. The current-password check lives in the store.
pub fn with_password(data: &UserData, new_password: &str) -> UserData {
    let mut next = data.clone();
    next.profile.password = new_password.to_string();
    next
}
