// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure aggregation over plan/log snapshots.
//!
//! Every function here is side-effect free: it takes the relevant slice of
//! the active user's data plus a time-window/dimension selector and returns
//! chart-ready series. Missing data at any level (week, day, exercise id)
//! degrades to "no contribution", never an error.

pub mod checkin;
pub mod composition;
pub mod frequency;
pub mod performance;

pub use checkin::{monthly_checkin_tally, CheckinTally, QualityTally};
pub use composition::{composition_metric_series, perimeter_series};
pub use frequency::{
    monthly_frequency, monthly_group_frequency, month_has_planned_exercises, FrequencySummary,
    GroupFrequencySummary,
};
pub use performance::{
    day_max_set, distinct_exercises, exercise_progression, weekly_exercise_performance,
    Progression, WeeklyPerformance,
};

use serde::Serialize;

/// A (label, value) data point, ready for bar and doughnut charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelValue {
    pub label: String,
    pub value: f64,
}

impl LabelValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An (x, y) data point, ready for line charts. The x axis is a week or
/// month number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XyPoint {
    pub x: u32,
    pub y: f64,
}
