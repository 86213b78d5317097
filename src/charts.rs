// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart data adapters.
//!
//! Aggregation output is already (label, value) or (x, y) shaped; the
//! adapters only attach series names and the fixed palette the charts use.
//! No computation happens here.

use serde::Serialize;

use crate::analytics::{composition_metric_series, Progression, QualityTally, XyPoint};
use crate::catalog::COMPOSITION_METRICS;
use crate::models::CompositionLog;

pub const YELLOW: &str = "#eab308";
pub const VIOLET: &str = "#8b5cf6";
pub const GREEN: &str = "#22c55e";
pub const RED: &str = "#ef4444";
pub const BLUE: &str = "#3b82f6";

/// A named, colored line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub data: Vec<XyPoint>,
}

/// One doughnut-chart segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoughnutSegment {
    pub label: &'static str,
    pub count: u32,
    pub color: &'static str,
}

/// Max-weight progression as a line series.
pub fn progression_weight_series(progression: &Progression) -> LineSeries {
    LineSeries {
        name: "Peso Máximo (kg)".to_string(),
        color: YELLOW,
        data: progression.weight.clone(),
    }
}

/// Reps-at-max progression as a line series.
pub fn progression_reps_series(progression: &Progression) -> LineSeries {
    LineSeries {
        name: "Reps con Peso Máximo".to_string(),
        color: VIOLET,
        data: progression.reps_at_max.clone(),
    }
}

/// The three body-composition metrics as parallel line series with their
/// fixed colors, x-domain 1..=12.
pub fn composition_series(log: &CompositionLog, year: i32) -> Vec<LineSeries> {
    COMPOSITION_METRICS
        .iter()
        .map(|(key, label)| LineSeries {
            name: label.to_string(),
            color: composition_color(key),
            data: composition_metric_series(log, year, key),
        })
        .collect()
}

fn composition_color(metric_key: &str) -> &'static str {
    match metric_key {
        "grasa" => RED,
        "muscular" => GREEN,
        _ => BLUE,
    }
}

/// A category tally as doughnut segments, bien/regular/mal order.
pub fn checkin_segments(tally: &QualityTally) -> Vec<DoughnutSegment> {
    vec![
        DoughnutSegment {
            label: "bien",
            count: tally.bien,
            color: GREEN,
        },
        DoughnutSegment {
            label: "regular",
            count: tally.regular,
            color: YELLOW,
        },
        DoughnutSegment {
            label: "mal",
            count: tally.mal,
            color: RED,
        },
    ]
}
