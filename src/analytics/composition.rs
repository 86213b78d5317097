// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Yearly series over body-composition records.

use crate::analytics::{LabelValue, XyPoint};
use crate::catalog::MONTH_NAMES;
use crate::models::CompositionLog;

/// One bar per month of the year with a recorded, positive value for the
/// perimeter metric, labeled with short month names, ascending.
pub fn perimeter_series(log: &CompositionLog, year: i32, metric_key: &str) -> Vec<LabelValue> {
    let Some(year_records) = log.get(&year) else {
        return Vec::new();
    };

    year_records
        .values()
        .filter_map(|record| {
            let value = record.perimeters.get(metric_key)?.positive()?;
            let label = MONTH_NAMES.get(record.month.checked_sub(1)? as usize)?;
            Some(LabelValue::new(*label, value))
        })
        .collect()
}

/// One point per month of the year with a recorded, positive value for the
/// composition metric, as (month, value) pairs, ascending.
pub fn composition_metric_series(
    log: &CompositionLog,
    year: i32,
    metric_key: &str,
) -> Vec<XyPoint> {
    let Some(year_records) = log.get(&year) else {
        return Vec::new();
    };

    year_records
        .values()
        .filter_map(|record| {
            let value = record.composition.get(metric_key)?.positive()?;
            Some(XyPoint {
                x: record.month,
                y: value,
            })
        })
        .collect()
}
