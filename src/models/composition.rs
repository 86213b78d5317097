// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-composition records: perimeter and composition measurements per month.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{COMPOSITION_METRICS, PERIMETER_METRICS};

/// All composition records, keyed by year then month. At most one record per
/// (year, month); writing again overwrites the slot.
pub type CompositionLog = BTreeMap<i32, BTreeMap<u32, CompositionRecord>>;

/// A measurement that may be "not recorded".
///
/// The snapshot format stores unrecorded metrics as the empty string, not as
/// zero or null; this type keeps that convention on the wire while exposing
/// an `Option` to Rust code. Non-numeric residue in a snapshot deserializes
/// to "not recorded" instead of failing the whole load.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricValue(pub Option<f64>);

impl MetricValue {
    pub fn recorded(value: f64) -> Self {
        Self(Some(value))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    /// The value, if recorded and strictly positive; yearly series only
    /// chart positive measurements.
    pub fn positive(self) -> Option<f64> {
        self.0.filter(|v| *v > 0.0)
    }
}

impl Serialize for MetricValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serializer.serialize_f64(value),
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(value) => MetricValue(Some(value)),
            Raw::Text(text) => MetricValue(text.trim().parse().ok()),
        })
    }
}

/// One month's measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionRecord {
    /// Calendar month (1..=12)
    pub month: u32,
    /// Calendar year
    pub year: i32,
    /// Perimeter measurements in cm, keyed by metric key
    #[serde(default)]
    pub perimeters: BTreeMap<String, MetricValue>,
    /// Composition percentages, keyed by metric key
    #[serde(default)]
    pub composition: BTreeMap<String, MetricValue>,
}

impl CompositionRecord {
    /// A record with every catalog metric present but unrecorded.
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            month,
            year,
            perimeters: PERIMETER_METRICS
                .iter()
                .map(|(key, _)| (key.to_string(), MetricValue::empty()))
                .collect(),
            composition: COMPOSITION_METRICS
                .iter()
                .map(|(key, _)| (key.to_string(), MetricValue::empty()))
                .collect(),
        }
    }
}
