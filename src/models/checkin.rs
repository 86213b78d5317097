// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily check-in: self-reported tri-state quality ratings.

use serde::{Deserialize, Serialize};

/// Quality level for a single check-in category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinQuality {
    Bien,
    Regular,
    Mal,
}

impl CheckinQuality {
    /// Label used on the wire and in chart legends.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckinQuality::Bien => "bien",
            CheckinQuality::Regular => "regular",
            CheckinQuality::Mal => "mal",
        }
    }
}

/// Daily self-report across the three tracked categories.
///
/// `None` means the category was not recorded that day; it is excluded from
/// tallies rather than counted as a fourth level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckinData {
    /// Sleep quality
    #[serde(rename = "sueño", default)]
    pub sueno: Option<CheckinQuality>,
    /// Nutrition quality
    #[serde(default)]
    pub comida: Option<CheckinQuality>,
    /// Energy level
    #[serde(default)]
    pub energia: Option<CheckinQuality>,
}
