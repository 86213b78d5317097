// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - external collaborators.

pub mod tracker;

pub use tracker::{build_set_records, SetRecord, SubmissionReport, TrackerClient};
