// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CURMOVE: personal workout planning and tracking core.
//!
//! This crate provides the data model, the per-user store, and the pure
//! aggregation engine behind a training planner: weekly plans, logged
//! sets, body-composition records, and chart-ready derived series.
//! Rendering and input collection are the embedding application's job.

pub mod analytics;
pub mod catalog;
pub mod charts;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

use config::Config;
use services::TrackerClient;
use store::{SnapshotStorage, Store};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub tracker: TrackerClient,
}

impl AppState {
    /// Build the state from configuration: open the snapshot store and the
    /// collector client.
    pub fn new(config: Config) -> error::Result<Self> {
        let store = Store::open(SnapshotStorage::new(&config.data_file))?;
        let tracker = TrackerClient::new(config.tracker_url.clone());

        Ok(Self {
            config,
            store,
            tracker,
        })
    }
}
