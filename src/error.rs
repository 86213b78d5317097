// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type surfaced by the store and the tracker client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Tracker API error: {0}")]
    Tracker(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for store and service operations
pub type Result<T> = std::result::Result<T, AppError>;
