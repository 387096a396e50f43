// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from the loading boundary.
//!
//! Only loading can fail. Once a [`Store`](crate::Store) exists every query
//! degrades to an empty result instead of erroring, and the
//! [`Engine`](crate::Engine) absorbs these errors into its "unavailable" state.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a dataset file into a store.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("agent at position {position} has id {id}; ids must equal their position")]
    MisplacedId { position: usize, id: usize },
}

/// Errors raised while loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
