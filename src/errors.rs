// ABOUTME: Error re-exports and conversions from engine outcomes into AppError
// ABOUTME: Bridges configuration failures and incomplete inputs to the unified error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `hive-core`; this module adds conversions for types
//! defined in this crate so binaries can use `?` throughout.

pub use hive_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};

use crate::config::ConfigError;
use crate::intelligence::IncompleteInputs;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

impl From<IncompleteInputs> for AppError {
    fn from(incomplete: IncompleteInputs) -> Self {
        Self::new(ErrorCode::MissingRequiredField, incomplete.to_string())
    }
}

/// JSON envelope for an incomplete snapshot, naming the rejected fields
#[must_use]
pub fn incomplete_response(incomplete: &IncompleteInputs) -> ErrorResponse {
    let fields = incomplete
        .fields
        .iter()
        .map(|field| field.as_str().to_owned())
        .collect();
    ErrorResponse::from(AppError::from(incomplete.clone())).with_fields(fields)
}
