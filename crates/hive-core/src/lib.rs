// ABOUTME: Core types and constants for the HIVE health metrics engine
// ABOUTME: Foundation crate with domain models, formula constants, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # HIVE Core
//!
//! Foundation crate providing shared types and constants for the HIVE health
//! metrics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Formula coefficients, classification thresholds, and display strings
//! - **models**: Display-ready metric values, classification bands, and sex categories

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`HealthMetric`, `Classification`, `SexCategory`)
pub mod models;
