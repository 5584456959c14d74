//! Test Module
//!
//! Cross-module test suite for the Stylewise core.
//!
//! ## Test Categories
//! - `analysis_tests`: intent classification, keyword fallback, context hints, search
//! - `docs_tests`: documentation tiers, cache behaviour, HTTP sources against wiremock
//! - `engine_tests`: end-to-end suggestion scenarios and the other entry points
//! - `config_tests`: environment configuration and validation
//! - `mocks`: in-memory `DocSource` implementations with call counters

pub mod mocks;
