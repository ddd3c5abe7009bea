//! Core types shared across contrast facilities
//!
//! This crate holds the pieces used by both the error and logging
//! facilities of `contrast-core` and by outer surfaces such as the CLI:
//!
//! - **Schema constants**: Canonical field keys and event names for structured logs

pub mod schema;
