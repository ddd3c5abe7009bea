//! Structured logging facility for contrast
//!
//! - One initialization point, `init(profile)`
//! - Operation macros (`log_op_start!`, `log_op_end!`, `log_op_error!`) that
//!   emit the canonical field keys from [`crate::schema`]
//! - A capture layer so tests can assert on emitted events
//!
//! # Usage
//!
//! ```rust
//! use contrast_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
