//! Turning a spec diff into the report model

pub mod report;
pub mod rows;

pub use report::{build_report, request_title, type_title};
pub use rows::{added_rows, deleted_rows, modified_rows};
