//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names identical between the report
//! builder, the renderer and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Report identifiers
pub const FIELD_OLD_CONTRACT: &str = "old_contract";
pub const FIELD_NEW_CONTRACT: &str = "new_contract";
pub const FIELD_SECTION_TITLE: &str = "section_title";

// Collection sizes
pub const FIELD_ROW_COUNT: &str = "row_count";
pub const FIELD_SECTION_COUNT: &str = "section_count";
pub const FIELD_BYTES: &str = "bytes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_ROW_COUNT.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
