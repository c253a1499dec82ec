//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Result sizes
pub const FIELD_PATH_COUNT: &str = "path_count";
pub const FIELD_DIFF_COUNT: &str = "diff_count";
pub const FIELD_COVERED: &str = "covered";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_ENUMERATE_PATHS: &str = "enumerate_paths";
pub const OP_ENUMERATE_NESTED_PATHS: &str = "enumerate_nested_paths";
pub const OP_DIFF: &str = "diff";
pub const OP_COMPARE_MAPPING_LISTS: &str = "compare_lists_of_equal_length_mappings";
