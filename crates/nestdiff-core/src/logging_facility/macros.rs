//! Operation lifecycle macros
//!
//! Every public operation emits one start event and exactly one terminal
//! event (`end` or `end_error`). All three macros expand to
//! [`__op_event!`](crate::__op_event), which stamps the `component`, `op`
//! and `event` fields so the capture layer and log processors can key on
//! them.
//!
//! Terminal events take their duration either as an explicit
//! `duration_ms = <u64>` or as `started = <Instant>`, from which the elapsed
//! milliseconds are computed at the call site.

#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use nestdiff_core::log_op_start;
/// log_op_start!("diff");
/// log_op_start!("diff", symmetric_match = true);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            info,
            $op,
            nestdiff_core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use nestdiff_core::log_op_end;
/// let started = std::time::Instant::now();
/// log_op_end!("diff", started = started, diff_count = 0);
/// log_op_end!("diff", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, started = $started:expr $(, $($field:tt)*)?) => {
        $crate::log_op_end!(
            $op,
            duration_ms = $started.elapsed().as_millis() as u64
            $(, $($field)*)?
        )
    };
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            info,
            $op,
            nestdiff_core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log the failure of an operation
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// the event carries its `err.kind`, `err.code` and `err.message`.
///
/// ```
/// # use nestdiff_core::{log_op_error, errors::NestError};
/// let err = NestError::LengthMismatch { first_len: 1, second_len: 2 };
/// log_op_error!("compare_lists_of_equal_length_mappings", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, started = $started:expr $(, $($field:tt)*)?) => {
        $crate::log_op_error!(
            $op,
            $err,
            duration_ms = $started.elapsed().as_millis() as u64
            $(, $($field)*)?
        )
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err = $crate::errors::ExError::from($err);
        $crate::__op_event!(
            error,
            $op,
            nestdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.message = ex_err.message()
            $(, $($field)*)?
        )
    }};
}
