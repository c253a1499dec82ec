//! Core types shared across nestdiff facilities
//!
//! This crate holds the canonical field keys and event names used by the
//! structured logging facility and by error reporting. It has no
//! dependencies so that every crate in the workspace can share it.

pub mod schema;
