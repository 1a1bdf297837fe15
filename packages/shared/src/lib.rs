//! Shared utilities for item-manager.
//!
//! Logger setup and time helpers used across the workspace.

pub mod logger;
pub mod time;

pub use logger::setup_logger;
