//! SandhiIO - Joint-stream ingestion for robot arm telemetry
//!
//! This library provides the core components for recovering joint angles
//! and label text from a single sender's unframed TCP byte stream.
//!
//! There is no wire format: the sender writes raw bytes with no length
//! prefixes or message boundaries, so recovery is heuristic. See the
//! [`decoder`] module for the sliding-window scan and the plausibility
//! filters that make it workable.

pub mod config;
pub mod decoder;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
