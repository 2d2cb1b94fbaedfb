//! Trellis Core
//!
//! Ambient utilities shared by the Trellis crates: logging bootstrap,
//! hash collections, build configuration and optional profiling.

pub mod alloc;
pub mod config;
pub mod logging;
pub mod profiling;

pub use config::{Config, StyleDiagnostics};
