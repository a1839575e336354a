//! Career Profile Backend
//!
//! Profile management for the career assistant:
//! - Example profile factory
//! - Explicit per-session state
//! - Load / show / export actions
//! - Session timeline

pub mod api;
pub mod config;
pub mod profile;

pub use config::*;
pub use profile::*;
