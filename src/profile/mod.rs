//! Profile Module - Example profile and session handling
//!
//! Architecture:
//! - Types: Profile record, one struct per nesting level
//! - Example: the built-in example profile
//! - Session: explicit per-session key/value state
//! - Render: surface that receives acknowledgments and rendered data
//! - Actions: load example, show existing, export
//! - Memory: session timeline (SQLite)

pub mod actions;
pub mod error;
pub mod example;
pub mod memory;
pub mod render;
pub mod session;
pub mod types;

pub use actions::*;
pub use error::*;
pub use example::*;
pub use memory::*;
pub use render::*;
pub use session::*;
pub use types::*;
