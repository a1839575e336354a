//! Render Surface
//!
//! Where actions send acknowledgments and structured data. The HTTP layer and
//! tests use `RecordingSurface`; `LogSurface` writes through the `log` facade.

use super::error::ProfileError;
use serde::Serialize;

/// Receiver for user-facing output
pub trait RenderSurface {
    fn success(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    /// Render structured data in a readable form
    fn json(&mut self, value: &serde_json::Value) -> Result<(), ProfileError>;
}

/// One item emitted to a surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Rendered {
    Success(String),
    Warning(String),
    /// Pretty-printed JSON text
    Json(String),
}

impl Rendered {
    pub fn text(&self) -> &str {
        match self {
            Rendered::Success(text) | Rendered::Warning(text) | Rendered::Json(text) => text,
        }
    }
}

/// Surface that keeps everything it is given, in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub items: Vec<Rendered>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Rendered::Success(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                Rendered::Warning(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All output joined by newlines
    pub fn text(&self) -> String {
        self.items
            .iter()
            .map(Rendered::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderSurface for RecordingSurface {
    fn success(&mut self, message: &str) {
        self.items.push(Rendered::Success(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.items.push(Rendered::Warning(message.to_string()));
    }

    fn json(&mut self, value: &serde_json::Value) -> Result<(), ProfileError> {
        let pretty = serde_json::to_string_pretty(value)?;
        self.items.push(Rendered::Json(pretty));
        Ok(())
    }
}

/// Surface that logs output instead of displaying it
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

impl RenderSurface for LogSurface {
    fn success(&mut self, message: &str) {
        log::info!("{}", message);
    }

    fn warning(&mut self, message: &str) {
        log::warn!("{}", message);
    }

    fn json(&mut self, value: &serde_json::Value) -> Result<(), ProfileError> {
        log::info!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
