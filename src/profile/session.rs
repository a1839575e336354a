//! Session State
//!
//! Per-session key/value store passed explicitly to every action.
//! Values are typed: a profile is stored as a `Profile`, anything else as JSON.

use super::types::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Key under which the active profile is held
pub const PROFILE_KEY: &str = "profile";

/// A value held in session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SessionValue {
    Profile(Box<Profile>),
    Json(serde_json::Value),
}

impl SessionValue {
    pub fn as_profile(&self) -> Option<&Profile> {
        match self {
            SessionValue::Profile(profile) => Some(profile),
            SessionValue::Json(_) => None,
        }
    }

    /// JSON form used for rendering
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            SessionValue::Profile(profile) => serde_json::to_value(profile.as_ref()),
            SessionValue::Json(value) => Ok(value.clone()),
        }
    }
}

impl From<Profile> for SessionValue {
    fn from(profile: Profile) -> Self {
        SessionValue::Profile(Box::new(profile))
    }
}

impl From<serde_json::Value> for SessionValue {
    fn from(value: serde_json::Value) -> Self {
        SessionValue::Json(value)
    }
}

/// State for one user session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub id: String,
    pub created_at: DateTime<Utc>,
    values: HashMap<String, SessionValue>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_id(&Uuid::new_v4().to_string())
    }

    pub fn with_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            created_at: Utc::now(),
            values: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SessionValue> {
        self.values.get(key)
    }

    /// Replace the value under `key`, returning the previous one
    pub fn set(&mut self, key: &str, value: impl Into<SessionValue>) -> Option<SessionValue> {
        self.values.insert(key.to_string(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<SessionValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sorted list of keys currently set
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }

    /// The active profile, if one has been loaded
    pub fn profile(&self) -> Option<&Profile> {
        self.get(PROFILE_KEY).and_then(SessionValue::as_profile)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::example::example_profile;
    use serde_json::json;

    #[test]
    fn test_set_replaces_value() {
        let mut session = SessionState::with_id("s1");
        assert!(session.set("job_data", json!({"title": "Engineer"})).is_none());

        let previous = session.set("job_data", json!({"title": "Designer"}));
        assert_eq!(previous, Some(SessionValue::Json(json!({"title": "Engineer"}))));
        assert_eq!(
            session.get("job_data"),
            Some(&SessionValue::Json(json!({"title": "Designer"})))
        );
    }

    #[test]
    fn test_profile_accessor() {
        let mut session = SessionState::new();
        assert!(session.profile().is_none());

        session.set(PROFILE_KEY, example_profile());
        assert_eq!(session.profile().map(|p| p.name()), Some("Alex Johnson"));
    }

    #[test]
    fn test_json_under_profile_key_is_not_a_profile() {
        let mut session = SessionState::new();
        session.set(PROFILE_KEY, json!({"personal_info": {}}));
        assert!(session.contains(PROFILE_KEY));
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_remove_and_keys() {
        let mut session = SessionState::new();
        session.set("b", json!(1));
        session.set("a", json!(2));
        assert_eq!(session.keys(), vec!["a", "b"]);

        assert!(session.remove("a").is_some());
        assert!(!session.contains("a"));
        assert_eq!(session.keys(), vec!["b"]);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(SessionState::new().id, SessionState::new().id);
    }
}
