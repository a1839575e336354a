//! Profile Actions
//!
//! Handlers behind the profile screen buttons. Each takes the session it acts
//! on and the surface to report to; none depends on a UI toolkit.

use super::error::ProfileError;
use super::example::example_profile;
use super::render::RenderSurface;
use super::session::{SessionState, PROFILE_KEY};
use serde::Serialize;

pub const EXAMPLE_LOADED_MESSAGE: &str = "Example profile loaded!";
pub const NO_PROFILE_MESSAGE: &str = "No existing profile found. Please create one first.";
pub const PROFILE_CLEARED_MESSAGE: &str = "Existing profile cleared.";
pub const EXPORT_FILE_NAME: &str = "my_profile.json";
pub const EXPORT_MIME: &str = "application/json";

/// "Load Example": store a fresh example profile and display it
pub fn load_example_profile<S>(session: &mut SessionState, surface: &mut S) -> Result<(), ProfileError>
where
    S: RenderSurface + ?Sized,
{
    let profile = example_profile();
    log::info!(
        "Loading example profile '{}' into session {}",
        profile.name(),
        session.id
    );

    let rendered = serde_json::to_value(&profile)?;
    session.set(PROFILE_KEY, profile);
    surface.success(EXAMPLE_LOADED_MESSAGE);

    log::debug!("Rendering profile for session {}", session.id);
    surface.json(&rendered)
}

/// "Use Existing": display the stored profile, or warn when there is none
pub fn show_existing_profile<S>(session: &SessionState, surface: &mut S) -> Result<bool, ProfileError>
where
    S: RenderSurface + ?Sized,
{
    match session.get(PROFILE_KEY) {
        Some(value) => {
            surface.json(&value.to_json()?)?;
            Ok(true)
        }
        None => {
            surface.warning(NO_PROFILE_MESSAGE);
            Ok(false)
        }
    }
}

/// "Clear Existing Profile": drop the stored profile.
/// Returns false (with a warning) when there was nothing to clear.
pub fn clear_profile<S>(session: &mut SessionState, surface: &mut S) -> bool
where
    S: RenderSurface + ?Sized,
{
    match session.remove(PROFILE_KEY) {
        Some(_) => {
            log::info!("Cleared profile in session {}", session.id);
            surface.success(PROFILE_CLEARED_MESSAGE);
            true
        }
        None => {
            surface.warning(NO_PROFILE_MESSAGE);
            false
        }
    }
}

/// A profile prepared for download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileExport {
    pub file_name: String,
    pub mime: String,
    pub body: String,
}

/// Serialize the stored profile as a JSON download
pub fn export_profile(session: &SessionState) -> Result<ProfileExport, ProfileError> {
    let value = session.get(PROFILE_KEY).ok_or(ProfileError::NoProfile)?;
    let body = serde_json::to_string_pretty(&value.to_json()?)?;

    Ok(ProfileExport {
        file_name: EXPORT_FILE_NAME.to_string(),
        mime: EXPORT_MIME.to_string(),
        body,
    })
}
