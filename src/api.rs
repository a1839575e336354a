//! Web API Module
//!
//! Exposes RESTful endpoints for the profile screen of the frontend.
//! All endpoints return JSON and require no authentication (prototype mode).

use crate::config::ServerConfig;
use crate::profile::{
    actions::{self, ProfileExport},
    error::ProfileError,
    memory::{self, TimelineEvent, TimelineStore},
    render::{RecordingSurface, Rendered},
    session::{SessionState, PROFILE_KEY},
    types::Profile,
};
use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub timeline: TimelineStore,
    pub sessions: Mutex<HashMap<String, SessionState>>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ProfileError> {
        let timeline = match &config.timeline_db {
            Some(path) => TimelineStore::open(path)?,
            None => TimelineStore::in_memory()?,
        };

        Ok(Self {
            timeline,
            sessions: Mutex::new(HashMap::new()),
        })
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, SessionState>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ============================================================
// API RESPONSE TYPES
// ============================================================

#[derive(Serialize)]
pub struct SessionCreated {
    pub session_id: String,
}

#[derive(Serialize)]
pub struct LoadExampleResponse {
    pub message: String,
    pub profile: Profile,
    pub rendered: Vec<Rendered>,
}

#[derive(Serialize)]
pub struct ShowProfileResponse {
    pub profile: serde_json::Value,
    pub rendered: Vec<Rendered>,
}

#[derive(Serialize)]
pub struct ClearProfileResponse {
    pub message: String,
    pub rendered: Vec<Rendered>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

fn error_response(err: &ProfileError) -> HttpResponse {
    let body = ApiResponse::<()>::error(&err.to_string());
    if err.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else {
        log::error!("Request failed: {}", err);
        HttpResponse::InternalServerError().json(body)
    }
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Profile API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Start a new session
async fn create_session(data: web::Data<Arc<AppState>>) -> impl Responder {
    let session = SessionState::new();
    let session_id = session.id.clone();

    data.sessions().insert(session_id.clone(), session);

    if let Err(e) = memory::record_session_started(&data.timeline, &session_id) {
        log::warn!("Failed to record session start for {}: {}", session_id, e);
    }
    log::info!("Created session {}", session_id);

    HttpResponse::Ok().json(ApiResponse::success(SessionCreated { session_id }))
}

/// "Load Example" button
async fn load_example(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();
    let mut surface = RecordingSurface::new();

    let profile = {
        let mut sessions = data.sessions();
        let session = match sessions.get_mut(&session_id) {
            Some(s) => s,
            None => return error_response(&ProfileError::SessionNotFound(session_id)),
        };

        if let Err(e) = actions::load_example_profile(session, &mut surface) {
            return error_response(&e);
        }
        match session.profile() {
            Some(p) => p.clone(),
            None => return error_response(&ProfileError::NoProfile),
        }
    };

    if let Err(e) = memory::record_profile_loaded(&data.timeline, &session_id, profile.name()) {
        log::warn!("Failed to record profile load for {}: {}", session_id, e);
    }

    let message = surface.successes().join("\n");
    HttpResponse::Ok().json(ApiResponse::success(LoadExampleResponse {
        message,
        profile,
        rendered: surface.items,
    }))
}

/// "Use Existing": current profile of a session
async fn get_profile(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();
    let sessions = data.sessions();
    let session = match sessions.get(&session_id) {
        Some(s) => s,
        None => return error_response(&ProfileError::SessionNotFound(session_id)),
    };

    let mut surface = RecordingSurface::new();
    match actions::show_existing_profile(session, &mut surface) {
        Ok(true) => {}
        Ok(false) => return error_response(&ProfileError::NoProfile),
        Err(e) => return error_response(&e),
    }

    let profile = match session.get(PROFILE_KEY).map(|v| v.to_json()) {
        Some(Ok(value)) => value,
        Some(Err(e)) => return error_response(&ProfileError::from(e)),
        None => return error_response(&ProfileError::NoProfile),
    };

    HttpResponse::Ok().json(ApiResponse::success(ShowProfileResponse {
        profile,
        rendered: surface.items,
    }))
}

/// "Clear Existing Profile" button
async fn clear_profile(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();
    let mut surface = RecordingSurface::new();

    {
        let mut sessions = data.sessions();
        let session = match sessions.get_mut(&session_id) {
            Some(s) => s,
            None => return error_response(&ProfileError::SessionNotFound(session_id)),
        };
        if !actions::clear_profile(session, &mut surface) {
            return error_response(&ProfileError::NoProfile);
        }
    }

    if let Err(e) = memory::record_profile_cleared(&data.timeline, &session_id) {
        log::warn!("Failed to record profile clear for {}: {}", session_id, e);
    }

    let message = surface.successes().join("\n");
    HttpResponse::Ok().json(ApiResponse::success(ClearProfileResponse {
        message,
        rendered: surface.items,
    }))
}

/// Download the current profile as JSON
async fn export_profile(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();

    let export: ProfileExport = {
        let sessions = data.sessions();
        let result = sessions
            .get(&session_id)
            .ok_or_else(|| ProfileError::SessionNotFound(session_id.clone()))
            .and_then(actions::export_profile);
        match result {
            Ok(export) => export,
            Err(e) => return error_response(&e),
        }
    };

    if let Err(e) = memory::record_profile_exported(&data.timeline, &session_id, &export.file_name) {
        log::warn!("Failed to record export for {}: {}", session_id, e);
    }

    HttpResponse::Ok()
        .content_type(export.mime.as_str())
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export.file_name),
        ))
        .body(export.body)
}

/// Session timeline
async fn get_timeline(
    data: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> impl Responder {
    let session_id = path.into_inner();

    if !data.sessions().contains_key(&session_id) {
        return error_response(&ProfileError::SessionNotFound(session_id));
    }

    match data.timeline.session_timeline(&session_id) {
        Ok(events) => HttpResponse::Ok().json(ApiResponse::<Vec<TimelineEvent>>::success(events)),
        Err(e) => error_response(&ProfileError::from(e)),
    }
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/session", web::post().to(create_session))
        .route("/api/session/{session_id}/profile/example", web::post().to(load_example))
        .route("/api/session/{session_id}/profile", web::get().to(get_profile))
        .route("/api/session/{session_id}/profile", web::delete().to(clear_profile))
        .route("/api/session/{session_id}/profile/export", web::get().to(export_profile))
        .route("/api/session/{session_id}/timeline", web::get().to(get_timeline));
}

/// Configure and run the API server
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(&config).map_err(|e| std::io::Error::other(e.to_string()))?);

    log::info!("Career Profile API starting at http://{}:{}", config.host, config.port);
    println!("📚 API Endpoints:");
    println!("   POST /api/session                      - Start session");
    println!("   POST /api/session/:id/profile/example  - Load example profile");
    println!("   GET  /api/session/:id/profile          - Show current profile");
    println!("   DEL  /api/session/:id/profile          - Clear current profile");
    println!("   GET  /api/session/:id/profile/export   - Download profile JSON");
    println!("   GET  /api/session/:id/timeline         - Session timeline");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
