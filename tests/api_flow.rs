use actix_web::{http::header, http::StatusCode, test, web, App};
use career_profile::api::{configure_routes, AppState};
use career_profile::config::ServerConfig;
use career_profile::profile::example::example_profile;
use career_profile::profile::types::Profile;
use serde_json::Value;
use std::sync::Arc;

#[actix_rt::test]
async fn test_session_load_show_export_flow() {
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        timeline_db: Some(dir.path().join("timeline.db")),
        ..ServerConfig::default()
    };
    let state = Arc::new(AppState::new(&config).unwrap());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    // Start a session
    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/session").to_request(),
    )
    .await;
    let session_id = created["data"]["session_id"].as_str().unwrap().to_string();

    // Press "Load Example"
    let loaded: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/session/{}/profile/example", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(loaded["success"], true);
    assert_eq!(loaded["data"]["message"], "Example profile loaded!");
    assert_eq!(loaded["data"]["profile"]["personal_info"]["name"], "Alex Johnson");
    assert_eq!(loaded["data"]["rendered"][0]["kind"], "success");
    assert!(loaded["data"]["rendered"][1]["text"]
        .as_str()
        .unwrap()
        .contains("Alex Johnson"));

    let profile: Profile = serde_json::from_value(loaded["data"]["profile"].clone()).unwrap();
    assert_eq!(profile, example_profile());

    // "Use Existing" returns the same profile
    let shown: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/session/{}/profile", session_id))
            .to_request(),
    )
    .await;
    assert_eq!(shown["data"]["profile"], loaded["data"]["profile"]);
    assert!(shown["data"]["profile"]["education"][1].get("gpa").is_none());

    // Export as a download
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/session/{}/profile/export", session_id))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let disposition = resp
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"my_profile.json\"");
    let body = test::read_body(resp).await;
    let exported: Profile = serde_json::from_slice(&body).unwrap();
    assert_eq!(exported, example_profile());

    // Timeline lists each step in order
    let timeline: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/session/{}/timeline", session_id))
            .to_request(),
    )
    .await;
    let kinds: Vec<&str> = timeline["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event_type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["session_started", "profile_loaded", "profile_exported"]);
}

#[actix_rt::test]
async fn test_sessions_are_isolated() {
    let state = Arc::new(AppState::new(&ServerConfig::default()).unwrap());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let created: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::post().uri("/api/session").to_request(),
        )
        .await;
        ids.push(created["data"]["session_id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/session/{}/profile/example", ids[0]))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let sessions = state.sessions.lock().unwrap();
    assert!(sessions[&ids[0]].profile().is_some());
    assert!(sessions[&ids[1]].profile().is_none());
}

#[actix_rt::test]
async fn test_clear_existing_profile() {
    let state = Arc::new(AppState::new(&ServerConfig::default()).unwrap());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes),
    )
    .await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post().uri("/api/session").to_request(),
    )
    .await;
    let session_id = created["data"]["session_id"].as_str().unwrap().to_string();
    let profile_uri = format!("/api/session/{}/profile", session_id);

    // Nothing to clear yet
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&profile_uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri(&format!("/api/session/{}/profile/example", session_id))
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let cleared: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete().uri(&profile_uri).to_request(),
    )
    .await;
    assert_eq!(cleared["success"], true);
    assert_eq!(cleared["data"]["message"], "Existing profile cleared.");

    // "Use Existing" now finds nothing
    let resp = test::call_service(&app, test::TestRequest::get().uri(&profile_uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let timeline: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/session/{}/timeline", session_id))
            .to_request(),
    )
    .await;
    let kinds: Vec<&str> = timeline["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event_type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["session_started", "profile_loaded", "profile_cleared"]);
}
