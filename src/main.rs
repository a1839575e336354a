//! Career Profile Backend - Main Entry Point
//!
//! Starts the web API server for profile management.

use career_profile::api::run_server;
use career_profile::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    println!("╔════════════════════════════════════════════════╗");
    println!("║   Career Profile - Profile Management Backend  ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = ServerConfig::from_env();
    run_server(config).await
}
