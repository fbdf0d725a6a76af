//! # Messenger Chatbot Web Application
//!
//! Main entry point for the bilingual (Arabic/English) chatbot. Configures
//! logging, environment-sourced configuration, session middleware, and route
//! handling for the browser chat interface and the Facebook Messenger
//! webhook.

#![recursion_limit = "256"]

pub mod config;
pub mod consts;
pub mod front;
pub mod logger;
pub mod responder;
pub mod webhook;

use anyhow::Context;
use envconfig::Envconfig;
use ntex::web;
use ntex_session::CookieSession;
use sha2::{Digest, Sha256};

#[ntex::main]
async fn main() -> anyhow::Result<()> {
    logger::setup_simple_logger()?;

    let app_config = config::AppConfig::init_from_env()
        .context("failed to load application configuration from the environment")?;

    if app_config.page_access_token_is_placeholder() {
        log::warn!(
            "FACEBOOK_PAGE_ACCESS_TOKEN holds the development placeholder; outbound sends are disabled"
        );
    }

    let messenger_client = webhook::messenger::client::MessengerClient::new(&app_config)?;

    configure_and_run_server(app_config, messenger_client).await
}

/// Derives the 32-byte private-cookie key from the configured session secret
fn build_session_key(session_secret: &str) -> [u8; 32] {
    Sha256::digest(session_secret.as_bytes()).into()
}

/// Creates application state from the provided services
fn create_app_state(
    app_config: config::AppConfig,
    messenger_client: webhook::messenger::client::MessengerClient,
) -> front::AppState {
    front::AppState {
        config: app_config,
        messenger_client: Box::new(messenger_client),
    }
}

/// Configures and starts the web server
async fn configure_and_run_server(
    app_config: config::AppConfig,
    messenger_client: webhook::messenger::client::MessengerClient,
) -> anyhow::Result<()> {
    let session_key = build_session_key(&app_config.session_secret);
    let server_addr = (
        app_config.web_server_host.clone(),
        app_config.web_server_port,
    );
    let is_prod = app_config.is_prod();

    let server = web::server(move || {
        web::App::new()
            .wrap(
                CookieSession::private(&session_key)
                    .secure(is_prod)
                    .max_age(consts::MAX_AGE_COOKIES)
                    .name(consts::SESSION_COOKIE_NAME),
            )
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::Compress::default())
            .state(create_app_state(
                app_config.clone(),
                messenger_client.clone(),
            ))
            .configure(front::routes::chat_api)
            .configure(webhook::routes::messenger)
            .service((
                ntex_files::Files::new("/static", "web/static/"),
                front::server::index,
                front::server::facebook_setup,
            ))
            .default_service(web::route().to(front::server::serve_not_found))
    });

    server
        .bind(server_addr)?
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_is_stable_and_secret_dependent() {
        let key = build_session_key("fallback-secret-key-for-development");
        assert_eq!(key, build_session_key("fallback-secret-key-for-development"));
        assert_ne!(key, build_session_key("another-secret"));
    }
}
