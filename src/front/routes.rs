//! Frontend route configuration module.

use super::chat;
use ntex::web;

/// Configures the browser-facing chat API.
///
/// # Routes
/// - `POST /api/chat` - Answer a chat message from the web interface
pub fn chat_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service((chat::chat,)));
}
