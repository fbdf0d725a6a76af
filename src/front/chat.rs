//! Browser chat endpoint.
//!
//! The web UI posts the user's text here and renders the canned reply. No
//! authentication beyond same-origin trust; the endpoint is stateless and
//! every request is answered from the response tables alone.

use crate::{front::errors, responder};
use ntex::{util::Bytes, web};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// A body without the field counts as an empty message
    #[serde(default)]
    pub message: String,
}

/// Handle chat messages from the web interface.
///
/// Responds 400 when the message is empty after trimming, 200 with the reply
/// and a milliseconds-since-epoch timestamp otherwise. The body is parsed
/// from raw bytes so a malformed payload surfaces as the generic 500, the
/// same contract the rest of the error taxonomy follows.
#[web::post("/chat")]
pub async fn chat(body: Bytes) -> Result<impl web::Responder, web::Error> {
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        errors::ServerError::InternalServerError(format!(
            "at /api/chat the request body couldnt be parsed: {e}"
        ))
    })?;

    let user_message = request.message.trim();
    if user_message.is_empty() {
        return Err(errors::UserError::EmptyMessage.into());
    }

    let reply = responder::BotReply::new(responder::respond(user_message));

    Ok(web::HttpResponse::Ok().json(&json!({
        "response": reply.text,
        "timestamp": reply.timestamp_millis.to_string(),
    })))
}
