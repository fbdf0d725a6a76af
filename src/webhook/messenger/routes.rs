//! Messenger webhook endpoint handlers
//!
//! This module handles incoming webhook requests from the Messenger Platform.
//! It implements both the verification endpoint (GET) and the webhook
//! receiver (POST).
//!
//! # Security
//!
//! The GET endpoint implements the platform's one-time subscription
//! handshake against the configured verify token. The POST endpoint
//! authenticates every delivery by checking the `X-Hub-Signature-256`
//! header against an HMAC of the raw body before the body is parsed.

use super::{handler, schemas, security};
use crate::front::{AppState, errors};
use ntex::{util::Bytes, web};
use serde::Deserialize;

/// Query parameters for webhook verification
#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    /// The verification token configured in the Facebook dashboard; absent
    /// parameters count as a mismatch, not a malformed request
    #[serde(rename = "hub.verify_token", default)]
    pub verify_token: Option<String>,
    /// The challenge string to echo back
    #[serde(rename = "hub.challenge", default)]
    pub challenge: Option<String>,
}

/// Webhook verification endpoint (GET)
///
/// The platform sends a GET request to verify the webhook URL during
/// subscription. This endpoint validates the verify token and echoes the
/// challenge back verbatim.
///
/// # Returns
/// - 200 with the challenge string if the token matches
/// - 403 if it doesn't
#[web::get("")]
pub async fn verify(
    query: web::types::Query<VerifyQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    if query.verify_token.as_deref() != Some(app_state.config.facebook_verify_token.as_str()) {
        return Err(errors::UserError::VerificationFailed.into());
    }

    log::info!("Webhook verified successfully");

    Ok(web::HttpResponse::Ok()
        .content_type("text/plain")
        .body(query.challenge.clone().unwrap_or_default()))
}

/// Webhook receiver endpoint (POST)
///
/// Receives event envelopes from the Messenger Platform. The raw body is
/// signature-checked before parsing; envelopes that fail the check are
/// rejected without ever being processed. Accepted envelopes always get an
/// `OK` acknowledgment, even when individual events inside them fail.
#[web::post("")]
pub async fn receive(
    req: web::HttpRequest,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let signature_header = req
        .headers()
        .get("X-Hub-Signature-256")
        .and_then(|value| value.to_str().ok());

    if !security::verify_signature(
        signature_header,
        &body,
        &app_state.config.facebook_app_secret,
    ) {
        return Err(errors::UserError::InvalidSignature.into());
    }

    let payload: schemas::WebhookPayload = serde_json::from_slice(&body).map_err(|e| {
        errors::ServerError::InternalServerError(format!(
            "at /webhook the event envelope couldnt be parsed: {e}"
        ))
    })?;

    handler::process_webhook(&payload, app_state.messenger_client.as_ref()).await;

    Ok(web::HttpResponse::Ok().content_type("text/plain").body("OK"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_query_deserialization() {
        let json = r#"{"hub.verify_token":"test123","hub.challenge":"challenge123"}"#;
        let query: VerifyQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.verify_token.as_deref(), Some("test123"));
        assert_eq!(query.challenge.as_deref(), Some("challenge123"));
    }

    #[test]
    fn test_verify_query_tolerates_missing_params() {
        let query: VerifyQuery = serde_json::from_str("{}").unwrap();
        assert!(query.verify_token.is_none());
        assert!(query.challenge.is_none());
    }
}
