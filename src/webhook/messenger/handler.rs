//! # Messenger Webhook Handler
//!
//! Turns an accepted delivery envelope into replies: one outbound send per
//! incoming text message, processed sequentially. A failure on one event is
//! logged and never aborts the remaining events, and send outcomes are
//! best-effort, so the HTTP receiver can always acknowledge the envelope.

use super::{
    client::{SendApi, SendOutcome},
    schemas::{MessagingEvent, WebhookPayload},
};
use crate::responder;
use anyhow::{Context, Result};
use log::{error, info, warn};

/// Collects the text-bearing messaging events of a webhook payload, in
/// delivery order
pub fn text_events(payload: &WebhookPayload) -> Vec<&MessagingEvent> {
    payload
        .entry
        .iter()
        .flat_map(|entry| &entry.messaging)
        .filter(|event| event.text().is_some())
        .collect::<Vec<_>>()
}

/// Processes one accepted delivery envelope.
///
/// Envelopes for objects other than "page" are ignored. Events are handled
/// sequentially; each failure is contained to its own event.
pub async fn process_webhook(payload: &WebhookPayload, client: &dyn SendApi) {
    if payload.object != "page" {
        info!(
            "Ignoring webhook envelope for object type {object:?}",
            object = payload.object
        );
        return;
    }

    for event in text_events(payload) {
        if let Err(e) = handle_message_event(event, client).await {
            error!("Error handling Facebook message: {e:#}");
        }
    }
}

/// Answers a single text message event
async fn handle_message_event(event: &MessagingEvent, client: &dyn SendApi) -> Result<()> {
    let text = event
        .text()
        .context("messaging event without text reached the handler")?;
    let sender_id = event
        .sender
        .as_ref()
        .map(|sender| sender.id.as_str())
        .context("messaging event carries no sender id")?;

    info!("Received message from {sender_id}: {text}");

    let reply = responder::respond(text);

    match client.send_text_message(sender_id, reply).await {
        SendOutcome::Delivered => info!("Message sent successfully to {sender_id}"),
        SendOutcome::Skipped => warn!("Facebook Page Access Token not configured"),
        SendOutcome::Failed(detail) => error!("Failed to send message: {detail}"),
    }

    Ok(())
}
