//! # Messenger Webhook Schemas
//!
//! Data structures for the Messenger Platform webhook payloads: the incoming
//! event envelope delivered to `POST /webhook` and the outgoing Send API
//! request body. Fields the bot doesn't consume are either optional or left
//! to serde to ignore, so envelope variations (delivery receipts, postbacks,
//! read events) deserialize without error and simply carry no text.

use serde::{Deserialize, Serialize};

/// Root webhook payload from the Messenger Platform
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookPayload {
    /// The object type; page subscriptions deliver "page". A missing field
    /// deserializes as empty and the envelope is ignored, never rejected.
    #[serde(default)]
    pub object: String,
    /// Array of entry objects containing the actual events
    #[serde(default)]
    pub entry: Vec<Entry>,
}

/// One entry in the event envelope, scoped to a single page
#[derive(Debug, Deserialize, Serialize)]
pub struct Entry {
    /// Page ID the events belong to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Epoch milliseconds when the batch was sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Messaging events in this entry
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// A single messaging event (message, delivery receipt, postback, ...)
#[derive(Debug, Deserialize, Serialize)]
pub struct MessagingEvent {
    /// Who triggered the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    /// Epoch milliseconds of the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Message content, present only for message events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageContent>,
}

impl MessagingEvent {
    /// The text body, when this event is a text message
    pub fn text(&self) -> Option<&str> {
        self.message.as_ref().and_then(|m| m.text.as_deref())
    }
}

/// Sender reference carried by every messaging event
#[derive(Debug, Deserialize, Serialize)]
pub struct Sender {
    /// Page-scoped ID of the user
    pub id: String,
}

/// Message content of a message event
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageContent {
    /// Message ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,
    /// Text body; attachment-only messages carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Send API request body for a text reply
#[derive(Debug, Serialize)]
pub struct OutgoingTextMessage {
    /// Recipient of the reply
    pub recipient: OutgoingRecipient,
    /// Message payload
    pub message: OutgoingText,
}

impl OutgoingTextMessage {
    pub fn new(recipient_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: OutgoingRecipient {
                id: recipient_id.into(),
            },
            message: OutgoingText { text: text.into() },
        }
    }
}

/// Recipient reference in a Send API request
#[derive(Debug, Serialize)]
pub struct OutgoingRecipient {
    pub id: String,
}

/// Text payload in a Send API request
#[derive(Debug, Serialize)]
pub struct OutgoingText {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_payload_deserialization() {
        let json = r#"{
            "object": "page",
            "entry": [{
                "id": "1234567890",
                "time": 1712000000000,
                "messaging": [{
                    "sender": {"id": "USER_PSID"},
                    "timestamp": 1712000000001,
                    "message": {"mid": "m_abc", "text": "hello"}
                }]
            }]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.object, "page");
        assert_eq!(payload.entry.len(), 1);
        assert_eq!(payload.entry[0].messaging[0].text(), Some("hello"));
    }

    #[test]
    fn test_event_without_text_deserializes() {
        // delivery receipts carry no message body at all
        let json = r#"{
            "object": "page",
            "entry": [{"messaging": [{"sender": {"id": "USER_PSID"}}]}]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.entry[0].messaging[0].text(), None);
    }

    #[test]
    fn test_missing_object_and_entry_tolerated() {
        let payload: WebhookPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.object.is_empty());
        assert!(payload.entry.is_empty());
    }

    #[test]
    fn test_outgoing_text_message_shape() {
        let message = OutgoingTextMessage::new("USER_PSID", "Hi there!");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "recipient": {"id": "USER_PSID"},
                "message": {"text": "Hi there!"}
            })
        );
    }
}
