//! # Messenger Send API Client
//!
//! This module provides a client for sending text replies through the Graph
//! API Send endpoint. Sends are best-effort: the client reports an outcome
//! the caller logs and discards, it never propagates an error and never
//! retries.

use super::schemas::OutgoingTextMessage;
use crate::{config::AppConfig, consts};
use async_trait::async_trait;
use std::time::Duration;

/// Result of one best-effort send
#[derive(Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// The platform accepted the message
    Delivered,
    /// No usable access token is configured; the call was never made
    Skipped,
    /// Transport error or non-success status from the platform
    Failed(String),
}

/// Seam for the outbound channel so webhook processing is testable without
/// network access
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SendApi: Send + Sync {
    /// Sends a text reply to one recipient; returns an outcome, never an error
    async fn send_text_message(&self, recipient_id: &str, text: &str) -> SendOutcome;
}

pub type ImplSendApi = Box<dyn SendApi>;

/// Messenger Graph API client for sending replies
#[derive(Clone)]
pub struct MessengerClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Graph API endpoint for sending messages
    endpoint: String,
    /// Page access token; sends are skipped while it holds the placeholder
    access_token: String,
    token_is_placeholder: bool,
}

impl MessengerClient {
    /// Creates a new Messenger client from the application configuration.
    ///
    /// The underlying HTTP client carries a hard request timeout; the
    /// platform's webhook delivery window is short and a hung send must not
    /// pin the inbound request.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(consts::SEND_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.messenger_send_endpoint(),
            access_token: config.facebook_page_access_token.clone(),
            token_is_placeholder: config.page_access_token_is_placeholder(),
        })
    }
}

#[async_trait]
impl SendApi for MessengerClient {
    async fn send_text_message(&self, recipient_id: &str, text: &str) -> SendOutcome {
        if self.token_is_placeholder {
            return SendOutcome::Skipped;
        }

        let message = OutgoingTextMessage::new(recipient_id, text);

        let response = match self
            .client
            .post(&self.endpoint)
            .query(&[("access_token", self.access_token.as_str())])
            .header("Content-Type", "application/json")
            .json(&message)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return SendOutcome::Failed(format!("request to Send API failed: {e}")),
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());

            return SendOutcome::Failed(format!(
                "Send API returned error status {status}: {body}"
            ));
        }

        SendOutcome::Delivered
    }
}
