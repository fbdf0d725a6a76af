use super::templates;
use derive_more::{Display, Error};
use log::{error, warn};
use ntex::{http, web};
use serde_json::json;

#[derive(Debug, Display, Error)]
pub enum UserError {
    UrlNotFound,
    EmptyMessage,
    VerificationFailed,
    InvalidSignature,
}

impl web::error::WebResponseError for UserError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        match self {
            // unknown urls fall back to the chat page, keeping the 404 status
            UserError::UrlNotFound => web::HttpResponse::build(self.status_code())
                .set_header("content-type", "text/html; charset=utf-8")
                .body(
                    templates::WEB_TEMPLATES
                        .render("index.html", &tera::Context::new())
                        .unwrap_or_else(|_| self.to_string()),
                ),
            UserError::EmptyMessage => web::HttpResponse::build(self.status_code())
                .json(&json!({"error": "Message cannot be empty"})),
            UserError::VerificationFailed => {
                warn!("Webhook verification failed");
                web::HttpResponse::build(self.status_code()).body("Verification failed")
            }
            UserError::InvalidSignature => {
                warn!("Invalid webhook signature");
                web::HttpResponse::build(self.status_code()).body("Invalid signature")
            }
        }
    }

    fn status_code(&self) -> http::StatusCode {
        match *self {
            UserError::UrlNotFound => http::StatusCode::NOT_FOUND,
            UserError::EmptyMessage => http::StatusCode::BAD_REQUEST,
            UserError::VerificationFailed | UserError::InvalidSignature => {
                http::StatusCode::FORBIDDEN
            }
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ServerError {
    TemplateError(#[error(not(source))] String),
    InternalServerError(#[error(not(source))] String),
}

impl ServerError {
    fn get_error_message(&self) -> String {
        match self {
            ServerError::TemplateError(msg) => format!("[TemplateError] {:#?}", msg),
            ServerError::InternalServerError(msg) => format!("[InternalServerError] {:#?}", msg),
        }
    }
}

impl web::error::WebResponseError for ServerError {
    fn error_response(&self, _: &web::HttpRequest) -> web::HttpResponse {
        error!("{}", self.get_error_message());

        // the detail stays in the server log; callers get a generic body
        web::HttpResponse::build(self.status_code())
            .json(&json!({"error": "Internal server error"}))
    }

    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
