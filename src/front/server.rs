//! Handlers not linked to a specific url

use ntex::web;
use serde_json::json;

use crate::front::{AppState, errors, templates};

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

/// Endpoint to render the chat interface
#[web::get("/")]
async fn index() -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            templates::WEB_TEMPLATES
                .render("index.html", &tera::Context::new())
                .map_err(|e| {
                    errors::ServerError::TemplateError(format!(
                        "at / endpoint the template couldnt be rendered: {e}"
                    ))
                })?,
        ))
}

/// Endpoint to render the Facebook integration setup page.
///
/// The webhook url shown on the page is computed from the request's own host
/// so the instructions stay correct behind any DNS name or tunnel; the
/// configured host is the fallback when no Host header is present.
#[web::get("/facebook-setup")]
async fn facebook_setup(
    req: web::HttpRequest,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let host = req
        .headers()
        .get("host")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| app_state.config.url_host());

    let webhook_url = format!(
        "{protocol}://{host}/webhook",
        protocol = app_state.config.web_server_protocol(),
    );

    let context = tera::Context::from_value(json!({
        "webhook_url": &webhook_url,
    }))
    .unwrap_or_default();

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            templates::WEB_TEMPLATES
                .render("facebook_setup.html", &context)
                .map_err(|e| {
                    errors::ServerError::TemplateError(format!(
                        "at /facebook-setup endpoint the template couldnt be rendered: {e}"
                    ))
                })?,
        ))
}
