use ntex::web;

/// Configures webhook routes for the Messenger integration.
///
/// These routes are public endpoints that don't require authentication;
/// the POST receiver authenticates each request by its payload signature.
///
/// # Routes
/// - `GET /webhook` - Messenger webhook subscription verification
/// - `POST /webhook` - Messenger webhook receiver
pub fn messenger(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/webhook").service((super::messenger::verify, super::messenger::receive)),
    );
}
