pub const GRAPH_API_BASE_URL: &str = "https://graph.facebook.com";
pub const GRAPH_API_VERSION: &str = "v18.0";

/// Development default for `FACEBOOK_PAGE_ACCESS_TOKEN`; outbound sends are
/// disabled while the configured token still equals this value.
pub const PLACEHOLDER_PAGE_ACCESS_TOKEN: &str = "your-page-access-token";

pub const SESSION_COOKIE_NAME: &str = "messenger-bot-session";

pub const MAX_AGE_COOKIES: i64 = chrono::TimeDelta::hours(4).num_seconds();

/// Outbound Graph API calls get a hard deadline; the platform gives webhooks
/// a limited window to respond, so a hung send must not pin the request.
pub const SEND_TIMEOUT_SECS: u64 = 10;
