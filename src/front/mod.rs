pub mod chat;
pub mod errors;
pub mod routes;
pub mod server;
pub mod templates;

use crate::{config::AppConfig, webhook::messenger::client::ImplSendApi};

pub struct AppState {
    pub config: AppConfig,
    pub messenger_client: ImplSendApi,
}
