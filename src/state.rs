use crate::bigcommerce::BigCommerceClient;
use crate::config::Config;

/// Shared handler state. Credentials are read once at startup and live for
/// the life of the process; nothing here is mutable after construction.
#[derive(Clone)]
pub struct AppState {
    pub bigcommerce: BigCommerceClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            bigcommerce: BigCommerceClient::new(config),
        }
    }
}
