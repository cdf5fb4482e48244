//! Application state management

use database::dynamodb::Client;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub dynamodb: Client,
}

impl AppState {
    pub fn table_name(&self) -> &str {
        self.config.dynamodb.table_name()
    }
}
