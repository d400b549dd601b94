pub mod api_client;
pub mod auth_service;

pub use api_client::{ApiClient, history_url};
pub use auth_service::*;
