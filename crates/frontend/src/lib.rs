pub mod app;
pub mod client;
pub mod config;
pub mod router;

pub use app::App;
pub use client::{SharedClient, api_client, use_api_client};
pub use config::FrontendConfig;
