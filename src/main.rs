use dioxus::prelude::*;
use org_members::api::MembersApiClient;
use org_members::config::Config;
use org_members::ui::{make_config, App, AppContext};
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let api = Arc::new(MembersApiClient::from_config(&config));
    info!("Starting members UI for organization '{}'", config.organization);

    let context = AppContext { config, api };

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
