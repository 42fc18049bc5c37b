use crate::api::MembersApi;
use crate::config;
use std::sync::Arc;

/// Services created in `main` and handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub api: Arc<dyn MembersApi>,
}
