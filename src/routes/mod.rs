// Route exports
pub mod matches;
pub mod profiles;

use std::sync::Arc;

use actix_web::web;

use crate::config::MatchingSettings;
use crate::store::ProfileStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(profiles::configure)
            .configure(matches::configure),
    );
}
