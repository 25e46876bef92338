//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::MappingService;

/// Handler state.
///
/// Built once in [`crate::server::run`] after the database pool is
/// connected; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService>) -> Self {
        Self { mapping_service }
    }
}
