//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point for each operation.
//!
//! - [`services::mapping_service::MappingService`] - Alias creation and resolution

pub mod services;
