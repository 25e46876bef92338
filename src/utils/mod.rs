//! Helpers shared by the HTTP layer and the services.
//!
//! - [`base_url`] - Base URL resolution and shortened link formatting

pub mod base_url;
