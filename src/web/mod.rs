//! Browser-facing pages.
//!
//! Uses Askama templates for server-side rendering.
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
