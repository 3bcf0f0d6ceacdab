//! HTTP surface of the ToolRent backend
//!
//! Admin login/logout and the step-by-step password reset flow, served with
//! actix-web. Library exports exist for the binary and integration tests.

pub mod app;
pub mod bootstrap;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
