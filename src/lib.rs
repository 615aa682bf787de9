pub mod app_state;
pub mod configuration;
pub mod domain;
pub mod role_router;
mod routers;
pub mod startup;
pub mod telemetry;
pub mod utils;
