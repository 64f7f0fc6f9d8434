// Library exports for the CLI binary and tests
pub mod api;
pub mod config;
pub mod models;
pub mod routing;
pub mod session;
pub mod services;
pub mod views;
