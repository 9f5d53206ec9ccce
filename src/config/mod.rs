//! Environment-driven configuration, loaded once at startup.

pub mod app;
pub mod crop;
pub mod env;
pub mod fetch;
pub mod retention;
pub mod storage;
pub mod web;

pub use app::AppConfig;
