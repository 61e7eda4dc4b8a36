pub mod api;
pub mod app;
pub mod audio;
pub mod cache;
pub mod config;
pub mod error;
pub mod logger;
pub mod mapper;
pub mod models;
pub mod render;

pub use app::DictApp;
pub use config::Config;
pub use models::*;
