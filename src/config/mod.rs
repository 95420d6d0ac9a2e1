//! Persistent formatting preferences.
//! Owns the Config data structure plus disk persistence helpers.

pub mod manager;
pub mod model;

pub use manager::ConfigManager;
pub use model::Config;
