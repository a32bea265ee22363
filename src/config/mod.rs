/// Database configuration and connection management
pub mod database;

/// Application settings (report branding, database path) from config.toml
pub mod settings;
