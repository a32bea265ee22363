//! Application settings loading from config.toml
//!
//! This module provides functionality to load deployment-specific settings
//! from a TOML configuration file: the app name and currency unit stamped
//! into the settlement reports, and the database path. Missing file or
//! missing fields fall back to defaults so a fresh checkout runs as-is.

use crate::core::report::ReportStyle;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    /// App name shown in report headers and footers (default "MessMate")
    pub app_name: Option<String>,
    /// Currency unit suffix used in reports (default "Tk")
    pub currency: Option<String>,
    /// Database URL override (default taken from `DATABASE_URL` / local file)
    pub database_url: Option<String>,
}

impl Settings {
    /// Resolves the report branding, applying defaults for unset fields.
    #[must_use]
    pub fn report_style(&self) -> ReportStyle {
        let mut style = ReportStyle::default();
        if let Some(name) = &self.app_name {
            style.app_name = name.clone();
        }
        if let Some(unit) = &self.currency {
            style.currency = unit.clone();
        }
        style
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML syntax is invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml), falling back to
/// defaults when the file does not exist.
pub fn load_default_settings() -> Result<Settings> {
    if Path::new("config.toml").exists() {
        load_settings("config.toml")
    } else {
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_settings() {
        let toml_str = r#"
            app_name = "SuperMeal"
            currency = "Tk"
            database_url = "sqlite://data/house.sqlite"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.app_name.as_deref(), Some("SuperMeal"));
        assert_eq!(settings.currency.as_deref(), Some("Tk"));

        let style = settings.report_style();
        assert_eq!(style.app_name, "SuperMeal");
        assert_eq!(style.currency, "Tk");
    }

    #[test]
    fn test_defaults_when_empty() {
        let settings: Settings = toml::from_str("").unwrap();
        let style = settings.report_style();
        assert_eq!(style.app_name, "MessMate");
        assert_eq!(style.currency, "Tk");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let dir = std::env::temp_dir().join("messmate-settings-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "app_name = [not toml").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
