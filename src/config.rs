//! Server configuration, read from the environment (and `.env`) plus the
//! `[package.metadata.leptos]` section of `Cargo.toml`.

use leptos::config::errors::LeptosConfigError;
use leptos::config::{get_configuration, LeptosOptions};

use crate::models::{Theme, ThemeParseError};

pub const THEME_VAR: &str = "DOCUTHINKER_THEME";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {0}", var = THEME_VAR)]
    InvalidTheme(#[from] ThemeParseError),
    #[error("failed to load Leptos configuration: {0}")]
    Leptos(#[from] LeptosConfigError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub leptos_options: LeptosOptions,
    /// Theme served to visitors without a stored preference
    pub theme: Theme,
}

impl AppConfig {
    /// An invalid theme is reported and replaced by the default rather than
    /// failing startup.
    pub fn load() -> Result<Self, ConfigError> {
        let conf = get_configuration(None)?;

        let theme = theme_from_value(std::env::var(THEME_VAR).ok().as_deref())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to the {} theme", Theme::default());
                Theme::default()
            });

        Ok(Self {
            leptos_options: conf.leptos_options,
            theme,
        })
    }
}

pub fn theme_from_value(value: Option<&str>) -> Result<Theme, ConfigError> {
    match value {
        None => Ok(Theme::default()),
        Some(value) if value.trim().is_empty() => Ok(Theme::default()),
        Some(value) => Ok(value.parse()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_theme_uses_default() {
        assert_eq!(theme_from_value(None).unwrap(), Theme::Light);
        assert_eq!(theme_from_value(Some("  ")).unwrap(), Theme::Light);
    }

    #[test]
    fn valid_theme_is_parsed() {
        assert_eq!(theme_from_value(Some("DARK")).unwrap(), Theme::Dark);
    }

    #[test]
    fn invalid_theme_is_reported() {
        let err = theme_from_value(Some("neon")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTheme(_)));
        assert!(err.to_string().contains(THEME_VAR));
    }

    #[test]
    fn invalid_theme_keeps_parse_error_as_source() {
        use std::error::Error;

        let err = theme_from_value(Some("neon")).unwrap_err();
        let source = err
            .source()
            .and_then(|source| source.downcast_ref::<ThemeParseError>())
            .expect("parse error in chain");
        assert_eq!(source, &ThemeParseError("neon".to_string()));
        assert_eq!(
            err.to_string(),
            "invalid DOCUTHINKER_THEME: unknown theme \"neon\", expected \"light\" or \"dark\""
        );
    }
}
