//! Environment configuration for the gallery API.

use crate::domain::error::{GalleryError, Result};
use std::net::SocketAddr;

/// Variables consulted for the connection string, in order.
pub const DATABASE_URL_VARS: [&str; 2] = ["DATABASE_URL", "VITE_DATABASE_URL"];

/// Variable naming the listen address.
pub const LISTEN_ADDR_VAR: &str = "GALLERY_API_ADDR";

/// Listen address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Database settings for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Cleaned connection string.
    pub url: String,
}

impl DatabaseConfig {
    /// Reads the connection string from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] when no variable holds a usable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the connection string through `lookup`.
    ///
    /// The first variable in [`DATABASE_URL_VARS`] whose cleaned value is
    /// non-empty wins.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Config`] when no variable holds a usable value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use galeria::api::DatabaseConfig;
    ///
    /// let config = DatabaseConfig::from_lookup(|name| {
    ///     (name == "VITE_DATABASE_URL").then(|| "'postgres://db/gallery'".to_string())
    /// })?;
    /// assert_eq!(config.url, "postgres://db/gallery");
    /// # Ok::<(), galeria::GalleryError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        DATABASE_URL_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|raw| clean_connection_string(&raw))
            .find(|url| !url.is_empty())
            .map(|url| Self { url })
            .ok_or_else(|| {
                GalleryError::Config("DATABASE_URL was not found in the environment variables.".to_string())
            })
    }
}

/// Strips surrounding whitespace and one leading and trailing quote.
///
/// Quotes are removed independently, so a stray quote on either end goes too.
#[must_use]
pub fn clean_connection_string(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = trimmed.strip_prefix(['\'', '"']).unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix(['\'', '"']).unwrap_or(unquoted);
    unquoted.trim().to_string()
}

/// Parses the listen address from `GALLERY_API_ADDR`.
///
/// # Errors
///
/// Returns [`GalleryError::Config`] when the value is not a socket address.
pub fn listen_addr<F>(lookup: F) -> Result<SocketAddr>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(LISTEN_ADDR_VAR)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

    raw.parse()
        .map_err(|e| GalleryError::Config(format!("invalid {LISTEN_ADDR_VAR} '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn primary_variable_wins() {
        let config = DatabaseConfig::from_lookup(env(&[
            ("DATABASE_URL", "postgres://primary"),
            ("VITE_DATABASE_URL", "postgres://fallback"),
        ]))
        .unwrap();
        assert_eq!(config.url, "postgres://primary");
    }

    #[test]
    fn blank_primary_falls_back() {
        let config = DatabaseConfig::from_lookup(env(&[
            ("DATABASE_URL", " \"\" "),
            ("VITE_DATABASE_URL", "postgres://fallback"),
        ]))
        .unwrap();
        assert_eq!(config.url, "postgres://fallback");
    }

    #[test]
    fn missing_configuration_is_a_config_error() {
        assert!(matches!(DatabaseConfig::from_lookup(env(&[])), Err(GalleryError::Config(_))));
    }

    #[test]
    fn quotes_and_whitespace_are_stripped() {
        assert_eq!(clean_connection_string("  \"postgres://x\"\n"), "postgres://x");
        assert_eq!(clean_connection_string("'postgres://x"), "postgres://x");
        assert_eq!(clean_connection_string("postgres://x'"), "postgres://x");
        assert_eq!(clean_connection_string("postgres://x"), "postgres://x");
    }

    #[test]
    fn listen_address_defaults_and_validates() {
        assert_eq!(listen_addr(env(&[])).unwrap(), "0.0.0.0:3000".parse().unwrap());
        assert_eq!(
            listen_addr(env(&[("GALLERY_API_ADDR", "127.0.0.1:8080")])).unwrap().port(),
            8080
        );
        assert!(listen_addr(env(&[("GALLERY_API_ADDR", "nowhere")])).is_err());
    }
}
