// ============================================================================
// CONFIG - Configuración compilada desde variables de entorno
// ============================================================================
// build.rs vuelca el .env en `cargo:rustc-env`, aquí se lee con option_env!
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_AUTH_TOKEN_KEY, DEFAULT_NOTIFICATION_TTL_MS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// URL base del backend; vacía = mismo origen que la página
    pub backend_url: String,
    /// Clave del slot de localStorage que guarda el token
    pub auth_token_key: String,
    pub notification_ttl_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            auth_token_key: DEFAULT_AUTH_TOKEN_KEY.to_string(),
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("AUTH_TOKEN_KEY"),
            option_env!("NOTIFICATION_TTL_MS"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Construye la config a partir de valores crudos, con fallback a los defaults
    pub fn from_values(
        backend_url: Option<&str>,
        auth_token_key: Option<&str>,
        notification_ttl_ms: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(normalize_base_url)
                .unwrap_or(defaults.backend_url),
            auth_token_key: auth_token_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.auth_token_key),
            notification_ttl_ms: notification_ttl_ms
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.notification_ttl_ms),
            enable_logging: enable_logging
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

/// Quita espacios y la barra final para poder concatenar rutas
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_same_origin_with_five_second_notifications() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend_url, "");
        assert_eq!(config.auth_token_key, "authToken");
        assert_eq!(config.notification_ttl_ms, 5_000);
        assert!(config.is_logging_enabled());
    }

    #[test]
    fn backend_url_drops_trailing_slash() {
        let url = Some(" https://school.example.com/ ");
        let config = AppConfig::from_values(url, None, None, None);
        assert_eq!(config.backend_url, "https://school.example.com");
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, Some("  "), Some("soon"), Some("maybe"));
        assert_eq!(config.auth_token_key, "authToken");
        assert_eq!(config.notification_ttl_ms, 5_000);
        assert!(config.enable_logging);
    }

    #[test]
    fn disabled_logging_only_keeps_warnings() {
        let config = AppConfig::from_values(None, None, Some("2500"), Some("false"));
        assert_eq!(config.notification_ttl_ms, 2_500);
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
