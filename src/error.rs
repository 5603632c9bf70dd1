// ============================================================================
// ERRORES DEL CLIENTE
// ============================================================================

/// Toda falla termina en uno de estos casos; ninguno es fatal para la app
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// La petición no llegó a completarse
    #[error("network error: {0}")]
    Network(String),
    /// Respuesta 2xx con cuerpo ilegible
    #[error("parse error: {0}")]
    Parse(String),
    /// Respuesta no-2xx del servidor
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
    /// Acción mutante sin sesión de profesor; nunca sale a la red
    #[error("teacher login required")]
    Unauthorized,
    #[error("storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Fallo de transporte (red o parseo)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Parse(_))
    }

    /// Mensaje `detail` enviado por el servidor, si lo hay
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Texto para el usuario: detail literal, luego el fallback de rechazo,
    /// y para fallos de transporte el texto de reintento
    pub fn user_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        if self.is_transport() {
            transport_fallback.to_string()
        } else {
            rejected_fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_detail_is_surfaced_verbatim() {
        let error = ClientError::Rejected {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(error.user_message("Login failed", "retry"), "Invalid credentials");
        assert_eq!(error.to_string(), "HTTP 401: Invalid credentials");
    }

    #[test]
    fn rejected_without_detail_uses_fallback() {
        let error = ClientError::Rejected { status: 500, detail: None };
        assert!(!error.is_transport());
        assert_eq!(error.user_message("An error occurred", "retry"), "An error occurred");
    }

    #[test]
    fn transport_failures_use_retry_text() {
        let network = ClientError::Network("connection refused".to_string());
        let parse = ClientError::Parse("expected value".to_string());
        assert_eq!(network.user_message("fallback", "Please try again."), "Please try again.");
        assert_eq!(parse.user_message("fallback", "Please try again."), "Please try again.");
    }
}
