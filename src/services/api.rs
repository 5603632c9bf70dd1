// ============================================================================
// SIGNUP API - Contrato con el backend (sin lógica de negocio)
// ============================================================================

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::{
    ActivityCatalog, CheckAuthResponse, ErrorDetail, LoginResponse, MessageResponse,
};

/// Capacidades del servidor que consume el cliente.
///
/// `?Send`: todo corre en el hilo de UI del navegador.
#[async_trait(?Send)]
pub trait SignupApi {
    async fn list_activities(&self) -> Result<ActivityCatalog, ClientError>;
    async fn check_auth(&self, token: &str) -> Result<CheckAuthResponse, ClientError>;
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError>;
    /// Cualquier 2xx es éxito; el cuerpo se ignora
    async fn logout(&self, token: &str) -> Result<(), ClientError>;
    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError>;
    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError>;
}

/// Construye las URLs de cada capacidad, codificando segmentos y query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: crate::config::normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn activities(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    pub fn check_auth(&self, token: &str) -> String {
        format!("{}/check_auth?token={}", self.base_url, encode(token))
    }

    pub fn login(&self, username: &str, password: &str) -> String {
        format!(
            "{}/login?username={}&password={}",
            self.base_url,
            encode(username),
            encode(password)
        )
    }

    pub fn logout(&self, token: &str) -> String {
        format!("{}/logout?token={}", self.base_url, encode(token))
    }

    pub fn signup(&self, activity: &str, email: &str, token: &str) -> String {
        self.roster_action(activity, "signup", email, token)
    }

    pub fn unregister(&self, activity: &str, email: &str, token: &str) -> String {
        self.roster_action(activity, "unregister", email, token)
    }

    fn roster_action(&self, activity: &str, action: &str, email: &str, token: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}&token={}",
            self.base_url,
            encode(activity),
            action,
            encode(email),
            encode(token)
        )
    }
}

fn encode(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// 2xx → cuerpo tipado (o `Parse`); resto → rechazo con el `detail` si viene
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ClientError::Parse(e.to_string()))
}

/// Solo mira el estado; el cuerpo de un 2xx se ignora
pub fn check_status(status: u16, body: &str) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let detail = match serde_json::from_str::<ErrorDetail>(body) {
        Ok(error) => error.detail,
        Err(e) => {
            log::warn!("⚠️ [API] Cuerpo de error ilegible (HTTP {}): {}", status, e);
            None
        }
    };
    log::warn!("⚠️ [API] HTTP {}: {:?}", status, detail);
    Err(ClientError::Rejected { status, detail })
}
