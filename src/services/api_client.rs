// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Implementación de SignupApi sobre gloo-net. No guarda estado de sesión:
// el token llega como parámetro en cada llamada.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;
use crate::error::ClientError;
use crate::models::{ActivityCatalog, CheckAuthResponse, LoginResponse, MessageResponse};
use crate::services::api::{check_status, decode_response, Endpoints, SignupApi};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SignupApi for ApiClient {
    async fn list_activities(&self) -> Result<ActivityCatalog, ClientError> {
        let catalog: ActivityCatalog = fetch(Request::get(&self.endpoints.activities())).await?;
        log::info!("📋 [API] {} actividades recibidas", catalog.len());
        Ok(catalog)
    }

    async fn check_auth(&self, token: &str) -> Result<CheckAuthResponse, ClientError> {
        fetch(Request::get(&self.endpoints.check_auth(token))).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        log::info!("🔐 [API] Login para usuario: {}", username);
        fetch(Request::post(&self.endpoints.login(username, password))).await
    }

    async fn logout(&self, token: &str) -> Result<(), ClientError> {
        let (status, body) = send(Request::post(&self.endpoints.logout(token))).await?;
        check_status(status, &body)
    }

    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        log::info!("📝 [API] Signup de {} en {}", email, activity);
        let url = self.endpoints.signup(activity, email, token);
        fetch(Request::post(&url)).await
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        log::info!("🗑️ [API] Unregister de {} en {}", email, activity);
        let url = self.endpoints.unregister(activity, email, token);
        fetch(Request::delete(&url)).await
    }
}

/// Envía la petición y devuelve estado y cuerpo crudo
async fn send(request: RequestBuilder) -> Result<(u16, String), ClientError> {
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    Ok((status, body))
}

async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let (status, body) = send(request).await?;
    decode_response(status, &body)
}
