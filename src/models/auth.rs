use serde::{Deserialize, Serialize};

/// Respuesta de `POST /login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// Respuesta de `GET /check_auth`
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct CheckAuthResponse {
    #[serde(default)]
    pub authenticated: bool,
}

/// Respuesta de signup / unregister
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Cuerpo de error de las respuestas no-2xx
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
