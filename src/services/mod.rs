pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use api::{check_status, decode_response, Endpoints, SignupApi};
#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
