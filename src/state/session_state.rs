// ============================================================================
// SESSION MANAGER - Única fuente de verdad de "soy un profesor autenticado"
// ============================================================================
// `authenticated` solo pasa a true justo después de que el servidor lo
// confirme (login o check_auth) y vuelve a false cada vez que el token se
// borra o es rechazado.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ClientError;
use crate::services::SignupApi;
use crate::state::token_store::TokenStore;

/// Sesión del profesor. Clonar comparte el mismo estado (Rc).
#[derive(Clone)]
pub struct SessionManager {
    api: Rc<dyn SignupApi>,
    store: Rc<dyn TokenStore>,
    token: Rc<RefCell<Option<String>>>,
    authenticated: Rc<Cell<bool>>,
}

impl SessionManager {
    /// Lee el token guardado; queda sin autenticar hasta `restore()`
    pub fn new(api: Rc<dyn SignupApi>, store: Rc<dyn TokenStore>) -> Self {
        let token = store.load().filter(|token| !token.is_empty());
        Self {
            api,
            store,
            token: Rc::new(RefCell::new(token)),
            authenticated: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Valida el token guardado contra el servidor al arrancar
    pub async fn restore(&self) -> bool {
        let stored = self.store.load().filter(|token| !token.is_empty());
        *self.token.borrow_mut() = stored.clone();

        let Some(token) = stored else {
            log::info!("🔓 [SESSION] Sin token guardado");
            self.authenticated.set(false);
            return false;
        };

        match self.api.check_auth(&token).await {
            Ok(response) if response.authenticated => {
                log::info!("✅ [SESSION] Token guardado confirmado por el servidor");
                self.authenticated.set(true);
                true
            }
            Ok(_) => {
                log::info!("🔓 [SESSION] Token guardado rechazado, limpiando");
                self.forget_token();
                false
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error verificando auth: {}", e);
                self.forget_token();
                false
            }
        }
    }

    /// Login; si falla el token no cambia y el error vuelve al llamador
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        log::info!("🔐 [SESSION] Iniciando login de {}", username);
        let response = self.api.login(username, password).await.map_err(|e| {
            log::warn!("⚠️ [SESSION] Login fallido: {}", e);
            e
        })?;

        // Sin almacenamiento la sesión sigue viva en memoria hasta recargar
        if let Err(e) = self.store.save(&response.token) {
            log::warn!("⚠️ [SESSION] Token solo en memoria, no se pudo guardar: {}", e);
        }
        *self.token.borrow_mut() = Some(response.token);
        self.authenticated.set(true);
        log::info!("✅ [SESSION] Login correcto");
        Ok(())
    }

    /// Logout; un fallo de transporte deja la sesión intacta
    pub async fn logout(&self) -> Result<(), ClientError> {
        let token = self.token().unwrap_or_default();
        match self.api.logout(&token).await {
            Ok(()) => {
                self.forget_token();
                log::info!("👋 [SESSION] Logout completado");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error en logout, la sesión se mantiene: {}", e);
                Err(e)
            }
        }
    }

    fn forget_token(&self) {
        *self.token.borrow_mut() = None;
        if let Err(e) = self.store.clear() {
            log::error!("❌ [SESSION] No se pudo borrar el token guardado: {}", e);
        }
        self.authenticated.set(false);
    }
}
