// ============================================================================
// AUTH GATE - Permisos de acciones mutantes + estado de los controles
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::state::SessionManager;
use crate::utils::constants::{LOGGED_IN_LABEL, SIGNUP_REQUIRES_LOGIN, UNREGISTER_REQUIRES_LOGIN};
use crate::viewmodels::notification_center::NotificationCenter;
use crate::viewmodels::surfaces::AuthControls;

/// Acciones que modifican un roster
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Signup,
    Unregister,
}

impl Mutation {
    pub fn rejection_message(self) -> &'static str {
        match self {
            Self::Signup => SIGNUP_REQUIRES_LOGIN,
            Self::Unregister => UNREGISTER_REQUIRES_LOGIN,
        }
    }
}

#[derive(Clone)]
pub struct AuthGate {
    session: SessionManager,
    controls: Rc<dyn AuthControls>,
    notifications: NotificationCenter,
}

impl AuthGate {
    pub fn new(
        session: SessionManager,
        controls: Rc<dyn AuthControls>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            session,
            controls,
            notifications,
        }
    }

    pub fn can_mutate(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Deja pasar la acción devolviendo el token, o la rechaza con un mensaje
    /// de error antes de tocar la red
    pub fn authorize(&self, mutation: Mutation) -> Result<String, ClientError> {
        if !self.can_mutate() {
            log::warn!("🚫 [GATE] {:?} rechazado: sin sesión de profesor", mutation);
            self.notifications.error(mutation.rejection_message());
            return Err(ClientError::Unauthorized);
        }
        Ok(self.session.token().unwrap_or_default())
    }

    /// Idempotente; se llama tras cada cambio de sesión
    pub fn apply_ui_state(&self) {
        let authenticated = self.can_mutate();
        self.controls.set_login_control_visible(!authenticated);
        self.controls
            .set_logged_in_info(authenticated.then_some(LOGGED_IN_LABEL));
        self.controls.set_auth_notice_visible(!authenticated);
        self.controls.set_signup_enabled(authenticated);
        self.apply_delete_controls();
    }

    /// Los botones de borrar se recrean en cada render del roster
    pub fn apply_delete_controls(&self) {
        self.controls
            .set_delete_controls_visible(self.can_mutate());
    }
}
