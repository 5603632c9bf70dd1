// ============================================================================
// LOGIN VIEWMODEL - Modal de login y logout
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::state::SessionManager;
use crate::utils::constants::{
    LOGIN_FAILED, LOGIN_FAILED_RETRY, LOGIN_SUCCESS, LOGOUT_FAILED, LOGOUT_FAILED_RETRY,
    LOGOUT_SUCCESS,
};
use crate::viewmodels::auth_gate::AuthGate;
use crate::viewmodels::notification_center::NotificationCenter;
use crate::viewmodels::surfaces::LoginFormSurface;

#[derive(Clone)]
pub struct LoginViewModel {
    session: SessionManager,
    gate: AuthGate,
    notifications: NotificationCenter,
    form: Rc<dyn LoginFormSurface>,
}

impl LoginViewModel {
    pub fn new(
        session: SessionManager,
        gate: AuthGate,
        notifications: NotificationCenter,
        form: Rc<dyn LoginFormSurface>,
    ) -> Self {
        Self {
            session,
            gate,
            notifications,
            form,
        }
    }

    pub fn open(&self) {
        self.form.clear_error();
        self.form.open();
    }

    pub fn close(&self) {
        self.form.close();
    }

    /// El error se muestra dentro del modal, no como notificación
    pub async fn submit(&self, username: &str, password: &str) -> Result<(), ClientError> {
        match self.session.login(username, password).await {
            Ok(()) => {
                self.gate.apply_ui_state();
                self.form.close();
                self.form.reset();
                self.notifications.success(LOGIN_SUCCESS);
                Ok(())
            }
            Err(e) => {
                self.form
                    .show_error(&e.user_message(LOGIN_FAILED, LOGIN_FAILED_RETRY));
                Err(e)
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        match self.session.logout().await {
            Ok(()) => {
                self.gate.apply_ui_state();
                self.notifications.success(LOGOUT_SUCCESS);
                Ok(())
            }
            Err(e) => {
                self.notifications
                    .error(&e.user_message(LOGOUT_FAILED, LOGOUT_FAILED_RETRY));
                Err(e)
            }
        }
    }
}
