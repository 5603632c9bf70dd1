// ============================================================================
// PORTAL - Raíz de composición de los ViewModels
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::SignupApi;
use crate::state::{SessionManager, TokenStore};
use crate::viewmodels::auth_gate::AuthGate;
use crate::viewmodels::login_viewmodel::LoginViewModel;
use crate::viewmodels::notification_center::NotificationCenter;
use crate::viewmodels::roster_viewmodel::RosterViewModel;
use crate::viewmodels::surfaces::{
    AuthControls, LoginFormSurface, NotificationSurface, RosterSurface, Scheduler,
};

/// Implementaciones de UI que necesita el portal
#[derive(Clone)]
pub struct PortalSurfaces {
    pub controls: Rc<dyn AuthControls>,
    pub roster: Rc<dyn RosterSurface>,
    pub login_form: Rc<dyn LoginFormSurface>,
    pub notifications: Rc<dyn NotificationSurface>,
    pub scheduler: Rc<dyn Scheduler>,
}

#[derive(Clone)]
pub struct Portal {
    pub session: SessionManager,
    pub gate: AuthGate,
    pub notifications: NotificationCenter,
    pub roster: RosterViewModel,
    pub login: LoginViewModel,
}

impl Portal {
    pub fn new(
        config: &AppConfig,
        api: Rc<dyn SignupApi>,
        store: Rc<dyn TokenStore>,
        surfaces: PortalSurfaces,
    ) -> Self {
        let session = SessionManager::new(api.clone(), store);
        let notifications = NotificationCenter::new(
            surfaces.notifications,
            surfaces.scheduler,
            config.notification_ttl_ms,
        );
        let gate = AuthGate::new(session.clone(), surfaces.controls, notifications.clone());
        let roster =
            RosterViewModel::new(api, gate.clone(), notifications.clone(), surfaces.roster);
        let login = LoginViewModel::new(
            session.clone(),
            gate.clone(),
            notifications.clone(),
            surfaces.login_form,
        );

        // Estado inicial: sin autenticar hasta que el servidor diga lo contrario
        gate.apply_ui_state();

        Self {
            session,
            gate,
            notifications,
            roster,
            login,
        }
    }

    /// Valida el token guardado y actualiza los controles
    pub async fn restore_session(&self) -> bool {
        let authenticated = self.session.restore().await;
        self.gate.apply_ui_state();
        authenticated
    }
}
