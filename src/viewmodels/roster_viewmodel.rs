// ============================================================================
// ROSTER VIEWMODEL - Lista de actividades sincronizada con el servidor
// ============================================================================
// No hay copia local autoritativa: cada mutación exitosa dispara un refresh
// completo, siempre después de recibir la respuesta y nunca en paralelo.
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::models::{ActivityCatalog, MessageResponse};
use crate::services::SignupApi;
use crate::utils::constants::{
    ACTIVITIES_LOAD_FAILED, GENERIC_ERROR, SIGNUP_FAILED_RETRY, UNREGISTER_FAILED_RETRY,
};
use crate::viewmodels::auth_gate::{AuthGate, Mutation};
use crate::viewmodels::notification_center::NotificationCenter;
use crate::viewmodels::surfaces::RosterSurface;

#[derive(Clone)]
pub struct RosterViewModel {
    api: Rc<dyn SignupApi>,
    gate: AuthGate,
    notifications: NotificationCenter,
    surface: Rc<dyn RosterSurface>,
}

impl RosterViewModel {
    pub fn new(
        api: Rc<dyn SignupApi>,
        gate: AuthGate,
        notifications: NotificationCenter,
        surface: Rc<dyn RosterSurface>,
    ) -> Self {
        Self {
            api,
            gate,
            notifications,
            surface,
        }
    }

    /// Trae el catálogo y reconstruye lista y desplegable.
    /// Si falla, la lista muestra el error y el desplegable no se toca.
    pub async fn refresh(&self) -> Result<ActivityCatalog, ClientError> {
        match self.api.list_activities().await {
            Ok(catalog) => {
                self.surface.render(catalog.activities());
                self.surface.clear_options();
                for name in catalog.names() {
                    self.surface.add_option(name);
                }
                self.gate.apply_delete_controls();
                log::info!("✅ [ROSTER] {} actividades renderizadas", catalog.len());
                Ok(catalog)
            }
            Err(e) => {
                log::error!("❌ [ROSTER] Error cargando actividades: {}", e);
                self.surface.show_error(ACTIVITIES_LOAD_FAILED);
                Err(e)
            }
        }
    }

    pub async fn signup(
        &self,
        email: &str,
        activity: &str,
    ) -> Result<MessageResponse, ClientError> {
        let token = self.gate.authorize(Mutation::Signup)?;
        match self.api.signup(activity, email, &token).await {
            Ok(response) => {
                self.notifications.success(&response.message);
                self.surface.reset_signup_form();
                let _ = self.refresh().await;
                Ok(response)
            }
            Err(e) => {
                log::warn!("⚠️ [ROSTER] Signup fallido: {}", e);
                self.notifications
                    .error(&e.user_message(GENERIC_ERROR, SIGNUP_FAILED_RETRY));
                Err(e)
            }
        }
    }

    /// `email` y `activity` vienen del propio botón de borrar
    pub async fn unregister(
        &self,
        email: &str,
        activity: &str,
    ) -> Result<MessageResponse, ClientError> {
        let token = self.gate.authorize(Mutation::Unregister)?;
        match self.api.unregister(activity, email, &token).await {
            Ok(response) => {
                self.notifications.success(&response.message);
                let _ = self.refresh().await;
                Ok(response)
            }
            Err(e) => {
                log::warn!("⚠️ [ROSTER] Unregister fallido: {}", e);
                self.notifications
                    .error(&e.user_message(GENERIC_ERROR, UNREGISTER_FAILED_RETRY));
                Err(e)
            }
        }
    }
}
