// ============================================================================
// SURFACES - Lo que los ViewModels necesitan de la UI
// ============================================================================
// Las vistas DOM implementan estos traits; los tests usan dobles en memoria.
// ============================================================================

use crate::models::{Activity, Notification};

/// Controles que dependen de la sesión
pub trait AuthControls {
    fn set_login_control_visible(&self, visible: bool);
    /// Indicador "logged in" + botón de logout
    fn set_logged_in_info(&self, label: Option<&str>);
    fn set_signup_enabled(&self, enabled: bool);
    fn set_delete_controls_visible(&self, visible: bool);
    fn set_auth_notice_visible(&self, visible: bool);
}

/// Lista de actividades + desplegable + formulario de inscripción
pub trait RosterSurface {
    /// Limpia y reconstruye la lista completa
    fn render(&self, activities: &[Activity]);
    /// Reemplaza la lista por un mensaje de error
    fn show_error(&self, text: &str);
    fn clear_options(&self);
    fn add_option(&self, name: &str);
    fn reset_signup_form(&self);
}

/// Modal de login
pub trait LoginFormSurface {
    fn open(&self);
    fn close(&self);
    fn reset(&self);
    fn show_error(&self, text: &str);
    fn clear_error(&self);
}

/// Región de mensajes transitorios
pub trait NotificationSurface {
    fn display(&self, notification: &Notification);
    fn hide(&self);
}

/// Programa una tarea diferida en el hilo de UI
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
