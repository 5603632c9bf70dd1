// ============================================================================
// CLASS SIGNUP PWA - Cliente WASM del servicio de inscripción a actividades
// ============================================================================
// Arquitectura MVVM:
// - Views: implementaciones DOM de las superficies (sin lógica)
// - ViewModels: sesión/permisos/roster/notificaciones, independientes del DOM
// - Services: SOLO comunicación API
// - State: SessionManager con Rc<RefCell> + slot durable del token
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    // Instancia global de App para que los listeners no se queden huérfanos
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        // Inicializar logging
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 Class Signup - Rust + MVVM");

        let app = App::new()?;
        app.start()?;

        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(app);
        });
        Ok(())
    }
}
