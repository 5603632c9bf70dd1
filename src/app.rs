// ============================================================================
// APP - Enlaza el DOM con el portal
// ============================================================================
// Cada evento lanza su propia tarea con spawn_local: la UI sigue respondiendo
// mientras la petición está en vuelo y no hay cancelación.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::config::CONFIG;
use crate::dom::{
    get_attribute, input_value, on_click, on_submit, query_selector_all, require_element,
    select_value, window,
};
use crate::services::ApiClient;
use crate::state::{MemoryTokenStore, TokenStore};
use crate::utils::storage::LocalStorageTokenStore;
use crate::utils::timers::GlooScheduler;
use crate::viewmodels::{Portal, PortalSurfaces};
use crate::views::activity_card::{DATA_ACTIVITY, DATA_EMAIL, DELETE_BUTTON_CLASS};
use crate::views::{DomAuthControls, DomLoginForm, DomMessageBanner, DomRosterView};

/// Aplicación principal
pub struct App {
    portal: Portal,
    roster_view: Rc<DomRosterView>,
    login_form: Rc<DomLoginForm>,
}

impl App {
    /// Crear nueva aplicación a partir del documento cargado
    pub fn new() -> Result<Self, JsValue> {
        let roster_view = Rc::new(DomRosterView::from_document()?);
        let login_form = Rc::new(DomLoginForm::from_document()?);

        let detected = LocalStorageTokenStore::detect(&CONFIG.auth_token_key);
        let store: Rc<dyn TokenStore> = match detected {
            Some(store) => Rc::new(store),
            None => {
                log::warn!("⚠️ [APP] localStorage no disponible, el token se pierde al recargar");
                Rc::new(MemoryTokenStore::new())
            }
        };

        let surfaces = PortalSurfaces {
            controls: Rc::new(DomAuthControls::from_document()?),
            roster: roster_view.clone(),
            login_form: login_form.clone(),
            notifications: Rc::new(DomMessageBanner::from_document()?),
            scheduler: Rc::new(GlooScheduler),
        };
        let portal = Portal::new(&CONFIG, Rc::new(ApiClient::new()), store, surfaces);

        Ok(Self {
            portal,
            roster_view,
            login_form,
        })
    }

    /// Registra los listeners y lanza la carga inicial
    pub fn start(&self) -> Result<(), JsValue> {
        self.bind_login()?;
        self.bind_logout()?;
        self.bind_signup()?;
        self.bind_unregister()?;

        let portal = self.portal.clone();
        spawn_local(async move {
            portal.restore_session().await;
        });

        let portal = self.portal.clone();
        spawn_local(async move {
            let _ = portal.roster.refresh().await;
        });

        log::info!("🚀 [APP] Listeners registrados");
        Ok(())
    }

    fn bind_login(&self) -> Result<(), JsValue> {
        let login = self.portal.login.clone();
        on_click(&require_element("login-btn")?, move |_| login.open())?;

        for close in query_selector_all(".close") {
            let login = self.portal.login.clone();
            on_click(&close, move |_| login.close())?;
        }

        // Click en el fondo del modal lo cierra
        if let Some(win) = window() {
            let login = self.portal.login.clone();
            let modal = self.login_form.modal().clone();
            on_click(&win, move |event: MouseEvent| {
                let on_backdrop = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .map(|target| target == modal)
                    .unwrap_or(false);
                if on_backdrop {
                    login.close();
                }
            })?;
        }

        let login = self.portal.login.clone();
        on_submit(self.login_form.form(), move |_| {
            let login = login.clone();
            let username = input_value("username");
            let password = input_value("password");
            spawn_local(async move {
                let _ = login.submit(&username, &password).await;
            });
        })
    }

    fn bind_logout(&self) -> Result<(), JsValue> {
        let login = self.portal.login.clone();
        on_click(&require_element("logout-btn")?, move |_| {
            let login = login.clone();
            spawn_local(async move {
                let _ = login.logout().await;
            });
        })
    }

    fn bind_signup(&self) -> Result<(), JsValue> {
        let roster = self.portal.roster.clone();
        on_submit(self.roster_view.form(), move |_| {
            let roster = roster.clone();
            let email = input_value("email");
            let activity = select_value("activity");
            spawn_local(async move {
                let _ = roster.signup(&email, &activity).await;
            });
        })
    }

    /// Delegación: un solo listener en la lista lee los atributos del botón
    fn bind_unregister(&self) -> Result<(), JsValue> {
        let roster = self.portal.roster.clone();
        on_click(self.roster_view.list(), move |event: MouseEvent| {
            let Some(button) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .filter(|element| element.class_list().contains(DELETE_BUTTON_CLASS))
            else {
                return;
            };
            let (Some(activity), Some(email)) = (
                get_attribute(&button, DATA_ACTIVITY),
                get_attribute(&button, DATA_EMAIL),
            ) else {
                log::warn!("⚠️ [APP] Botón de borrar sin atributos");
                return;
            };
            let roster = roster.clone();
            spawn_local(async move {
                let _ = roster.unregister(&email, &activity).await;
            });
        })
    }
}
