// ============================================================================
// AUTH CONTROLS - Botón de login, indicador de sesión, aviso y formulario
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement};

use crate::dom::{query_selector_all, require_element, set_text_content, set_visible};
use crate::viewmodels::AuthControls;
use crate::views::activity_card::DELETE_BUTTON_CLASS;

pub struct DomAuthControls {
    login_button: Element,
    logged_in_info: Element,
    username_display: Element,
    auth_notice: Element,
    signup_button: HtmlButtonElement,
}

impl DomAuthControls {
    pub fn from_document() -> Result<Self, JsValue> {
        let signup_button = require_element("signup-form")?
            .query_selector("button[type='submit']")?
            .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
            .ok_or_else(|| JsValue::from_str("No signup submit button found"))?;

        Ok(Self {
            login_button: require_element("login-btn")?,
            logged_in_info: require_element("logged-in-info")?,
            username_display: require_element("username-display")?,
            auth_notice: require_element("auth-notice")?,
            signup_button,
        })
    }
}

impl AuthControls for DomAuthControls {
    fn set_login_control_visible(&self, visible: bool) {
        set_visible(&self.login_button, visible);
    }

    fn set_logged_in_info(&self, label: Option<&str>) {
        if let Some(label) = label {
            set_text_content(&self.username_display, label);
        }
        set_visible(&self.logged_in_info, label.is_some());
    }

    fn set_signup_enabled(&self, enabled: bool) {
        self.signup_button.set_disabled(!enabled);
    }

    fn set_delete_controls_visible(&self, visible: bool) {
        for button in query_selector_all(&format!(".{}", DELETE_BUTTON_CLASS)) {
            set_visible(&button, visible);
        }
    }

    fn set_auth_notice_visible(&self, visible: bool) {
        set_visible(&self.auth_notice, visible);
    }
}
