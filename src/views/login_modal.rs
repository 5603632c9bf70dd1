// ============================================================================
// LOGIN MODAL
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement};

use crate::dom::{require_element, require_typed, set_class_name, set_text_content, set_visible};
use crate::viewmodels::LoginFormSurface;

pub struct DomLoginForm {
    modal: Element,
    form: HtmlFormElement,
    message: Element,
}

impl DomLoginForm {
    pub fn from_document() -> Result<Self, JsValue> {
        Ok(Self {
            modal: require_element("login-modal")?,
            form: require_typed::<HtmlFormElement>("login-form")?,
            message: require_element("login-message")?,
        })
    }

    pub fn modal(&self) -> &Element {
        &self.modal
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl LoginFormSurface for DomLoginForm {
    fn open(&self) {
        set_visible(&self.modal, true);
    }

    fn close(&self) {
        set_visible(&self.modal, false);
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn show_error(&self, text: &str) {
        set_text_content(&self.message, text);
        set_class_name(&self.message, "error");
        set_visible(&self.message, true);
    }

    fn clear_error(&self) {
        set_text_content(&self.message, "");
        set_visible(&self.message, false);
    }
}
