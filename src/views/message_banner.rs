use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{require_element, set_class_name, set_text_content, set_visible};
use crate::models::Notification;
use crate::viewmodels::NotificationSurface;

/// Región `#message`
pub struct DomMessageBanner {
    element: Element,
}

impl DomMessageBanner {
    pub fn from_document() -> Result<Self, JsValue> {
        Ok(Self {
            element: require_element("message")?,
        })
    }
}

impl NotificationSurface for DomMessageBanner {
    fn display(&self, notification: &Notification) {
        set_text_content(&self.element, &notification.text);
        set_class_name(&self.element, notification.kind.css_class());
        set_visible(&self.element, true);
    }

    fn hide(&self) {
        set_visible(&self.element, false);
    }
}
