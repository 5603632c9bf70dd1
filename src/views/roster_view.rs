// ============================================================================
// ROSTER VIEW - Lista de actividades + desplegable del formulario
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement, HtmlOptionElement, HtmlSelectElement};

use crate::dom::{append_child, clear_children, require_element, require_typed, ElementBuilder};
use crate::models::Activity;
use crate::viewmodels::RosterSurface;
use crate::views::activity_card::render_activity_card;

pub const ACTIVITY_PLACEHOLDER: &str = "-- Select an activity --";

pub struct DomRosterView {
    list: Element,
    select: HtmlSelectElement,
    form: HtmlFormElement,
}

impl DomRosterView {
    pub fn from_document() -> Result<Self, JsValue> {
        Ok(Self {
            list: require_element("activities-list")?,
            select: require_typed::<HtmlSelectElement>("activity")?,
            form: require_typed::<HtmlFormElement>("signup-form")?,
        })
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    fn try_render(&self, activities: &[Activity]) -> Result<(), JsValue> {
        clear_children(&self.list);
        for activity in activities {
            append_child(&self.list, &render_activity_card(activity)?)?;
        }
        Ok(())
    }

    fn try_add_option(&self, text: &str, value: &str) -> Result<(), JsValue> {
        let option = HtmlOptionElement::new_with_text_and_value(text, value)?;
        self.select.append_child(&option)?;
        Ok(())
    }
}

impl RosterSurface for DomRosterView {
    fn render(&self, activities: &[Activity]) {
        if let Err(e) = self.try_render(activities) {
            log::error!("❌ [VIEW] Error renderizando actividades: {:?}", e);
        }
    }

    fn show_error(&self, text: &str) {
        clear_children(&self.list);
        match ElementBuilder::new("p") {
            Ok(builder) => {
                if let Err(e) = append_child(&self.list, &builder.text(text).build()) {
                    log::error!("❌ [VIEW] Error mostrando placeholder: {:?}", e);
                }
            }
            Err(e) => log::error!("❌ [VIEW] Error creando placeholder: {:?}", e),
        }
    }

    fn clear_options(&self) {
        clear_children(&self.select);
        if let Err(e) = self.try_add_option(ACTIVITY_PLACEHOLDER, "") {
            log::warn!("⚠️ [VIEW] Error restaurando opción vacía: {:?}", e);
        }
    }

    fn add_option(&self, name: &str) {
        if let Err(e) = self.try_add_option(name, name) {
            log::warn!("⚠️ [VIEW] Error agregando opción {}: {:?}", name, e);
        }
    }

    fn reset_signup_form(&self) {
        self.form.reset();
    }
}
