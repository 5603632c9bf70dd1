// ============================================================================
// ACTIVITY CARD - Tarjeta de una actividad con su roster
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Activity;
use crate::utils::constants::NO_PARTICIPANTS;

pub const DELETE_BUTTON_CLASS: &str = "delete-btn";
pub const DATA_ACTIVITY: &str = "data-activity";
pub const DATA_EMAIL: &str = "data-email";

/// Renderizar tarjeta de actividad
pub fn render_activity_card(activity: &Activity) -> Result<Element, JsValue> {
    let schedule = labelled_paragraph("Schedule:", &activity.schedule)?;
    let availability = labelled_paragraph(
        "Availability:",
        &format!("{} spots left", activity.spots_left()),
    )?;

    let participants = ElementBuilder::new("div")?
        .class("participants-container")
        .child(render_participants(activity)?)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("activity-card")
        .child(ElementBuilder::new("h4")?.text(&activity.name).build())?
        .child(ElementBuilder::new("p")?.text(&activity.description).build())?
        .child(schedule)?
        .child(availability)?
        .child(participants)?
        .build())
}

fn labelled_paragraph(label: &str, value: &str) -> Result<Element, JsValue> {
    let strong = ElementBuilder::new("strong")?.text(label).build();
    let paragraph = ElementBuilder::new("p")?.child(strong)?.build();
    paragraph.append_with_str_1(&format!(" {}", value))?;
    Ok(paragraph)
}

fn render_participants(activity: &Activity) -> Result<Element, JsValue> {
    if !activity.has_participants() {
        let em = ElementBuilder::new("em")?.text(NO_PARTICIPANTS).build();
        return Ok(ElementBuilder::new("p")?.child(em)?.build());
    }

    let items = activity
        .participants
        .iter()
        .map(|email| render_participant(&activity.name, email))
        .collect::<Result<Vec<_>, _>>()?;

    let list = ElementBuilder::new("ul")?
        .class("participants-list")
        .children(items)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("participants-section")
        .child(ElementBuilder::new("h5")?.text("Participants:").build())?
        .child(list)?
        .build())
}

/// El botón lleva email y actividad como atributos
fn render_participant(activity: &str, email: &str) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("span")?
        .class("participant-email")
        .text(email)
        .build();
    let delete = ElementBuilder::new("button")?
        .class(DELETE_BUTTON_CLASS)
        .attr("type", "button")?
        .attr(DATA_ACTIVITY, activity)?
        .attr(DATA_EMAIL, email)?
        .text("❌")
        .build();

    Ok(ElementBuilder::new("li")?.child(label)?.child(delete)?.build())
}
