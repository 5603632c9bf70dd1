// ============================================================================
// NOTIFICATION CENTER - Un mensaje transitorio a la vez
// ============================================================================
// Slot único etiquetado: cada `show` incrementa la etiqueta y la expiración
// solo oculta el slot si su etiqueta sigue siendo la actual.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Notification, NotificationKind};
use crate::viewmodels::surfaces::{NotificationSurface, Scheduler};

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    tag: u64,
}

#[derive(Clone)]
pub struct NotificationCenter {
    surface: Rc<dyn NotificationSurface>,
    scheduler: Rc<dyn Scheduler>,
    slot: Rc<RefCell<Slot>>,
    ttl_ms: u32,
}

impl NotificationCenter {
    pub fn new(
        surface: Rc<dyn NotificationSurface>,
        scheduler: Rc<dyn Scheduler>,
        ttl_ms: u32,
    ) -> Self {
        Self {
            surface,
            scheduler,
            slot: Rc::new(RefCell::new(Slot::default())),
            ttl_ms,
        }
    }

    /// Reemplaza el mensaje visible y programa su ocultación; devuelve la etiqueta
    pub fn show(&self, text: &str, kind: NotificationKind) -> u64 {
        let notification = Notification {
            text: text.to_string(),
            kind,
        };
        let tag = {
            let mut slot = self.slot.borrow_mut();
            slot.tag += 1;
            slot.current = Some(notification.clone());
            slot.tag
        };
        self.surface.display(&notification);

        let center = self.clone();
        self.scheduler
            .schedule(self.ttl_ms, Box::new(move || center.expire(tag)));
        tag
    }

    pub fn success(&self, text: &str) -> u64 {
        self.show(text, NotificationKind::Success)
    }

    pub fn error(&self, text: &str) -> u64 {
        self.show(text, NotificationKind::Error)
    }

    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().current.clone()
    }

    fn expire(&self, tag: u64) {
        {
            let mut slot = self.slot.borrow_mut();
            if slot.tag != tag {
                log::debug!("⏰ [NOTIFY] Expiración {} ignorada, ya hay otro mensaje", tag);
                return;
            }
            slot.current = None;
        }
        self.surface.hide();
    }
}
