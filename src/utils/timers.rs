use gloo_timers::callback::Timeout;

use crate::viewmodels::Scheduler;

/// Scheduler del navegador (setTimeout)
#[derive(Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // Sin cancelación: el timer vive hasta dispararse
        Timeout::new(delay_ms, task).forget();
    }
}
