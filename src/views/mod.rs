// ============================================================================
// VIEWS - Implementaciones DOM de las superficies (sin lógica)
// ============================================================================

pub mod activity_card;
pub mod auth_controls;
pub mod login_modal;
pub mod message_banner;
pub mod roster_view;

pub use auth_controls::DomAuthControls;
pub use login_modal::DomLoginForm;
pub use message_banner::DomMessageBanner;
pub use roster_view::DomRosterView;
