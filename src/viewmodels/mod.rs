// ============================================================================
// VIEWMODELS - Estado + lógica de UI, sin dependencia del DOM
// ============================================================================

pub mod auth_gate;
pub mod login_viewmodel;
pub mod notification_center;
pub mod portal;
pub mod roster_viewmodel;
pub mod surfaces;

pub use auth_gate::{AuthGate, Mutation};
pub use login_viewmodel::LoginViewModel;
pub use notification_center::NotificationCenter;
pub use portal::{Portal, PortalSurfaces};
pub use roster_viewmodel::RosterViewModel;
pub use surfaces::{AuthControls, LoginFormSurface, NotificationSurface, RosterSurface, Scheduler};
