pub mod activity;
pub mod auth;
pub mod notification;

pub use activity::{Activity, ActivityCatalog, ActivityDetails};
pub use auth::{CheckAuthResponse, ErrorDetail, LoginResponse, MessageResponse};
pub use notification::{Notification, NotificationKind};
