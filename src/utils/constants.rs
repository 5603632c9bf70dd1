// ============================================================================
// CONSTANTES - Textos visibles y valores por defecto
// ============================================================================

/// Slot de localStorage donde vive el token del profesor
pub const DEFAULT_AUTH_TOKEN_KEY: &str = "authToken";

/// Tiempo de vida de una notificación
pub const DEFAULT_NOTIFICATION_TTL_MS: u32 = 5_000;

pub const LOGGED_IN_LABEL: &str = "Logged in as Teacher";

// Sesión
pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_FAILED_RETRY: &str = "Login failed. Please try again.";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully";
pub const LOGOUT_FAILED: &str = "Logout failed";
pub const LOGOUT_FAILED_RETRY: &str = "Logout failed. Please try again.";

// Roster
pub const SIGNUP_REQUIRES_LOGIN: &str = "Please login as a teacher to register students";
pub const UNREGISTER_REQUIRES_LOGIN: &str = "Please login as a teacher to unregister students";
pub const GENERIC_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED_RETRY: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_RETRY: &str = "Failed to unregister. Please try again.";
pub const ACTIVITIES_LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";
