// ============================================================================
// STATE MODULE - Sesión compartida con Rc<RefCell>
// ============================================================================

pub mod session_state;
pub mod token_store;

pub use session_state::SessionManager;
pub use token_store::{MemoryTokenStore, TokenStore};
