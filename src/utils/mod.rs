// Utils compartidos

pub mod constants;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod timers;

pub use constants::*;
