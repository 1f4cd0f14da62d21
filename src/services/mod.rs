// ============================================================================
// SERVICES MODULE - Comunicación con el backend
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub mod api_client;
pub mod error;

#[cfg(target_arch = "wasm32")]
pub use api_client::*;
pub use error::*;
