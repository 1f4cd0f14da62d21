// ============================================================================
// VIEWMODELS MODULE - Estado + Lógica UI
// ============================================================================

pub mod session_viewmodel;

pub use session_viewmodel::*;
