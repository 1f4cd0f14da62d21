// ============================================================================
// ROUTING MODULE - Tabla de rutas y guard de acceso
// ============================================================================

pub mod guard;
pub mod routes;

pub use guard::*;
pub use routes::*;
