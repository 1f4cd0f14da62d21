/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5000 (por defecto)
/// - Producción: via BACKEND_URL env var
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Clave de localStorage para el token de sesión
pub const TOKEN_STORAGE_KEY: &str = "fitness-token";

/// Clave de localStorage para la identidad serializada.
/// Invariante: ambas claves se escriben y se borran siempre juntas.
pub const IDENTITY_STORAGE_KEY: &str = "fitness-user";

/// Evento global que dispara el logout forzado cuando el backend
/// rechaza el token (401 en cualquier llamada autenticada)
pub const SESSION_EXPIRED_EVENT: &str = "sessionExpired";
