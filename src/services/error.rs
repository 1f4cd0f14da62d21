// ============================================================================
// API ERROR - Errores tipados de la capa HTTP
// ============================================================================
// Los mensajes Display se muestran tal cual al usuario, por eso van en
// inglés como el resto de la UI.
// ============================================================================

use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ApiError {
    /// 401 en login/register: credenciales malas, NO expira la sesión
    #[error("{0}")]
    CredentialsRejected(String),

    /// 401 en una llamada autenticada: el token dejó de ser válido
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    /// Otros códigos de error HTTP, con el mensaje del backend si lo hay
    #[error("{0}")]
    Server(String),

    /// El request nunca llegó (red caída, CORS, backend apagado)
    #[error("Could not reach the server. Please try again.")]
    Network(String),

    /// El body no tiene la forma esperada
    #[error("Unexpected response from the server.")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_user_facing() {
        let err = ApiError::CredentialsRejected("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");

        let err = ApiError::Network("timeout".to_string());
        // El detalle técnico no se filtra al usuario
        assert!(!err.to_string().contains("timeout"));
    }
}
