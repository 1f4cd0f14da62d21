// ============================================================================
// SESSION VIEWMODEL - Lógica de autenticación y perfil
// ============================================================================
// Orquesta ApiClient + SessionState. Las vistas solo llaman métodos de
// aquí; nunca tocan el storage ni el cliente HTTP directamente.
// ============================================================================

use crate::app::navigate;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::models::user::IdentityPatch;
use crate::routing::Route;
use crate::services::{ApiClient, ApiError};
use crate::state::app_state::{AppState, Notice};
use crate::utils::storage::LocalStorage;

#[derive(Clone)]
pub struct SessionViewModel {
    state: AppState,
    api: ApiClient,
    storage: LocalStorage,
}

impl SessionViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            api: ApiClient::new(),
            storage: LocalStorage,
        }
    }

    /// Login con email/password. Si la sesión sigue vigente al volver la
    /// respuesta, persiste y navega a la pantalla principal.
    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let generation = self.state.session.begin_auth();
        let request = LoginRequest { email, password };
        let auth = self.api.login(&request).await?;

        if self
            .state
            .session
            .commit_auth(generation, auth.token, auth.user, &self.storage)
        {
            navigate(&self.state, Route::Dashboard);
        }
        Ok(())
    }

    /// Registro de cuenta nueva. El backend devuelve la sesión ya iniciada
    /// con el perfil sin completar.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<(), ApiError> {
        let generation = self.state.session.begin_auth();
        let request = RegisterRequest { name, email, password };
        let auth = self.api.register(&request).await?;

        if self
            .state
            .session
            .commit_auth(generation, auth.token, auth.user, &self.storage)
        {
            navigate(&self.state, Route::CompleteProfile);
        }
        Ok(())
    }

    /// Guardar los datos de perfil y marcarlo como completo
    pub async fn complete_profile(&self, mut patch: IdentityPatch) -> Result<(), ApiError> {
        let token = match self.state.session.token() {
            Some(token) => token,
            None => return Ok(()),
        };
        patch.profile_completed = Some(true);

        self.api.update_profile(&token, &patch).await?;
        self.state.session.update_identity(&patch, &self.storage);
        self.state
            .set_notice(Notice::Success("Profile saved!".to_string()));
        navigate(&self.state, Route::Dashboard);
        Ok(())
    }

    /// Logout: inmediato y local, nunca espera al backend
    pub fn logout(&self) {
        log::info!("👋 Logout iniciado");
        self.state.session.logout(&self.storage);
        navigate(&self.state, Route::Login);
    }

    /// Reacción al evento global de sesión expirada (401 del backend)
    pub fn handle_session_expired(&self) {
        self.state.session.logout(&self.storage);
        self.state.set_notice(Notice::Error(
            "Your session has expired. Please log in again.".to_string(),
        ));
        navigate(&self.state, Route::Login);
    }
}
