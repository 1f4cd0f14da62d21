// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio ni estado de sesión: el token llega por
// parámetro en cada llamada. Un 401 en una llamada autenticada dispara
// el evento global de sesión expirada y devuelve ApiError::SessionExpired.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::Event;

use crate::models::admin::{AdminUser, RoleChangeRequest};
use crate::models::auth::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest};
use crate::models::community::{Buddy, Challenge, Group, NewChallenge, NewGroup};
use crate::models::gym::Gym;
use crate::models::user::{Identity, IdentityPatch};
use crate::models::workout::{NewWorkout, Workout};
use crate::utils::constants::{BACKEND_URL, SESSION_EXPIRED_EVENT};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    // ----- Autenticación (sin token) -----

    /// Login con email/password. Un 401 aquí son credenciales malas,
    /// nunca sesión expirada.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, super::ApiError> {
        let url = format!("{}/api/auth/login", self.base_url);
        log::info!("🔐 Iniciando sesión para: {}", request.email);
        self.send_credentials(Request::post(&url), request).await
    }

    /// Registro de cuenta nueva
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<AuthResponse, super::ApiError> {
        let url = format!("{}/api/auth/register", self.base_url);
        log::info!("📝 Registrando cuenta para: {}", request.email);
        self.send_credentials(Request::post(&url), request).await
    }

    async fn send_credentials<B: serde::Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<AuthResponse, super::ApiError> {
        let response = builder
            .json(body)
            .map_err(|e| super::ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;

        if response.ok() {
            let auth = response
                .json::<AuthResponse>()
                .await
                .map_err(|e| super::ApiError::Parse(e.to_string()))?;
            log::info!("✅ Autenticado: {}", auth.user.email);
            Ok(auth)
        } else if response.status() == 401 || response.status() == 400 {
            let message = error_message(&response).await;
            Err(super::ApiError::CredentialsRejected(message))
        } else {
            Err(super::ApiError::Server(error_message(&response).await))
        }
    }

    // ----- Perfil -----

    /// Actualizar el perfil del usuario autenticado
    pub async fn update_profile(
        &self,
        token: &str,
        patch: &IdentityPatch,
    ) -> Result<Identity, super::ApiError> {
        let url = format!("{}/api/users/profile", self.base_url);
        log::info!("👤 Actualizando perfil");
        let response = authed(Request::put(&url), token)
            .json(patch)
            .map_err(|e| super::ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    // ----- Entrenamientos -----

    pub async fn get_workouts(&self, token: &str) -> Result<Vec<Workout>, super::ApiError> {
        let url = format!("{}/api/workouts", self.base_url);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn create_workout(
        &self,
        token: &str,
        workout: &NewWorkout,
    ) -> Result<Workout, super::ApiError> {
        let url = format!("{}/api/workouts", self.base_url);
        log::info!("🏋️ Registrando entrenamiento: {}", workout.workout_type);
        let response = authed(Request::post(&url), token)
            .json(workout)
            .map_err(|e| super::ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn delete_workout(&self, token: &str, id: &str) -> Result<(), super::ApiError> {
        let url = format!("{}/api/workouts/{}", self.base_url, id);
        let response = authed(Request::delete(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        check_authed(response).await
    }

    // ----- Comunidad -----

    pub async fn get_buddies(&self, token: &str) -> Result<Vec<Buddy>, super::ApiError> {
        let url = format!("{}/api/buddies", self.base_url);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    /// Sugerencias de compañeros (usuarios afines que aún no son buddies)
    pub async fn get_buddy_suggestions(&self, token: &str) -> Result<Vec<Buddy>, super::ApiError> {
        let url = format!("{}/api/buddies/suggestions", self.base_url);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn add_buddy(&self, token: &str, id: &str) -> Result<Buddy, super::ApiError> {
        let url = format!("{}/api/buddies/{}", self.base_url, id);
        log::info!("🤝 Agregando buddy: {}", id);
        let response = authed(Request::post(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn get_challenges(&self, token: &str) -> Result<Vec<Challenge>, super::ApiError> {
        let url = format!("{}/api/challenges", self.base_url);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn join_challenge(
        &self,
        token: &str,
        id: &str,
    ) -> Result<Challenge, super::ApiError> {
        let url = format!("{}/api/challenges/{}/join", self.base_url, id);
        log::info!("🏆 Uniéndose al reto: {}", id);
        let response = authed(Request::post(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn create_challenge(
        &self,
        token: &str,
        challenge: &NewChallenge,
    ) -> Result<Challenge, super::ApiError> {
        let url = format!("{}/api/challenges", self.base_url);
        log::info!("🏆 Creando reto: {}", challenge.title);
        let response = authed(Request::post(&url), token)
            .json(challenge)
            .map_err(|e| super::ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn get_groups(&self, token: &str) -> Result<Vec<Group>, super::ApiError> {
        let url = format!("{}/api/groups", self.base_url);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn join_group(&self, token: &str, id: &str) -> Result<Group, super::ApiError> {
        let url = format!("{}/api/groups/{}/join", self.base_url, id);
        log::info!("👥 Uniéndose al grupo: {}", id);
        let response = authed(Request::post(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn create_group(
        &self,
        token: &str,
        group: &NewGroup,
    ) -> Result<Group, super::ApiError> {
        let url = format!("{}/api/groups", self.base_url);
        log::info!("👥 Creando grupo: {}", group.name);
        let response = authed(Request::post(&url), token)
            .json(group)
            .map_err(|e| super::ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    // ----- Gimnasios -----

    pub async fn search_gyms(&self, token: &str, query: &str) -> Result<Vec<Gym>, super::ApiError> {
        let url = format!("{}/api/gyms/search?location={}", self.base_url, query);
        log::info!("📍 Buscando gimnasios en: {}", query);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    // ----- Administración -----

    pub async fn get_admin_users(&self, token: &str) -> Result<Vec<AdminUser>, super::ApiError> {
        let url = format!("{}/api/admin/users", self.base_url);
        let response = authed(Request::get(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn set_user_role(
        &self,
        token: &str,
        id: &str,
        request: &RoleChangeRequest,
    ) -> Result<AdminUser, super::ApiError> {
        let url = format!("{}/api/admin/users/{}/role", self.base_url, id);
        log::info!("🛡️ Cambiando rol del usuario: {}", id);
        let response = authed(Request::put(&url), token)
            .json(request)
            .map_err(|e| super::ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        parse_authed(response).await
    }

    pub async fn delete_user(&self, token: &str, id: &str) -> Result<(), super::ApiError> {
        let url = format!("{}/api/admin/users/{}", self.base_url, id);
        log::warn!("🗑️ Eliminando usuario: {}", id);
        let response = authed(Request::delete(&url), token)
            .send()
            .await
            .map_err(|e| super::ApiError::Network(e.to_string()))?;
        check_authed(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Adjuntar el bearer token a un request autenticado
fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Extraer el mensaje de error del body, con fallback al status HTTP
async fn error_message(response: &Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(message) }) => message,
        _ => format!("HTTP {}: {}", response.status(), response.status_text()),
    }
}

/// Señal global de sesión expirada: la escucha un único listener en lib.rs
/// que limpia la sesión y navega a login.
fn dispatch_session_expired() {
    log::warn!("⚠️ [API] 401 en llamada autenticada, emitiendo sessionExpired");
    if let Some(window) = web_sys::window() {
        if let Ok(event) = Event::new(SESSION_EXPIRED_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Interpretar la respuesta de una llamada autenticada con body JSON
async fn parse_authed<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, super::ApiError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| super::ApiError::Parse(e.to_string()))
    } else if response.status() == 401 {
        dispatch_session_expired();
        Err(super::ApiError::SessionExpired)
    } else {
        Err(super::ApiError::Server(error_message(&response).await))
    }
}

/// Igual que parse_authed pero para respuestas sin body útil
async fn check_authed(response: Response) -> Result<(), super::ApiError> {
    if response.ok() {
        Ok(())
    } else if response.status() == 401 {
        dispatch_session_expired();
        Err(super::ApiError::SessionExpired)
    } else {
        Err(super::ApiError::Server(error_message(&response).await))
    }
}
