use serde::{Deserialize, Serialize};

use crate::models::user::Identity;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Respuesta de POST /api/auth/login y POST /api/auth/register
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: Identity,
}

/// Body de error que devuelve el backend en fallos de autenticación
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
