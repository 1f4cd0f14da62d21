use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fila de usuario del listado administrativo
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "profileCompleted", default)]
    pub profile_completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<String>,
    #[serde(rename = "workoutsCount", default)]
    pub workouts_count: Option<u32>,
}

/// Body de PUT /api/admin/users/{id}/role
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RoleChangeRequest {
    pub role: String,
}
