// ============================================================================
// USER - Identidad autenticada y perfil
// ============================================================================

use serde::{Deserialize, Serialize};

/// Rol del usuario dentro de la plataforma
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Identidad del usuario autenticado (compartida con el backend)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "profileCompleted", default)]
    pub profile_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Altura en centímetros
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Peso actual en kilogramos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(rename = "targetWeight", default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "fitnessGoals", default)]
    pub fitness_goals: Vec<String>,
    #[serde(rename = "preferredWorkouts", default)]
    pub preferred_workouts: Vec<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Aplica un parche parcial de perfil sobre la identidad actual.
    /// Solo sobreescribe los campos presentes en el parche.
    pub fn apply(&mut self, patch: &IdentityPatch) {
        if let Some(ref name) = patch.name {
            self.name = name.clone();
        }
        if let Some(age) = patch.age {
            self.age = Some(age);
        }
        if let Some(ref gender) = patch.gender {
            self.gender = Some(gender.clone());
        }
        if let Some(height) = patch.height {
            self.height = Some(height);
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
        if let Some(target_weight) = patch.target_weight {
            self.target_weight = Some(target_weight);
        }
        if let Some(ref location) = patch.location {
            self.location = Some(location.clone());
        }
        if let Some(ref goals) = patch.fitness_goals {
            self.fitness_goals = goals.clone();
        }
        if let Some(ref workouts) = patch.preferred_workouts {
            self.preferred_workouts = workouts.clone();
        }
        if let Some(completed) = patch.profile_completed {
            self.profile_completed = completed;
        }
    }
}

/// Actualización parcial del perfil (equivale al body de PUT /api/users/profile)
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, Debug)]
pub struct IdentityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(rename = "targetWeight", skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "fitnessGoals", skip_serializing_if = "Option::is_none")]
    pub fitness_goals: Option<Vec<String>>,
    #[serde(rename = "preferredWorkouts", skip_serializing_if = "Option::is_none")]
    pub preferred_workouts: Option<Vec<String>>,
    #[serde(rename = "profileCompleted", skip_serializing_if = "Option::is_none")]
    pub profile_completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role: Role::User,
            profile_completed: false,
            age: None,
            gender: None,
            height: None,
            weight: None,
            target_weight: None,
            location: None,
            fitness_goals: vec![],
            preferred_workouts: vec![],
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut id = identity();
        let patch = IdentityPatch {
            age: Some(30),
            height: Some(175.0),
            profile_completed: Some(true),
            ..Default::default()
        };
        id.apply(&patch);

        assert_eq!(id.age, Some(30));
        assert_eq!(id.height, Some(175.0));
        assert!(id.profile_completed);
        // Campos no presentes en el parche quedan intactos
        assert_eq!(id.name, "John Doe");
        assert_eq!(id.weight, None);
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "_id": "abc",
            "name": "Sarah Chen",
            "email": "sarah@example.com",
            "role": "admin",
            "profileCompleted": true,
            "targetWeight": 60,
            "fitnessGoals": ["Build Muscle"]
        }"#;
        let id: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(id.role, Role::Admin);
        assert!(id.is_admin());
        assert!(id.profile_completed);
        assert_eq!(id.target_weight, Some(60.0));
        assert_eq!(id.fitness_goals, vec!["Build Muscle".to_string()]);
        assert!(id.preferred_workouts.is_empty());
    }
}
