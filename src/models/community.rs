// ============================================================================
// COMMUNITY - Buddies, retos y grupos
// ============================================================================

use serde::{Deserialize, Serialize};

/// Compañero de entrenamiento (sugerido o ya agregado)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Buddy {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "fitnessGoals", default)]
    pub fitness_goals: Vec<String>,
    #[serde(rename = "preferredWorkouts", default)]
    pub preferred_workouts: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "isBuddy", default)]
    pub is_buddy: bool,
}

/// Reto colectivo con progreso
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Challenge {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: f64,
    #[serde(default)]
    pub current: f64,
    pub unit: String,
    #[serde(default)]
    pub joined: bool,
    #[serde(rename = "createdBy", default)]
    pub created_by: String,
}

/// Body de POST /api/challenges
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewChallenge {
    pub title: String,
    pub description: String,
    pub target: f64,
    pub unit: String,
}

impl Challenge {
    /// Porcentaje de progreso acotado a [0, 100]
    pub fn progress_percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct GroupMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Grupo de entrenamiento
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Group {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<GroupMember>,
    #[serde(default)]
    pub joined: bool,
}

/// Body de POST /api/groups
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewGroup {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_progress_is_clamped() {
        let mut c = Challenge {
            id: "1".to_string(),
            title: "Run 10 Miles".to_string(),
            description: String::new(),
            target: 10.0,
            current: 6.5,
            unit: "miles".to_string(),
            joined: true,
            created_by: "You".to_string(),
        };
        assert!((c.progress_percent() - 65.0).abs() < f64::EPSILON);

        c.current = 15.0;
        assert!((c.progress_percent() - 100.0).abs() < f64::EPSILON);

        c.target = 0.0;
        assert_eq!(c.progress_percent(), 0.0);
    }
}
