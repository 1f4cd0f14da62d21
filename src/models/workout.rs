use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entrenamiento registrado por el usuario
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duración en minutos
    pub duration: u32,
    #[serde(rename = "caloriesBurned")]
    pub calories_burned: u32,
    pub date: DateTime<Utc>,
}

/// Body de POST /api/workouts
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewWorkout {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub duration: u32,
    #[serde(rename = "caloriesBurned")]
    pub calories_burned: u32,
}

/// Tipos de entrenamiento que ofrece el formulario
pub const WORKOUT_TYPES: &[&str] = &[
    "Running",
    "Weight Training",
    "Yoga",
    "Swimming",
    "Cycling",
    "HIIT",
    "Walking",
    "Pilates",
];
