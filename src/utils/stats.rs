// ============================================================================
// STATS - Agregación de datos para tarjetas y gráficas
// ============================================================================
// Transformaciones puras: listas crudas (workouts, usuarios) → resúmenes
// listos para renderizar. Sin estado, sin efectos.
// ============================================================================

use chrono::Datelike;

use crate::models::admin::AdminUser;
use crate::models::workout::Workout;

/// Totales del historial de entrenamientos
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct WorkoutTotals {
    pub sessions: usize,
    pub duration_minutes: u32,
    pub calories: u32,
}

pub fn workout_totals(workouts: &[Workout]) -> WorkoutTotals {
    WorkoutTotals {
        sessions: workouts.len(),
        duration_minutes: workouts.iter().map(|w| w.duration).sum(),
        calories: workouts.iter().map(|w| w.calories_burned).sum(),
    }
}

/// Agregado por tipo de entrenamiento (datos de la gráfica de barras y del pie)
#[derive(Clone, PartialEq, Debug)]
pub struct TypeAggregate {
    pub workout_type: String,
    pub calories: u32,
    pub duration_minutes: u32,
    pub sessions: usize,
}

/// Agrupa entrenamientos por tipo, ordenado por calorías descendente
/// (empates por nombre para que el orden sea estable).
pub fn aggregate_by_type(workouts: &[Workout]) -> Vec<TypeAggregate> {
    let mut aggregates: Vec<TypeAggregate> = Vec::new();

    for w in workouts {
        match aggregates.iter_mut().find(|a| a.workout_type == w.workout_type) {
            Some(agg) => {
                agg.calories += w.calories_burned;
                agg.duration_minutes += w.duration;
                agg.sessions += 1;
            }
            None => aggregates.push(TypeAggregate {
                workout_type: w.workout_type.clone(),
                calories: w.calories_burned,
                duration_minutes: w.duration,
                sessions: 1,
            }),
        }
    }

    aggregates.sort_by(|a, b| {
        b.calories
            .cmp(&a.calories)
            .then_with(|| a.workout_type.cmp(&b.workout_type))
    });
    aggregates
}

/// Progreso hacia la meta semanal de minutos, acotado a [0, 100]
pub fn weekly_goal_progress(duration_minutes: u32, goal_minutes: u32) -> f64 {
    if goal_minutes == 0 {
        return 0.0;
    }
    (duration_minutes as f64 / goal_minutes as f64 * 100.0).min(100.0)
}

/// Índice de masa corporal; None si faltan datos o la altura es inválida
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let weight = weight_kg?;
    let height_m = height_cm? / 100.0;
    if height_m <= 0.0 || weight <= 0.0 {
        return None;
    }
    Some(weight / (height_m * height_m))
}

pub fn bmi_category(value: f64) -> &'static str {
    if value < 18.5 {
        "Underweight"
    } else if value < 25.0 {
        "Normal"
    } else if value < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

/// Estimación de días hasta el peso objetivo (~1kg por semana)
pub fn estimated_days_to_target(weight_kg: Option<f64>, target_kg: Option<f64>) -> u32 {
    match (weight_kg, target_kg) {
        (Some(w), Some(t)) => ((w - t).abs() * 7.0).round() as u32,
        _ => 0,
    }
}

/// Altas por mes del listado administrativo, en orden cronológico
#[derive(Clone, PartialEq, Debug)]
pub struct MonthlySignups {
    pub year: i32,
    pub month: u32,
    pub users: usize,
}

pub fn signups_per_month(users: &[AdminUser]) -> Vec<MonthlySignups> {
    let mut buckets: Vec<MonthlySignups> = Vec::new();

    for user in users {
        let year = user.created_at.year();
        let month = user.created_at.month();
        match buckets.iter_mut().find(|b| b.year == year && b.month == month) {
            Some(bucket) => bucket.users += 1,
            None => buckets.push(MonthlySignups { year, month, users: 1 }),
        }
    }

    buckets.sort_by(|a, b| (a.year, a.month).cmp(&(b.year, b.month)));
    buckets
}

/// Distribución de engagement según entrenamientos registrados
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct EngagementSummary {
    pub active: usize,
    pub moderate: usize,
    pub inactive: usize,
}

/// Umbrales: >= 20 workouts activo, >= 5 moderado, resto inactivo
pub fn engagement_summary(users: &[AdminUser]) -> EngagementSummary {
    let mut summary = EngagementSummary::default();
    for user in users {
        match user.workouts_count.unwrap_or(0) {
            n if n >= 20 => summary.active += 1,
            n if n >= 5 => summary.moderate += 1,
            _ => summary.inactive += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn workout(workout_type: &str, duration: u32, calories: u32) -> Workout {
        Workout {
            id: format!("{}-{}", workout_type, calories),
            workout_type: workout_type.to_string(),
            duration,
            calories_burned: calories,
            date: Utc::now(),
        }
    }

    fn admin_user(created_at: &str, workouts: u32) -> AdminUser {
        AdminUser {
            id: created_at.to_string(),
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            role: "user".to_string(),
            profile_completed: true,
            created_at: created_at.parse().unwrap(),
            last_active: None,
            workouts_count: Some(workouts),
        }
    }

    #[test]
    fn totals_sum_duration_and_calories() {
        let workouts = vec![workout("Running", 30, 350), workout("Yoga", 60, 180)];
        let totals = workout_totals(&workouts);
        assert_eq!(totals.sessions, 2);
        assert_eq!(totals.duration_minutes, 90);
        assert_eq!(totals.calories, 530);
    }

    #[test]
    fn aggregate_groups_and_sorts_by_calories() {
        let workouts = vec![
            workout("Running", 30, 350),
            workout("Yoga", 60, 180),
            workout("Running", 20, 200),
        ];
        let aggregates = aggregate_by_type(&workouts);
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].workout_type, "Running");
        assert_eq!(aggregates[0].calories, 550);
        assert_eq!(aggregates[0].sessions, 2);
        assert_eq!(aggregates[1].workout_type, "Yoga");
    }

    #[test]
    fn weekly_progress_is_capped() {
        assert_eq!(weekly_goal_progress(150, 300), 50.0);
        assert_eq!(weekly_goal_progress(600, 300), 100.0);
        assert_eq!(weekly_goal_progress(100, 0), 0.0);
    }

    #[test]
    fn bmi_handles_missing_profile_fields() {
        let value = bmi(Some(70.0), Some(175.0)).unwrap();
        assert!((value - 22.86).abs() < 0.01);
        assert_eq!(bmi_category(value), "Normal");
        assert_eq!(bmi(None, Some(175.0)), None);
        assert_eq!(bmi(Some(70.0), Some(0.0)), None);
    }

    #[test]
    fn estimated_days_uses_one_kg_per_week() {
        assert_eq!(estimated_days_to_target(Some(70.0), Some(65.0)), 35);
        assert_eq!(estimated_days_to_target(Some(60.0), Some(65.0)), 35);
        assert_eq!(estimated_days_to_target(None, Some(65.0)), 0);
    }

    #[test]
    fn signups_bucket_by_month_in_order() {
        let users = vec![
            admin_user("2024-02-10T00:00:00Z", 3),
            admin_user("2024-01-15T00:00:00Z", 30),
            admin_user("2024-02-28T00:00:00Z", 8),
        ];
        let months = signups_per_month(&users);
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month, months[0].users), (2024, 1, 1));
        assert_eq!((months[1].year, months[1].month, months[1].users), (2024, 2, 2));
    }

    #[test]
    fn engagement_buckets_by_threshold() {
        let users = vec![
            admin_user("2024-01-01T00:00:00Z", 30),
            admin_user("2024-01-02T00:00:00Z", 8),
            admin_user("2024-01-03T00:00:00Z", 0),
        ];
        let summary = engagement_summary(&users);
        assert_eq!(summary, EngagementSummary { active: 1, moderate: 1, inactive: 1 });
    }
}
