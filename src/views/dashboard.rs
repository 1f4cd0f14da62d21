// ============================================================================
// DASHBOARD VIEW - Resumen de actividad y salud
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::config::CONFIG;
use crate::dom::{append_child, clear_children, on_click, set_text_content, ElementBuilder};
use crate::models::workout::Workout;
use crate::routing::Route;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::stats::{
    aggregate_by_type, bmi, bmi_category, estimated_days_to_target, weekly_goal_progress,
    workout_totals,
};
use crate::views::authed_page;

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("dashboard").build();

    // Saludo
    if let Some(identity) = state.session.identity() {
        let greeting = ElementBuilder::new("h2")?
            .class("dashboard-greeting")
            .text(&format!("Welcome back, {}! 👋", identity.name))
            .build();
        append_child(&content, &greeting)?;
    }

    // Tarjetas de salud derivadas del perfil (síncronas)
    if let Some(identity) = state.session.identity() {
        let health_row = ElementBuilder::new("div")?.class("card-row").build();

        if let Some(value) = bmi(identity.weight, identity.height) {
            let card = stat_card("BMI", &format!("{:.1}", value), bmi_category(value))?;
            append_child(&health_row, &card)?;
        }

        let days = estimated_days_to_target(identity.weight, identity.target_weight);
        if days > 0 {
            let card = stat_card("Goal ETA", &format!("{} days", days), "to target weight")?;
            append_child(&health_row, &card)?;
        }

        append_child(&content, &health_row)?;
    }

    // Tarjetas de actividad (se llenan al llegar los datos)
    let activity_row = ElementBuilder::new("div")?.class("card-row").build();
    let sessions_card = stat_card("Sessions", "—", "this period")?;
    let minutes_card = stat_card("Minutes", "—", "total time")?;
    let calories_card = stat_card("Calories", "—", "burned")?;
    append_child(&activity_row, &sessions_card)?;
    append_child(&activity_row, &minutes_card)?;
    append_child(&activity_row, &calories_card)?;
    append_child(&content, &activity_row)?;

    // Barra de progreso de la meta semanal
    let goal_section = ElementBuilder::new("div")?.class("goal-section").build();
    let goal_label = ElementBuilder::new("h3")?.text("Weekly goal").build();
    let goal_bar = ElementBuilder::new("div")?.class("progress-bar-container").build();
    let goal_fill = ElementBuilder::new("div")?.class("progress-bar").build();
    append_child(&goal_bar, &goal_fill)?;
    append_child(&goal_section, &goal_label)?;
    append_child(&goal_section, &goal_bar)?;
    append_child(&content, &goal_section)?;

    // Accesos rápidos al resto de pantallas
    let quick_nav = ElementBuilder::new("div")?.class("quick-nav").build();
    let shortcuts = [
        ("🏋️ Log a workout", Route::Workouts),
        ("🤝 Find buddies", Route::Buddies),
        ("🏆 Challenges", Route::Challenges),
        ("👥 Groups", Route::Groups),
        ("📍 Gym finder", Route::GymFinder),
    ];
    for (label, route) in shortcuts {
        let card = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("quick-nav-card")
            .text(label)
            .build();
        {
            let state = state.clone();
            on_click(&card, move |_| navigate(&state, route))?;
        }
        append_child(&quick_nav, &card)?;
    }
    append_child(&content, &quick_nav)?;

    // Desglose por tipo de entrenamiento
    let breakdown = ElementBuilder::new("div")?.class("type-breakdown").build();
    let breakdown_title = ElementBuilder::new("h3")?.text("By workout type").build();
    let breakdown_list = ElementBuilder::new("div")?.class("breakdown-list").build();
    append_child(&breakdown, &breakdown_title)?;
    append_child(&breakdown, &breakdown_list)?;
    append_child(&content, &breakdown)?;

    // Fetch de entrenamientos, con datos de muestra si el backend no responde
    if let Some(token) = state.session.token() {
        let sessions_card = sessions_card.clone();
        let minutes_card = minutes_card.clone();
        let calories_card = calories_card.clone();
        let goal_fill = goal_fill.clone();
        let breakdown_list = breakdown_list.clone();

        spawn_local(async move {
            let api = ApiClient::new();
            let workouts = match api.get_workouts(&token).await {
                Ok(list) => list,
                Err(e) => {
                    log::warn!("⚠️ [DASHBOARD] Backend no disponible, usando datos de muestra: {}", e);
                    sample_workouts()
                }
            };

            let totals = workout_totals(&workouts);
            update_stat(&sessions_card, &totals.sessions.to_string());
            update_stat(&minutes_card, &totals.duration_minutes.to_string());
            update_stat(&calories_card, &totals.calories.to_string());

            let progress =
                weekly_goal_progress(totals.duration_minutes, CONFIG.weekly_duration_goal_minutes);
            let _ = goal_fill.set_attribute("style", &format!("width: {:.0}%", progress));

            clear_children(&breakdown_list);
            for aggregate in aggregate_by_type(&workouts) {
                if let Ok(row) = ElementBuilder::new("div") {
                    let row = row.class("breakdown-row").build();
                    if let Ok(name) = ElementBuilder::new("span") {
                        let _ = append_child(&row, &name.text(&aggregate.workout_type).build());
                    }
                    if let Ok(value) = ElementBuilder::new("span") {
                        let _ = append_child(
                            &row,
                            &value
                                .class("breakdown-value")
                                .text(&format!(
                                    "{} kcal · {} min · {} sessions",
                                    aggregate.calories, aggregate.duration_minutes, aggregate.sessions
                                ))
                                .build(),
                        );
                    }
                    let _ = append_child(&breakdown_list, &row);
                }
            }
        });
    }

    authed_page(state, content)
}

/// Tarjeta de estadística con valor actualizable
fn stat_card(title: &str, value: &str, caption: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("stat-card").build();
    let title_el = ElementBuilder::new("div")?.class("stat-title").text(title).build();
    let value_el = ElementBuilder::new("div")?.class("stat-value").text(value).build();
    let caption_el = ElementBuilder::new("div")?.class("stat-caption").text(caption).build();
    append_child(&card, &title_el)?;
    append_child(&card, &value_el)?;
    append_child(&card, &caption_el)?;
    Ok(card)
}

fn update_stat(card: &Element, value: &str) {
    if let Ok(Some(value_el)) = card.query_selector(".stat-value") {
        set_text_content(&value_el, value);
    }
}

/// Datos de muestra cuando el backend no responde
fn sample_workouts() -> Vec<Workout> {
    use chrono::Utc;
    let workout = |id: &str, workout_type: &str, duration: u32, calories: u32| Workout {
        id: id.to_string(),
        workout_type: workout_type.to_string(),
        duration,
        calories_burned: calories,
        date: Utc::now(),
    };
    vec![
        workout("s1", "Running", 30, 350),
        workout("s2", "Weight Training", 45, 280),
        workout("s3", "Yoga", 60, 180),
        workout("s4", "Running", 25, 290),
    ]
}
