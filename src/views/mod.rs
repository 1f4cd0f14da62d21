// ============================================================================
// VIEWS MODULE - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod admin_dashboard;
pub mod buddies;
pub mod challenges;
pub mod complete_profile;
pub mod dashboard;
pub mod groups;
pub mod gym_finder;
pub mod index;
pub mod login;
pub mod not_found;
pub mod register;
pub mod shared;
pub mod workouts;

pub use shared::*;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::routing::Route;
use crate::state::app_state::AppState;

/// Renderizar la pantalla decidida por el guard
pub fn render_route(state: &AppState, route: Route) -> Result<Element, JsValue> {
    log::info!("🎬 [VIEWS] Renderizando pantalla: {}", route.path());
    match route {
        Route::Index => index::render_index(state),
        Route::Login => login::render_login(state),
        Route::Register => register::render_register(state),
        Route::CompleteProfile => complete_profile::render_complete_profile(state),
        Route::Dashboard => dashboard::render_dashboard(state),
        Route::Workouts => workouts::render_workouts(state),
        Route::Buddies => buddies::render_buddies(state),
        Route::Challenges => challenges::render_challenges(state),
        Route::Groups => groups::render_groups(state),
        Route::GymFinder => gym_finder::render_gym_finder(state),
        Route::Admin => admin_dashboard::render_admin_dashboard(state),
        Route::NotFound => not_found::render_not_found(state),
    }
}

/// Indicador de carga mientras la sesión se restaura
pub fn render_loading() -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?
        .class("loading-screen")
        .build();
    let spinner = ElementBuilder::new("div")?.class("spinner").build();
    let text = ElementBuilder::new("p")?.text("Loading...").build();
    append_child(&screen, &spinner)?;
    append_child(&screen, &text)?;
    Ok(screen)
}
