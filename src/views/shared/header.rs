// ============================================================================
// HEADER - Barra de navegación de las pantallas autenticadas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::routing::Route;
use crate::state::app_state::AppState;
use crate::viewmodels::SessionViewModel;

/// Renderizar header con navegación y logout
pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let brand = ElementBuilder::new("h1")?
        .class("app-brand")
        .text("💪 FitTrack")
        .build();
    append_child(&header, &brand)?;

    let nav = ElementBuilder::new("nav")?.class("app-nav").build();

    let mut links = vec![
        ("Dashboard", Route::Dashboard),
        ("Workouts", Route::Workouts),
        ("Buddies", Route::Buddies),
        ("Challenges", Route::Challenges),
        ("Groups", Route::Groups),
        ("Gym Finder", Route::GymFinder),
    ];
    if state.session.is_admin() {
        links.push(("Admin", Route::Admin));
    }

    let current = state.route();
    for (label, route) in links {
        let class = if route == current {
            "nav-link active"
        } else {
            "nav-link"
        };
        let link = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class(class)
            .text(label)
            .build();
        {
            let state = state.clone();
            on_click(&link, move |_| navigate(&state, route))?;
        }
        append_child(&nav, &link)?;
    }
    append_child(&header, &nav)?;

    // Botón logout a la derecha
    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("Log out")
        .build();
    {
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            SessionViewModel::new(state.clone()).logout();
        })?;
    }
    append_child(&header, &logout_btn)?;

    Ok(header)
}
