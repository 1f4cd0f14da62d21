// ============================================================================
// INDEX VIEW - Landing pública
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::routing::Route;
use crate::state::app_state::AppState;

pub fn render_index(state: &AppState) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("landing-screen").build();

    let hero = ElementBuilder::new("div")?.class("landing-hero").build();
    let logo = ElementBuilder::new("div")?
        .class("landing-logo")
        .text("💪")
        .build();
    let title = ElementBuilder::new("h1")?.text("FitTrack").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Track workouts, find buddies, crush challenges")
        .build();
    append_child(&hero, &logo)?;
    append_child(&hero, &title)?;
    append_child(&hero, &subtitle)?;

    let actions = ElementBuilder::new("div")?.class("landing-actions").build();

    if state.session.is_authenticated() {
        let go_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-primary")
            .text("Go to Dashboard")
            .build();
        {
            let state = state.clone();
            on_click(&go_btn, move |_| navigate(&state, Route::Dashboard))?;
        }
        append_child(&actions, &go_btn)?;
    } else {
        let login_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-primary")
            .text("Log in")
            .build();
        {
            let state = state.clone();
            on_click(&login_btn, move |_| navigate(&state, Route::Login))?;
        }

        let register_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-secondary")
            .text("Create account")
            .build();
        {
            let state = state.clone();
            on_click(&register_btn, move |_| navigate(&state, Route::Register))?;
        }

        append_child(&actions, &login_btn)?;
        append_child(&actions, &register_btn)?;
    }

    append_child(&hero, &actions)?;
    append_child(&screen, &hero)?;
    Ok(screen)
}
