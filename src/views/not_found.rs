// ============================================================================
// NOT FOUND VIEW - Ruta desconocida
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::routing::Route;
use crate::state::app_state::AppState;
use crate::views::authed_page;

pub fn render_not_found(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("not-found").build();

    let code = ElementBuilder::new("h2")?.class("not-found-code").text("404").build();
    let message = ElementBuilder::new("p")?
        .text("That page doesn't exist.")
        .build();
    let back_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-primary")
        .text("Back to Dashboard")
        .build();
    {
        let state = state.clone();
        on_click(&back_btn, move |_| navigate(&state, Route::Dashboard))?;
    }

    append_child(&content, &code)?;
    append_child(&content, &message)?;
    append_child(&content, &back_btn)?;

    authed_page(state, content)
}
