// ============================================================================
// NOTICE - Aviso efímero global (éxito o error)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, Notice};

/// Renderizar el aviso activo, si lo hay. Se auto-descarta a los 4s.
pub fn render_notice(state: &AppState) -> Result<Option<Element>, JsValue> {
    let notice = match state.notice() {
        Some(notice) => notice,
        None => return Ok(None),
    };

    let (class, text) = match &notice {
        Notice::Success(text) => ("notice notice-success", text.clone()),
        Notice::Error(text) => ("notice notice-error", text.clone()),
    };

    let banner = ElementBuilder::new("div")?.class(class).text(&text).build();

    {
        let state = state.clone();
        Timeout::new(4_000, move || {
            state.clear_notice();
        })
        .forget();
    }

    Ok(Some(banner))
}
