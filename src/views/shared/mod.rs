// ============================================================================
// SHARED VIEWS - Piezas comunes a varias pantallas
// ============================================================================

pub mod header;
pub mod notice;

pub use header::*;
pub use notice::*;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::app_state::AppState;

/// Envolver el contenido de una pantalla autenticada con header y aviso
pub fn authed_page(state: &AppState, content: Element) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("page").build();
    append_child(&page, &render_header(state)?)?;
    if let Some(banner) = render_notice(state)? {
        append_child(&page, &banner)?;
    }
    append_child(&page, &content)?;
    Ok(page)
}
