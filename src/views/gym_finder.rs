// ============================================================================
// GYM FINDER VIEW - Búsqueda de gimnasios por ciudad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, clear_children, create_element, on_input, on_submit, set_attribute,
    set_class_name, ElementBuilder,
};
use crate::models::gym::{fallback_gyms, Gym};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::views::authed_page;

pub fn render_gym_finder(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("gym-finder").build();
    let title = ElementBuilder::new("h2")?.text("Find a gym").build();
    append_child(&content, &title)?;

    let query = Rc::new(RefCell::new(String::new()));

    let form = create_element("form")?;
    set_class_name(&form, "gym-search-form");

    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "placeholder", "Enter a city, e.g. New York")?;
    set_class_name(&input, "form-input");
    {
        let query = query.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *query.borrow_mut() = target.value();
            }
        })?;
    }

    let search_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Search")
        .build();

    append_child(&form, &input)?;
    append_child(&form, &search_btn)?;
    append_child(&content, &form)?;

    let results = ElementBuilder::new("div")?.class("gym-results").build();
    append_child(&content, &results)?;

    {
        let token = state.session.token().unwrap_or_default();
        let query = query.clone();
        let results = results.clone();
        on_submit(&form, move || {
            let query_val = query.borrow().trim().to_string();
            if query_val.is_empty() {
                return;
            }

            let token = token.clone();
            let results = results.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                let gyms = match api.search_gyms(&token, &query_val).await {
                    Ok(gyms) if !gyms.is_empty() => gyms,
                    Ok(_) => fallback_gyms(&query_val),
                    Err(e) => {
                        // Directorio local de respaldo
                        log::warn!("⚠️ [GYMS] Búsqueda remota falló, usando directorio local: {}", e);
                        fallback_gyms(&query_val)
                    }
                };
                let _ = render_gym_results(&results, &gyms);
            });
        })?;
    }

    authed_page(state, content)
}

fn render_gym_results(results: &Element, gyms: &[Gym]) -> Result<(), JsValue> {
    clear_children(results);

    for gym in gyms {
        let card = ElementBuilder::new("div")?.class("gym-card").build();

        let name = ElementBuilder::new("h3")?.text(&gym.name).build();
        let rating = ElementBuilder::new("p")?
            .class("gym-rating")
            .text(&format!("{} {:.1}", gym.stars(), gym.rating))
            .build();
        let address = ElementBuilder::new("p")?
            .class("gym-address")
            .text(&format!("📍 {} · {}", gym.address, gym.distance))
            .build();
        let hours = ElementBuilder::new("p")?
            .class("gym-hours")
            .text(&format!("🕐 {}", gym.hours))
            .build();

        append_child(&card, &name)?;
        append_child(&card, &rating)?;
        append_child(&card, &address)?;
        append_child(&card, &hours)?;
        append_child(results, &card)?;
    }
    Ok(())
}
