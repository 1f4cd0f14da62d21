// ============================================================================
// BUDDIES VIEW - Mis buddies y sugerencias
// ============================================================================
// Agregar un buddy lo mueve de la lista de sugerencias a la de buddies de
// forma optimista; el backend se entera después.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, clear_children, on_click, ElementBuilder};
use crate::models::community::Buddy;
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::views::authed_page;

pub fn render_buddies(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("buddies").build();
    let title = ElementBuilder::new("h2")?.text("Workout buddies").build();
    append_child(&content, &title)?;

    let buddies_title = ElementBuilder::new("h3")?.text("Your buddies").build();
    let buddies_list = ElementBuilder::new("div")?.class("buddy-list").build();
    let suggestions_title = ElementBuilder::new("h3")?
        .text("Suggested for you")
        .build();
    let suggestions_list = ElementBuilder::new("div")?.class("buddy-list").build();

    let loading = ElementBuilder::new("div")?
        .class("empty-state")
        .text("Finding buddies...")
        .build();
    append_child(&suggestions_list, &loading)?;

    append_child(&content, &buddies_title)?;
    append_child(&content, &buddies_list)?;
    append_child(&content, &suggestions_title)?;
    append_child(&content, &suggestions_list)?;

    if let Some(token) = state.session.token() {
        let buddies_list = buddies_list.clone();
        let suggestions_list = suggestions_list.clone();
        spawn_local(async move {
            let api = ApiClient::new();

            let mine = api.get_buddies(&token).await.unwrap_or_default();
            let suggested = match api.get_buddy_suggestions(&token).await {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    log::warn!("⚠️ [BUDDIES] Backend no disponible, usando sugerencias locales: {}", e);
                    sample_suggestions()
                }
            };

            let buddies = Rc::new(RefCell::new(mine));
            let suggestions = Rc::new(RefCell::new(suggested));
            let _ = render_lists(&buddies_list, &suggestions_list, &buddies, &suggestions, &token);
        });
    }

    authed_page(state, content)
}

fn render_lists(
    buddies_list: &Element,
    suggestions_list: &Element,
    buddies: &Rc<RefCell<Vec<Buddy>>>,
    suggestions: &Rc<RefCell<Vec<Buddy>>>,
    token: &str,
) -> Result<(), JsValue> {
    clear_children(buddies_list);
    clear_children(suggestions_list);

    if buddies.borrow().is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text("No buddies yet. Add someone below!")
            .build();
        append_child(buddies_list, &empty)?;
    }
    for buddy in buddies.borrow().iter() {
        let card = buddy_card(buddy)?;
        let badge = ElementBuilder::new("span")?
            .class("badge badge-success")
            .text("✓ Buddy")
            .build();
        append_child(&card, &badge)?;
        append_child(buddies_list, &card)?;
    }

    if suggestions.borrow().is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text("No suggestions right now. Check back soon!")
            .build();
        append_child(suggestions_list, &empty)?;
    }
    for buddy in suggestions.borrow().iter() {
        let card = buddy_card(buddy)?;

        let add_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-secondary")
            .text("Add buddy")
            .build();
        {
            let id = buddy.id.clone();
            let token = token.to_string();
            let buddies = buddies.clone();
            let suggestions = suggestions.clone();
            let buddies_list = buddies_list.clone();
            let suggestions_list = suggestions_list.clone();
            on_click(&add_btn, move |_| {
                // Mover de sugerencias a buddies sin esperar al backend
                let moved = {
                    let mut list = suggestions.borrow_mut();
                    match list.iter().position(|b| b.id == id) {
                        Some(pos) => Some(list.remove(pos)),
                        None => None,
                    }
                };
                if let Some(mut buddy) = moved {
                    buddy.is_buddy = true;
                    buddies.borrow_mut().push(buddy);
                    let _ = render_lists(&buddies_list, &suggestions_list, &buddies, &suggestions, &token);
                }

                let id = id.clone();
                let token = token.clone();
                spawn_local(async move {
                    let api = ApiClient::new();
                    if let Err(e) = api.add_buddy(&token, &id).await {
                        log::warn!("⚠️ [BUDDIES] Error agregando buddy en backend: {}", e);
                    }
                });
            })?;
        }
        append_child(&card, &add_btn)?;
        append_child(suggestions_list, &card)?;
    }

    Ok(())
}

fn buddy_card(buddy: &Buddy) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("buddy-card").build();
    let name = ElementBuilder::new("h3")?.text(&buddy.name).build();
    let location = ElementBuilder::new("p")?
        .class("buddy-location")
        .text(&format!("📍 {}", buddy.location))
        .build();
    let goals = ElementBuilder::new("p")?
        .class("buddy-goals")
        .text(&buddy.fitness_goals.join(" · "))
        .build();
    append_child(&card, &name)?;
    append_child(&card, &location)?;
    append_child(&card, &goals)?;
    Ok(card)
}

/// Sugerencias locales cuando el backend no responde
fn sample_suggestions() -> Vec<Buddy> {
    let buddy = |id: &str, name: &str, location: &str, goals: &[&str]| Buddy {
        id: id.to_string(),
        name: name.to_string(),
        fitness_goals: goals.iter().map(|g| g.to_string()).collect(),
        preferred_workouts: vec![],
        location: location.to_string(),
        is_buddy: false,
    };
    vec![
        buddy("b1", "Sarah Chen", "Brooklyn, NY", &["Build Muscle", "Stay Active"]),
        buddy("b2", "Marcus Lee", "Queens, NY", &["Lose Weight"]),
        buddy("b3", "Priya Patel", "Manhattan, NY", &["Improve Endurance", "Train for Event"]),
    ]
}
