// ============================================================================
// CHALLENGES VIEW - Retos colectivos con progreso
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, clear_children, create_element, on_click, on_input, on_submit, set_attribute,
    set_class_name, set_text_content, ElementBuilder,
};
use crate::models::community::{Challenge, NewChallenge};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::views::authed_page;

pub fn render_challenges(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("challenges").build();
    let title = ElementBuilder::new("h2")?.text("Challenges").build();
    append_child(&content, &title)?;

    let challenges: Rc<RefCell<Vec<Challenge>>> = Rc::new(RefCell::new(Vec::new()));
    let list = ElementBuilder::new("div")?.class("challenge-list").build();
    let loading = ElementBuilder::new("div")?
        .class("empty-state")
        .text("Loading challenges...")
        .build();
    append_child(&list, &loading)?;

    let token = state.session.token().unwrap_or_default();

    // Formulario para proponer un reto nuevo
    let form = create_element("form")?;
    set_class_name(&form, "challenge-form");

    let title_value = Rc::new(RefCell::new(String::new()));
    let target_value = Rc::new(RefCell::new(String::new()));
    let unit_value = Rc::new(RefCell::new(String::new()));

    let title_input = text_input("Challenge title", title_value.clone())?;
    let target_input = text_input("Target (e.g. 50)", target_value.clone())?;
    let unit_input = text_input("Unit (miles, days, kcal...)", unit_value.clone())?;

    let error_box = ElementBuilder::new("div")?.class("form-error").build();
    let create_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Create challenge")
        .build();

    {
        let token = token.clone();
        let challenges = challenges.clone();
        let list = list.clone();
        let error_box = error_box.clone();
        let title_value = title_value.clone();
        let target_value = target_value.clone();
        let unit_value = unit_value.clone();

        on_submit(&form, move || {
            let title_val = title_value.borrow().trim().to_string();
            let target: f64 = target_value.borrow().trim().parse().unwrap_or(0.0);
            let unit_val = unit_value.borrow().trim().to_string();

            if title_val.is_empty() || target <= 0.0 || unit_val.is_empty() {
                set_text_content(&error_box, "Title, a positive target and a unit are required");
                return;
            }
            set_text_content(&error_box, "");

            let new_challenge = NewChallenge {
                title: title_val,
                description: String::new(),
                target,
                unit: unit_val,
            };

            let token = token.clone();
            let challenges = challenges.clone();
            let list = list.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                let created = match api.create_challenge(&token, &new_challenge).await {
                    Ok(challenge) => challenge,
                    Err(e) => {
                        // Alta optimista local
                        log::warn!("⚠️ [CHALLENGES] Backend no disponible, alta local: {}", e);
                        Challenge {
                            id: uuid::Uuid::new_v4().to_string(),
                            title: new_challenge.title.clone(),
                            description: new_challenge.description.clone(),
                            target: new_challenge.target,
                            current: 0.0,
                            unit: new_challenge.unit.clone(),
                            joined: true,
                            created_by: "You".to_string(),
                        }
                    }
                };
                challenges.borrow_mut().insert(0, created);
                let _ = render_challenge_list(&list, &challenges, &token);
            });
        })?;
    }

    append_child(&form, &title_input)?;
    append_child(&form, &target_input)?;
    append_child(&form, &unit_input)?;
    append_child(&form, &create_btn)?;
    append_child(&content, &form)?;
    append_child(&content, &error_box)?;
    append_child(&content, &list)?;

    // Carga inicial
    if state.session.is_authenticated() {
        let token = token.clone();
        let challenges = challenges.clone();
        let list = list.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            let fetched = match api.get_challenges(&token).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    log::warn!("⚠️ [CHALLENGES] Backend no disponible, usando retos de muestra: {}", e);
                    sample_challenges()
                }
            };
            *challenges.borrow_mut() = fetched;
            let _ = render_challenge_list(&list, &challenges, &token);
        });
    }

    authed_page(state, content)
}

fn text_input(placeholder: &str, value: Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let input = create_element("input")?;
    set_attribute(&input, "type", "text")?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_class_name(&input, "form-input");
    {
        let value = value.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }
    Ok(input)
}

fn render_challenge_list(
    list: &Element,
    challenges: &Rc<RefCell<Vec<Challenge>>>,
    token: &str,
) -> Result<(), JsValue> {
    clear_children(list);

    for challenge in challenges.borrow().iter() {
        let card = ElementBuilder::new("div")?.class("challenge-card").build();

        let title = ElementBuilder::new("h3")?.text(&challenge.title).build();
        append_child(&card, &title)?;

        if !challenge.description.is_empty() {
            let description = ElementBuilder::new("p")?
                .class("challenge-description")
                .text(&challenge.description)
                .build();
            append_child(&card, &description)?;
        }

        let progress_label = ElementBuilder::new("div")?
            .class("challenge-progress-label")
            .text(&format!(
                "{:.0} / {:.0} {} ({:.0}%)",
                challenge.current,
                challenge.target,
                challenge.unit,
                challenge.progress_percent()
            ))
            .build();

        let bar_container = ElementBuilder::new("div")?
            .class("progress-bar-container")
            .build();
        let bar = ElementBuilder::new("div")?
            .class("progress-bar")
            .attr("style", &format!("width: {:.0}%", challenge.progress_percent()))?
            .build();
        append_child(&bar_container, &bar)?;

        append_child(&card, &progress_label)?;
        append_child(&card, &bar_container)?;

        if challenge.joined {
            let badge = ElementBuilder::new("span")?
                .class("badge badge-success")
                .text("✓ Joined")
                .build();
            append_child(&card, &badge)?;
        } else {
            let join_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn-secondary")
                .text("Join challenge")
                .build();
            {
                let id = challenge.id.clone();
                let token = token.to_string();
                let join_btn = join_btn.clone();
                on_click(&join_btn.clone(), move |_| {
                    // Unión optimista: el botón cambia de inmediato
                    set_text_content(&join_btn, "✓ Joined");
                    let _ = join_btn.set_attribute("disabled", "true");

                    let id = id.clone();
                    let token = token.clone();
                    spawn_local(async move {
                        let api = ApiClient::new();
                        if let Err(e) = api.join_challenge(&token, &id).await {
                            log::warn!("⚠️ [CHALLENGES] Error uniéndose en backend: {}", e);
                        }
                    });
                })?;
            }
            append_child(&card, &join_btn)?;
        }

        append_child(list, &card)?;
    }
    Ok(())
}

/// Retos de muestra cuando el backend no responde
fn sample_challenges() -> Vec<Challenge> {
    let challenge = |id: &str, title: &str, description: &str, target: f64, current: f64, unit: &str| {
        Challenge {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            target,
            current,
            unit: unit.to_string(),
            joined: false,
            created_by: "FitTrack".to_string(),
        }
    };
    vec![
        challenge("c1", "Run 50 Miles", "Run fifty miles before the month ends", 50.0, 12.0, "miles"),
        challenge("c2", "30-Day Streak", "Work out every day for thirty days", 30.0, 8.0, "days"),
        challenge("c3", "Burn 10k Calories", "Burn ten thousand calories this month", 10_000.0, 3_450.0, "kcal"),
    ]
}
