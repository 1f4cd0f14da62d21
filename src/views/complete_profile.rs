// ============================================================================
// COMPLETE PROFILE VIEW - Onboarding obligatorio tras el registro
// ============================================================================
// El guard redirige aquí a cualquier usuario autenticado con el perfil
// incompleto. Al guardar, el perfil queda completo y se navega al dashboard.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::dom::{
    append_child, create_element, on_change, on_click, on_input, on_submit, set_attribute,
    set_class_name, set_text_content, ElementBuilder,
};
use crate::models::user::IdentityPatch;
use crate::models::workout::WORKOUT_TYPES;
use crate::state::app_state::AppState;
use crate::viewmodels::SessionViewModel;

const FITNESS_GOALS: &[&str] = &[
    "Lose Weight",
    "Build Muscle",
    "Improve Endurance",
    "Stay Active",
    "Train for Event",
];

/// Renderizar formulario de completar perfil
pub fn render_complete_profile(state: &AppState) -> Result<Element, JsValue> {
    let age = Rc::new(RefCell::new(String::new()));
    let gender = Rc::new(RefCell::new(String::new()));
    let height = Rc::new(RefCell::new(String::new()));
    let weight = Rc::new(RefCell::new(String::new()));
    let target_weight = Rc::new(RefCell::new(String::new()));
    let location = Rc::new(RefCell::new(String::new()));
    let goals: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let preferred: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?
        .class("auth-container auth-container-wide")
        .build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let title = ElementBuilder::new("h1")?.text("Complete your profile").build();
    let greeting = match state.session.identity() {
        Some(identity) => format!("Almost there, {}! Tell us about yourself.", identity.name),
        None => "Almost there! Tell us about yourself.".to_string(),
    };
    let subtitle = ElementBuilder::new("p")?.text(&greeting).build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = create_element("form")?;
    set_class_name(&form, "profile-form");

    let row = ElementBuilder::new("div")?.class("form-row").build();
    append_child(&row, &number_group("age", "Age", age.clone())?)?;
    append_child(&row, &gender_select(gender.clone())?)?;
    append_child(&form, &row)?;

    let row2 = ElementBuilder::new("div")?.class("form-row").build();
    append_child(&row2, &number_group("height", "Height (cm)", height.clone())?)?;
    append_child(&row2, &number_group("weight", "Weight (kg)", weight.clone())?)?;
    append_child(&row2, &number_group("target-weight", "Target weight (kg)", target_weight.clone())?)?;
    append_child(&form, &row2)?;

    append_child(
        &form,
        &super::login::form_group("location", "Location", "text", "City", location.clone())?,
    )?;

    append_child(&form, &chip_group("Fitness goals", FITNESS_GOALS, goals.clone())?)?;
    append_child(&form, &chip_group("Preferred workouts", WORKOUT_TYPES, preferred.clone())?)?;

    let error_box = ElementBuilder::new("div")?.class("form-error").build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Save profile")
        .build();

    {
        let state = state.clone();
        let error_box = error_box.clone();
        let submit_btn = submit_btn.clone();
        let age = age.clone();
        let gender = gender.clone();
        let height = height.clone();
        let weight = weight.clone();
        let target_weight = target_weight.clone();
        let location = location.clone();
        let goals = goals.clone();
        let preferred = preferred.clone();

        on_submit(&form, move || {
            let patch = IdentityPatch {
                age: age.borrow().parse().ok(),
                gender: non_empty(&gender.borrow()),
                height: height.borrow().parse().ok(),
                weight: weight.borrow().parse().ok(),
                target_weight: target_weight.borrow().parse().ok(),
                location: non_empty(&location.borrow()),
                fitness_goals: Some(goals.borrow().clone()),
                preferred_workouts: Some(preferred.borrow().clone()),
                ..Default::default()
            };

            if patch.age.is_none() || patch.height.is_none() || patch.weight.is_none() {
                set_text_content(&error_box, "Age, height and weight are required");
                return;
            }

            set_text_content(&error_box, "");
            set_text_content(&submit_btn, "Saving...");
            let _ = submit_btn.set_attribute("disabled", "true");

            let state = state.clone();
            let error_box = error_box.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new(state);
                if let Err(e) = vm.complete_profile(patch).await {
                    log::error!("❌ Error guardando perfil: {}", e);
                    set_text_content(&error_box, &e.to_string());
                    set_text_content(&submit_btn, "Save profile");
                    let _ = submit_btn.remove_attribute("disabled");
                }
            });
        })?;
    }

    append_child(&form, &error_box)?;
    append_child(&form, &submit_btn)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&screen, &container)?;
    Ok(screen)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn number_group(id: &str, label_text: &str, value: Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "number")?;
    set_attribute(&input, "id", id)?;
    set_class_name(&input, "form-input");

    {
        let value = value.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

fn gender_select(value: Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", "gender")?
        .text("Gender")
        .build();

    let select = create_element("select")?;
    set_attribute(&select, "id", "gender")?;
    set_class_name(&select, "form-input");

    for option_text in ["", "Female", "Male", "Other", "Prefer not to say"] {
        let option = create_element("option")?;
        set_attribute(&option, "value", option_text)?;
        set_text_content(&option, if option_text.is_empty() { "Select..." } else { option_text });
        append_child(&select, &option)?;
    }

    {
        let value = value.clone();
        on_change(&select, move |e: web_sys::Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &select)?;
    Ok(group)
}

/// Grupo de chips seleccionables (toggle con click)
fn chip_group(
    label_text: &str,
    options: &[&str],
    selected: Rc<RefCell<Vec<String>>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?.text(label_text).build();
    let chips = ElementBuilder::new("div")?.class("chip-list").build();

    for option in options {
        let chip = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("chip")
            .text(option)
            .build();

        {
            let selected = selected.clone();
            let chip = chip.clone();
            let option = option.to_string();
            on_click(&chip.clone(), move |_| {
                let mut list = selected.borrow_mut();
                if let Some(pos) = list.iter().position(|g| g == &option) {
                    list.remove(pos);
                    set_class_name(&chip, "chip");
                } else {
                    list.push(option.clone());
                    set_class_name(&chip, "chip chip-selected");
                }
            })?;
        }

        append_child(&chips, &chip)?;
    }

    append_child(&group, &label)?;
    append_child(&group, &chips)?;
    Ok(group)
}
