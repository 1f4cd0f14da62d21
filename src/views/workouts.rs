// ============================================================================
// WORKOUTS VIEW - Historial y registro de entrenamientos
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

use crate::dom::{
    append_child, clear_children, create_element, on_change, on_click, on_input, on_submit,
    set_attribute, set_class_name, set_text_content, ElementBuilder,
};
use crate::models::workout::{NewWorkout, Workout, WORKOUT_TYPES};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::views::authed_page;

pub fn render_workouts(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("workouts").build();
    let title = ElementBuilder::new("h2")?.text("Your workouts").build();
    append_child(&content, &title)?;

    // Estado local de la lista
    let workouts: Rc<RefCell<Vec<Workout>>> = Rc::new(RefCell::new(Vec::new()));
    let list = ElementBuilder::new("div")?.class("workout-list").build();

    let token = state.session.token().unwrap_or_default();

    // Re-render de la lista cuando cambia
    let refresh_list: Rc<dyn Fn()> = {
        let workouts = workouts.clone();
        let list = list.clone();
        let token = token.clone();
        Rc::new(move || {
            let _ = render_workout_list(&list, &workouts, &token);
        })
    };

    // Formulario de alta
    let form = create_element("form")?;
    set_class_name(&form, "workout-form");

    let type_value = Rc::new(RefCell::new(WORKOUT_TYPES[0].to_string()));
    let duration_value = Rc::new(RefCell::new(String::new()));
    let calories_value = Rc::new(RefCell::new(String::new()));

    // Select de tipo
    let select = create_element("select")?;
    set_class_name(&select, "form-input");
    for workout_type in WORKOUT_TYPES {
        let option = create_element("option")?;
        set_attribute(&option, "value", workout_type)?;
        set_text_content(&option, workout_type);
        append_child(&select, &option)?;
    }
    {
        let type_value = type_value.clone();
        on_change(&select, move |e: web_sys::Event| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                *type_value.borrow_mut() = target.value();
            }
        })?;
    }

    let duration_input = number_input("Duration (min)", duration_value.clone())?;
    let calories_input = number_input("Calories", calories_value.clone())?;

    let error_box = ElementBuilder::new("div")?.class("form-error").build();
    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Add workout")
        .build();

    {
        let token = token.clone();
        let workouts = workouts.clone();
        let refresh_list = refresh_list.clone();
        let error_box = error_box.clone();
        let type_value = type_value.clone();
        let duration_value = duration_value.clone();
        let calories_value = calories_value.clone();

        on_submit(&form, move || {
            let duration: u32 = match duration_value.borrow().parse() {
                Ok(n) if n > 0 => n,
                _ => {
                    set_text_content(&error_box, "Enter a duration in minutes");
                    return;
                }
            };
            let calories: u32 = match calories_value.borrow().parse() {
                Ok(n) => n,
                _ => {
                    set_text_content(&error_box, "Enter the calories burned");
                    return;
                }
            };
            set_text_content(&error_box, "");

            let new_workout = NewWorkout {
                workout_type: type_value.borrow().clone(),
                duration,
                calories_burned: calories,
            };

            let token = token.clone();
            let workouts = workouts.clone();
            let refresh_list = refresh_list.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                let created = match api.create_workout(&token, &new_workout).await {
                    Ok(workout) => workout,
                    Err(e) => {
                        // Alta optimista local si el backend no responde
                        log::warn!("⚠️ [WORKOUTS] Backend no disponible, alta local: {}", e);
                        Workout {
                            id: uuid::Uuid::new_v4().to_string(),
                            workout_type: new_workout.workout_type.clone(),
                            duration: new_workout.duration,
                            calories_burned: new_workout.calories_burned,
                            date: chrono::Utc::now(),
                        }
                    }
                };
                workouts.borrow_mut().insert(0, created);
                refresh_list();
            });
        })?;
    }

    append_child(&form, &select)?;
    append_child(&form, &duration_input)?;
    append_child(&form, &calories_input)?;
    append_child(&form, &submit_btn)?;
    append_child(&content, &form)?;
    append_child(&content, &error_box)?;
    append_child(&content, &list)?;

    // Carga inicial
    {
        let token = token.clone();
        let workouts = workouts.clone();
        let refresh_list = refresh_list.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            match api.get_workouts(&token).await {
                Ok(fetched) => {
                    *workouts.borrow_mut() = fetched;
                }
                Err(e) => {
                    log::warn!("⚠️ [WORKOUTS] Error cargando historial: {}", e);
                }
            }
            refresh_list();
        });
    }

    authed_page(state, content)
}

fn number_input(placeholder: &str, value: Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let input = create_element("input")?;
    set_attribute(&input, "type", "number")?;
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

fn render_workout_list(
    list: &Element,
    workouts: &Rc<RefCell<Vec<Workout>>>,
    token: &str,
) -> Result<(), JsValue> {
    clear_children(list);

    let items = workouts.borrow().clone();
    if items.is_empty() {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text("No workouts yet. Add your first one above!")
            .build();
        append_child(list, &empty)?;
        return Ok(());
    }

    for workout in items {
        let row = ElementBuilder::new("div")?.class("workout-row").build();

        let name = ElementBuilder::new("span")?
            .class("workout-type")
            .text(&workout.workout_type)
            .build();
        let details = ElementBuilder::new("span")?
            .class("workout-details")
            .text(&format!(
                "{} min · {} kcal · {}",
                workout.duration,
                workout.calories_burned,
                workout.date.format("%b %d, %Y")
            ))
            .build();

        let delete_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-delete")
            .text("✕")
            .build();
        {
            let id = workout.id.clone();
            let token = token.to_string();
            let workouts = workouts.clone();
            let list = list.clone();
            on_click(&delete_btn, move |_| {
                // Borrado optimista: la fila desaparece de inmediato
                workouts.borrow_mut().retain(|w| w.id != id);
                let _ = render_workout_list(&list, &workouts, &token);

                let id = id.clone();
                let token = token.clone();
                spawn_local(async move {
                    let api = ApiClient::new();
                    if let Err(e) = api.delete_workout(&token, &id).await {
                        log::warn!("⚠️ [WORKOUTS] Error eliminando en backend: {}", e);
                    }
                });
            })?;
        }

        append_child(&row, &name)?;
        append_child(&row, &details)?;
        append_child(&row, &delete_btn)?;
        append_child(list, &row)?;
    }
    Ok(())
}
