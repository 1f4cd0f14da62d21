// ============================================================================
// LOGIN VIEW - Formulario de inicio de sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::app::navigate;
use crate::dom::{
    append_child, create_element, on_click, on_input, on_submit, set_attribute, set_class_name,
    set_text_content, ElementBuilder,
};
use crate::routing::Route;
use crate::state::app_state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::render_notice;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    if let Some(banner) = render_notice(state)? {
        append_child(&screen, &banner)?;
    }

    let container = ElementBuilder::new("div")?.class("auth-container").build();

    // Header
    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let logo = ElementBuilder::new("div")?
        .class("auth-logo")
        .text("💪")
        .build();
    let title = ElementBuilder::new("h1")?.text("Welcome back").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Log in to keep your streak going")
        .build();
    append_child(&header, &logo)?;
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    // Formulario
    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    let email_group = form_group("email", "Email", "email", "you@example.com", email.clone())?;
    let password_group = form_group("password", "Password", "password", "••••••••", password.clone())?;

    // Mensaje de error del formulario
    let error_box = ElementBuilder::new("div")?.class("form-error").build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Log in")
        .build();

    // Submit
    {
        let email = email.clone();
        let password = password.clone();
        let error_box = error_box.clone();
        let submit_btn = submit_btn.clone();
        let state = state.clone();

        on_submit(&form, move || {
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if email_val.is_empty() || password_val.is_empty() {
                set_text_content(&error_box, "Please fill in all fields");
                return;
            }

            set_text_content(&error_box, "");
            set_text_content(&submit_btn, "Logging in...");
            let _ = submit_btn.set_attribute("disabled", "true");

            let state = state.clone();
            let error_box = error_box.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new(state);
                if let Err(e) = vm.login(email_val, password_val).await {
                    log::error!("❌ Error en login: {}", e);
                    set_text_content(&error_box, &e.to_string());
                    set_text_content(&submit_btn, "Log in");
                    let _ = submit_btn.remove_attribute("disabled");
                }
                // En éxito el viewmodel navega y la pantalla se reemplaza
            });
        })?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_box)?;
    append_child(&form, &submit_btn)?;

    // Link a registro
    let switch = ElementBuilder::new("p")?.class("auth-switch").build();
    let switch_text = ElementBuilder::new("span")?
        .text("Don't have an account? ")
        .build();
    let switch_link = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("link-button")
        .text("Sign up")
        .build();
    {
        let state = state.clone();
        on_click(&switch_link, move |_| navigate(&state, Route::Register))?;
    }
    append_child(&switch, &switch_text)?;
    append_child(&switch, &switch_link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &switch)?;
    append_child(&screen, &container)?;

    Ok(screen)
}

/// Helper para crear form group con input controlado
pub(super) fn form_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?.class("form-group").build();

    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
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

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
