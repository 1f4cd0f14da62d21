// ============================================================================
// REGISTER VIEW - Alta de cuenta
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::navigate;
use crate::dom::{
    append_child, create_element, on_click, on_submit, set_class_name, set_text_content,
    ElementBuilder,
};
use crate::routing::Route;
use crate::state::app_state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::login::form_group;

/// Renderizar vista de registro
pub fn render_register(state: &AppState) -> Result<Element, JsValue> {
    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("auth-screen").build();
    let container = ElementBuilder::new("div")?.class("auth-container").build();

    let header = ElementBuilder::new("div")?.class("auth-header").build();
    let title = ElementBuilder::new("h1")?.text("Create your account").build();
    let subtitle = ElementBuilder::new("p")?
        .text("Join FitTrack and start moving")
        .build();
    append_child(&header, &title)?;
    append_child(&header, &subtitle)?;

    let form = create_element("form")?;
    set_class_name(&form, "auth-form");

    let name_group = form_group("name", "Name", "text", "Your name", name.clone())?;
    let email_group = form_group("email", "Email", "email", "you@example.com", email.clone())?;
    let password_group =
        form_group("password", "Password", "password", "At least 6 characters", password.clone())?;

    let error_box = ElementBuilder::new("div")?.class("form-error").build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Sign up")
        .build();

    {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error_box = error_box.clone();
        let submit_btn = submit_btn.clone();
        let state = state.clone();

        on_submit(&form, move || {
            let name_val = name.borrow().clone();
            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();

            if name_val.is_empty() || email_val.is_empty() || password_val.is_empty() {
                set_text_content(&error_box, "Please fill in all fields");
                return;
            }
            if password_val.len() < 6 {
                set_text_content(&error_box, "Password must be at least 6 characters");
                return;
            }

            set_text_content(&error_box, "");
            set_text_content(&submit_btn, "Creating account...");
            let _ = submit_btn.set_attribute("disabled", "true");

            let state = state.clone();
            let error_box = error_box.clone();
            let submit_btn = submit_btn.clone();
            spawn_local(async move {
                let vm = SessionViewModel::new(state);
                if let Err(e) = vm.register(name_val, email_val, password_val).await {
                    log::error!("❌ Error en registro: {}", e);
                    set_text_content(&error_box, &e.to_string());
                    set_text_content(&submit_btn, "Sign up");
                    let _ = submit_btn.remove_attribute("disabled");
                }
            });
        })?;
    }

    append_child(&form, &name_group)?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_box)?;
    append_child(&form, &submit_btn)?;

    let switch = ElementBuilder::new("p")?.class("auth-switch").build();
    let switch_text = ElementBuilder::new("span")?
        .text("Already have an account? ")
        .build();
    let switch_link = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("link-button")
        .text("Log in")
        .build();
    {
        let state = state.clone();
        on_click(&switch_link, move |_| navigate(&state, Route::Login))?;
    }
    append_child(&switch, &switch_text)?;
    append_child(&switch, &switch_link)?;

    append_child(&container, &header)?;
    append_child(&container, &form)?;
    append_child(&container, &switch)?;
    append_child(&screen, &container)?;

    Ok(screen)
}
