// ============================================================================
// GROUPS VIEW - Grupos de entrenamiento
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
use crate::models::community::{Group, GroupMember, NewGroup};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::views::authed_page;

pub fn render_groups(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("groups").build();
    let title = ElementBuilder::new("h2")?.text("Training groups").build();
    append_child(&content, &title)?;

    let groups: Rc<RefCell<Vec<Group>>> = Rc::new(RefCell::new(Vec::new()));
    let list = ElementBuilder::new("div")?.class("group-list").build();
    let loading = ElementBuilder::new("div")?
        .class("empty-state")
        .text("Loading groups...")
        .build();
    append_child(&list, &loading)?;

    let token = state.session.token().unwrap_or_default();

    // Formulario para crear un grupo nuevo
    let form = create_element("form")?;
    set_class_name(&form, "group-form");

    let name_value = Rc::new(RefCell::new(String::new()));
    let name_input = create_element("input")?;
    set_attribute(&name_input, "type", "text")?;
    set_attribute(&name_input, "placeholder", "Group name")?;
    set_class_name(&name_input, "form-input");
    {
        let name_value = name_value.clone();
        on_input(&name_input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *name_value.borrow_mut() = target.value();
            }
        })?;
    }

    let error_box = ElementBuilder::new("div")?.class("form-error").build();
    let create_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Create group")
        .build();

    {
        let token = token.clone();
        let groups = groups.clone();
        let list = list.clone();
        let error_box = error_box.clone();
        let name_value = name_value.clone();
        let member_name = state
            .session
            .identity()
            .map(|i| i.name)
            .unwrap_or_else(|| "You".to_string());

        on_submit(&form, move || {
            let name = name_value.borrow().trim().to_string();
            if name.is_empty() {
                set_text_content(&error_box, "Group name is required");
                return;
            }
            set_text_content(&error_box, "");

            let new_group = NewGroup { name };
            let token = token.clone();
            let groups = groups.clone();
            let list = list.clone();
            let member_name = member_name.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                let created = match api.create_group(&token, &new_group).await {
                    Ok(group) => group,
                    Err(e) => {
                        // Alta optimista local
                        log::warn!("⚠️ [GROUPS] Backend no disponible, alta local: {}", e);
                        Group {
                            id: uuid::Uuid::new_v4().to_string(),
                            name: new_group.name.clone(),
                            members: vec![GroupMember {
                                id: uuid::Uuid::new_v4().to_string(),
                                name: member_name,
                            }],
                            joined: true,
                        }
                    }
                };
                groups.borrow_mut().insert(0, created);
                let _ = render_group_list(&list, &groups, &token);
            });
        })?;
    }

    append_child(&form, &name_input)?;
    append_child(&form, &create_btn)?;
    append_child(&content, &form)?;
    append_child(&content, &error_box)?;
    append_child(&content, &list)?;

    // Carga inicial
    if state.session.is_authenticated() {
        let token = token.clone();
        let groups = groups.clone();
        let list = list.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            let fetched = match api.get_groups(&token).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    log::warn!("⚠️ [GROUPS] Backend no disponible, usando grupos de muestra: {}", e);
                    sample_groups()
                }
            };
            *groups.borrow_mut() = fetched;
            let _ = render_group_list(&list, &groups, &token);
        });
    }

    authed_page(state, content)
}

fn render_group_list(
    list: &Element,
    groups: &Rc<RefCell<Vec<Group>>>,
    token: &str,
) -> Result<(), JsValue> {
    clear_children(list);

    for group in groups.borrow().iter() {
        let card = ElementBuilder::new("div")?.class("group-card").build();

        let name = ElementBuilder::new("h3")?.text(&group.name).build();
        let members = ElementBuilder::new("p")?
            .class("group-members")
            .text(&format!("{} members", group.members.len()))
            .build();

        append_child(&card, &name)?;
        append_child(&card, &members)?;

        if group.joined {
            let badge = ElementBuilder::new("span")?
                .class("badge badge-success")
                .text("✓ Member")
                .build();
            append_child(&card, &badge)?;
        } else {
            let join_btn = ElementBuilder::new("button")?
                .attr("type", "button")?
                .class("btn-secondary")
                .text("Join group")
                .build();
            {
                let id = group.id.clone();
                let token = token.to_string();
                let join_btn = join_btn.clone();
                on_click(&join_btn.clone(), move |_| {
                    // Unión optimista: el botón cambia de inmediato
                    set_text_content(&join_btn, "✓ Member");
                    let _ = join_btn.set_attribute("disabled", "true");

                    let id = id.clone();
                    let token = token.clone();
                    spawn_local(async move {
                        let api = ApiClient::new();
                        if let Err(e) = api.join_group(&token, &id).await {
                            log::warn!("⚠️ [GROUPS] Error uniéndose en backend: {}", e);
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

/// Grupos de muestra cuando el backend no responde
fn sample_groups() -> Vec<Group> {
    let member = |id: &str, name: &str| GroupMember {
        id: id.to_string(),
        name: name.to_string(),
    };
    vec![
        Group {
            id: "g1".to_string(),
            name: "Morning Runners".to_string(),
            members: vec![member("m1", "Sarah"), member("m2", "Marcus"), member("m3", "Priya")],
            joined: false,
        },
        Group {
            id: "g2".to_string(),
            name: "Powerlifting Crew".to_string(),
            members: vec![member("m4", "Dan"), member("m5", "Aisha")],
            joined: true,
        },
    ]
}
