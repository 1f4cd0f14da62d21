// ============================================================================
// ADMIN DASHBOARD VIEW - Gestión de usuarios y métricas de la plataforma
// ============================================================================
// Solo accesible con rol admin (el guard redirige al resto a Dashboard).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, clear_children, create_element, on_click, on_input, set_attribute,
    set_class_name, ElementBuilder,
};
use crate::models::admin::{AdminUser, RoleChangeRequest};
use crate::services::ApiClient;
use crate::state::app_state::AppState;
use crate::utils::stats::{engagement_summary, signups_per_month};
use crate::views::authed_page;

pub fn render_admin_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let content = ElementBuilder::new("main")?.class("admin-dashboard").build();
    let title = ElementBuilder::new("h2")?.text("Admin dashboard").build();
    append_child(&content, &title)?;

    let metrics = ElementBuilder::new("div")?.class("admin-metrics").build();
    let table = ElementBuilder::new("div")?.class("admin-user-table").build();
    let loading = ElementBuilder::new("div")?
        .class("empty-state")
        .text("Loading users...")
        .build();
    append_child(&table, &loading)?;

    // Buscador local: filtra las filas por nombre o email sin ir al backend
    let query: Rc<RefCell<String>> = Rc::new(RefCell::new(String::new()));
    let search_input = create_element("input")?;
    set_attribute(&search_input, "type", "search")?;
    set_attribute(&search_input, "placeholder", "Search users by name or email...")?;
    set_class_name(&search_input, "form-input admin-search");

    append_child(&content, &metrics)?;
    append_child(&content, &search_input)?;
    append_child(&content, &table)?;

    if let Some(token) = state.session.token() {
        let metrics = metrics.clone();
        let table = table.clone();
        let query = query.clone();
        let search_input = search_input.clone();
        spawn_local(async move {
            let api = ApiClient::new();
            match api.get_admin_users(&token).await {
                Ok(fetched) => {
                    let users = Rc::new(RefCell::new(fetched));
                    let _ = render_metrics(&metrics, &users.borrow());
                    let _ = render_user_table(&table, &metrics, &users, &query, &token);

                    let users = users.clone();
                    let query = query.clone();
                    let table = table.clone();
                    let metrics = metrics.clone();
                    let token = token.clone();
                    let _ = on_input(&search_input, move |e: web_sys::InputEvent| {
                        if let Some(target) =
                            e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                        {
                            *query.borrow_mut() = target.value();
                        }
                        let _ = render_user_table(&table, &metrics, &users, &query, &token);
                    });
                }
                Err(e) => {
                    log::error!("❌ [ADMIN] Error cargando usuarios: {}", e);
                    clear_children(&table);
                    if let Ok(error) = ElementBuilder::new("div") {
                        let error = error
                            .class("empty-state")
                            .text("Could not load users. Please try again.")
                            .build();
                        let _ = append_child(&table, &error);
                    }
                }
            }
        });
    }

    authed_page(state, content)
}

/// Tarjetas de métricas: altas por mes y distribución de engagement
fn render_metrics(metrics: &Element, users: &[AdminUser]) -> Result<(), JsValue> {
    clear_children(metrics);

    let total_card = metric_card("Total users", &users.len().to_string())?;
    append_child(metrics, &total_card)?;

    let engagement = engagement_summary(users);
    let engagement_card = metric_card(
        "Engagement",
        &format!(
            "{} active · {} moderate · {} inactive",
            engagement.active, engagement.moderate, engagement.inactive
        ),
    )?;
    append_child(metrics, &engagement_card)?;

    let signups = signups_per_month(users);
    if let Some(latest) = signups.last() {
        let signup_card = metric_card(
            "Signups this month",
            &format!("{} ({}-{:02})", latest.users, latest.year, latest.month),
        )?;
        append_child(metrics, &signup_card)?;
    }

    Ok(())
}

fn metric_card(title: &str, value: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("stat-card").build();
    let title_el = ElementBuilder::new("div")?.class("stat-title").text(title).build();
    let value_el = ElementBuilder::new("div")?.class("stat-value").text(value).build();
    append_child(&card, &title_el)?;
    append_child(&card, &value_el)?;
    Ok(card)
}

fn render_user_table(
    table: &Element,
    metrics: &Element,
    users: &Rc<RefCell<Vec<AdminUser>>>,
    query: &Rc<RefCell<String>>,
    token: &str,
) -> Result<(), JsValue> {
    clear_children(table);

    let needle = query.borrow().trim().to_lowercase();
    let mut visible = 0usize;

    for user in users.borrow().iter() {
        if !needle.is_empty()
            && !user.name.to_lowercase().contains(&needle)
            && !user.email.to_lowercase().contains(&needle)
        {
            continue;
        }
        visible += 1;
        let row = ElementBuilder::new("div")?.class("admin-user-row").build();

        let info = ElementBuilder::new("div")?.class("admin-user-info").build();
        let name = ElementBuilder::new("strong")?.text(&user.name).build();
        let email = ElementBuilder::new("span")?
            .class("admin-user-email")
            .text(&user.email)
            .build();
        let details = ElementBuilder::new("span")?
            .class("admin-user-details")
            .text(&format!(
                "{} · {} workouts · joined {}",
                user.role,
                user.workouts_count.unwrap_or(0),
                user.created_at.format("%b %Y")
            ))
            .build();
        append_child(&info, &name)?;
        append_child(&info, &email)?;
        append_child(&info, &details)?;
        append_child(&row, &info)?;

        // Alternar rol user/admin
        let next_role = if user.role == "admin" { "user" } else { "admin" };
        let role_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-secondary")
            .text(&format!("Make {}", next_role))
            .build();
        {
            let id = user.id.clone();
            let next_role = next_role.to_string();
            let token = token.to_string();
            let users = users.clone();
            let table = table.clone();
            let metrics = metrics.clone();
            let query = query.clone();
            on_click(&role_btn, move |_| {
                {
                    let mut list = users.borrow_mut();
                    if let Some(user) = list.iter_mut().find(|u| u.id == id) {
                        user.role = next_role.clone();
                    }
                }
                let _ = render_user_table(&table, &metrics, &users, &query, &token);

                let id = id.clone();
                let token = token.clone();
                let request = RoleChangeRequest { role: next_role.clone() };
                spawn_local(async move {
                    let api = ApiClient::new();
                    if let Err(e) = api.set_user_role(&token, &id, &request).await {
                        log::error!("❌ [ADMIN] Error cambiando rol: {}", e);
                    }
                });
            })?;
        }
        append_child(&row, &role_btn)?;

        // Eliminar usuario
        let delete_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-delete")
            .text("Delete")
            .build();
        {
            let id = user.id.clone();
            let token = token.to_string();
            let users = users.clone();
            let table = table.clone();
            let metrics = metrics.clone();
            let query = query.clone();
            on_click(&delete_btn, move |_| {
                users.borrow_mut().retain(|u| u.id != id);
                let _ = render_metrics(&metrics, &users.borrow());
                let _ = render_user_table(&table, &metrics, &users, &query, &token);

                let id = id.clone();
                let token = token.clone();
                spawn_local(async move {
                    let api = ApiClient::new();
                    if let Err(e) = api.delete_user(&token, &id).await {
                        log::error!("❌ [ADMIN] Error eliminando usuario: {}", e);
                    }
                });
            })?;
        }
        append_child(&row, &delete_btn)?;

        append_child(table, &row)?;
    }

    if visible == 0 {
        let empty = ElementBuilder::new("div")?
            .class("empty-state")
            .text("No users match your search.")
            .build();
        append_child(table, &empty)?;
    }
    Ok(())
}
