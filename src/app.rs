// ============================================================================
// APP - Aplicación principal (root #app + ciclo de render)
// ============================================================================
// Cada cambio de estado hace un re-render completo de la vista actual.
// El guard decide en cada render qué pantalla se muestra realmente.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::routing::{resolve, Route};
use crate::state::app_state::AppState;
use crate::utils::storage::LocalStorage;
use crate::views::{render_loading, render_route};

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    /// Crear nueva aplicación: lee la ruta inicial del navegador y
    /// restaura la sesión persistida.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Ruta inicial desde la URL actual
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                state.sync_route(Route::from_path(&path));
            }
        }

        // Re-renderizar automáticamente ante cualquier cambio de estado.
        // Timeout(0) batchea ráfagas de notificaciones en un solo render.
        state.subscribe_to_changes(move || {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app();
            })
            .forget();
        });

        // Restaurar sesión: pasa de Initializing a Ready y dispara el
        // primer render con la decisión real del guard
        state.session.restore(&LocalStorage);

        Ok(Self { state, root })
    }

    /// Renderizar la pantalla que el guard decida para la ruta actual
    pub fn render(&self) -> Result<(), JsValue> {
        let requested = self.state.route();
        let snapshot = self.state.session.snapshot();

        clear_children(&self.root);

        let view = match resolve(&snapshot, requested) {
            // Sesión restaurándose: indicador de carga, sin redirigir
            None => render_loading()?,
            Some(route) => {
                if route != requested {
                    // Redirección del guard: reemplaza la entrada de
                    // historial, no agrega una nueva
                    replace_history(route);
                    self.state.sync_route(route);
                }
                render_route(&self.state, route)?
            }
        };

        append_child(&self.root, &view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Navegación explícita (clicks, post-login): agrega entrada de historial
pub fn navigate(state: &AppState, route: Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(route.path()));
        }
    }
    state.set_route(route);
}

/// Reemplazar la URL actual sin agregar entrada de historial
fn replace_history(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()));
        }
    }
}
