// ============================================================================
// FITTRACK - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// - Routing: Tabla de rutas + guard de acceso (lógica pura, testeable)
// ============================================================================

pub mod config;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod viewmodels;
#[cfg(target_arch = "wasm32")]
pub mod views;

#[cfg(target_arch = "wasm32")]
pub use bootstrap::{main, rerender_app};

#[cfg(target_arch = "wasm32")]
mod bootstrap {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_logger::Config;

    use crate::app::App;
    use crate::routing::Route;
    use crate::viewmodels::SessionViewModel;
    use crate::utils::constants::SESSION_EXPIRED_EVENT;

    // Variable estática global para mantener la instancia de App
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        // Inicializar logging
        wasm_logger::init(Config::default());
        log::info!("🚀 FitTrack - Rust Puro + MVVM");

        // Crear y renderizar app
        let app = App::new()?;
        app.render()?;

        let state = app.state().clone();

        // Guardar app en variable global
        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(app);
        });

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        // Listener global de sesión expirada (lo emite ApiClient ante un 401).
        // Se registra UNA sola vez aquí, si no se acumularían.
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                log::warn!("⚠️ [MAIN] Evento sessionExpired recibido");
                SessionViewModel::new(state.clone()).handle_session_expired();
            }) as Box<dyn FnMut(web_sys::Event)>);
            window.add_event_listener_with_callback(
                SESSION_EXPIRED_EVENT,
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        // Listener de popstate: botones atrás/adelante del navegador
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    if let Ok(path) = window.location().pathname() {
                        log::info!("⬅️ [MAIN] popstate: {}", path);
                        state.set_route(Route::from_path(&path));
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Re-renderizar la app (re-render completo de la pantalla actual)
    pub fn rerender_app() {
        APP.with(|app_cell| {
            if let Some(ref app) = *app_cell.borrow() {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App no está inicializada");
            }
        });
    }
}
