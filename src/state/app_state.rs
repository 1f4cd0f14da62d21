// ============================================================================
// APP STATE - Estado global de la aplicación (sesión + navegación + avisos)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::routing::Route;
use crate::state::reactivity::Subscribers;
use crate::state::session::SessionState;

/// Aviso efímero mostrado en la parte superior de la vista
#[derive(Clone, PartialEq, Debug)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Estado global compartido entre vistas y viewmodels
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    route: Rc<RefCell<Route>>,
    notice: Rc<RefCell<Option<Notice>>>,
    change_subscribers: Subscribers,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            route: Rc::new(RefCell::new(Route::Index)),
            notice: Rc::new(RefCell::new(None)),
            change_subscribers: Subscribers::new(),
        }
    }

    pub fn route(&self) -> Route {
        *self.route.borrow()
    }

    /// Cambiar la ruta actual y notificar
    pub fn set_route(&self, route: Route) {
        {
            let mut current = self.route.borrow_mut();
            if *current == route {
                return;
            }
            *current = route;
        }
        log::info!("🧭 [STATE] Ruta actual: {}", self.route.borrow().path());
        self.change_subscribers.notify();
    }

    /// Sincronizar la ruta sin notificar. Solo para redirecciones del
    /// guard durante el render, donde un notify causaría un bucle.
    pub fn sync_route(&self, route: Route) {
        *self.route.borrow_mut() = route;
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }

    pub fn set_notice(&self, notice: Notice) {
        *self.notice.borrow_mut() = Some(notice);
        self.change_subscribers.notify();
    }

    pub fn clear_notice(&self) {
        let had_notice = self.notice.borrow_mut().take().is_some();
        if had_notice {
            self.change_subscribers.notify();
        }
    }

    /// Suscribirse a cualquier cambio de estado (ruta, aviso o sesión)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(callback);
        // Los cambios de sesión también re-renderizan
        let subscribers = self.change_subscribers.clone();
        self.session.subscribe(move || subscribers.notify());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_change_notifies_subscribers() {
        let state = AppState::new();
        let fired = Rc::new(RefCell::new(0));
        {
            let fired = fired.clone();
            state.subscribe_to_changes(move || *fired.borrow_mut() += 1);
        }

        state.set_route(Route::Login);
        assert_eq!(state.route(), Route::Login);
        assert_eq!(*fired.borrow(), 1);

        // Fijar la misma ruta no dispara nada
        state.set_route(Route::Login);
        assert_eq!(*fired.borrow(), 1);
    }

    #[test]
    fn notices_set_and_clear() {
        let state = AppState::new();
        assert_eq!(state.notice(), None);

        state.set_notice(Notice::Success("Profile saved".to_string()));
        assert_eq!(state.notice(), Some(Notice::Success("Profile saved".to_string())));

        state.clear_notice();
        assert_eq!(state.notice(), None);
        // clear sobre vacío es inofensivo
        state.clear_notice();
    }

    #[test]
    fn session_transitions_reach_change_subscribers() {
        use crate::utils::storage::MemoryStorage;

        let state = AppState::new();
        let fired = Rc::new(RefCell::new(0));
        {
            let fired = fired.clone();
            state.subscribe_to_changes(move || *fired.borrow_mut() += 1);
        }

        state.session.restore(&MemoryStorage::new());
        assert_eq!(*fired.borrow(), 1);
    }
}
