// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista de subscribers compartida entre clones del mismo estado.
/// Los lectores (route guard, vistas) se suscriben en lugar de sondear:
/// cada mutación notifica y las transiciones se propagan solas.
#[derive(Clone, Default)]
pub struct Subscribers {
    callbacks: Rc<RefCell<Vec<Callback>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Clonar antes de invocar: un callback puede volver a suscribir
        let callbacks: Vec<Callback> = self.callbacks.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_reaches_every_subscriber() {
        let subs = Subscribers::new();
        let count = Rc::new(RefCell::new(0));

        for _ in 0..3 {
            let count = count.clone();
            subs.subscribe(move || *count.borrow_mut() += 1);
        }

        subs.notify();
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn clones_share_the_same_subscriber_list() {
        let subs = Subscribers::new();
        let cloned = subs.clone();
        let fired = Rc::new(RefCell::new(false));

        {
            let fired = fired.clone();
            cloned.subscribe(move || *fired.borrow_mut() = true);
        }

        subs.notify();
        assert!(*fired.borrow());
    }
}
