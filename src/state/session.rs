// ============================================================================
// SESSION STATE - Fuente única de verdad de la sesión autenticada
// ============================================================================
// Invariante central: token e identidad están presentes siempre juntos,
// nunca uno sin el otro. Toda escritura es todo-o-nada: primero se
// persiste el par completo, luego se muta memoria, luego se notifica.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::user::{Identity, IdentityPatch};
use crate::state::reactivity::Subscribers;
use crate::utils::constants::{IDENTITY_STORAGE_KEY, TOKEN_STORAGE_KEY};
use crate::utils::storage::{load_from_storage, save_to_storage, KeyValueStorage};

/// Fase del ciclo de vida de la sesión.
/// Mientras sea `Initializing` ninguna decisión de navegación es válida.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionStatus {
    Initializing,
    Ready,
}

struct SessionInner {
    identity: Option<Identity>,
    token: Option<String>,
    status: SessionStatus,
    /// Generación de llamadas de autenticación en vuelo. Un login que
    /// termina después de un logout trae una generación vieja y se descarta:
    /// gana la última escritura completada.
    auth_generation: u64,
}

/// Vista inmutable de la sesión para el route guard
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SessionSnapshot {
    pub status: SessionStatus,
    pub authenticated: bool,
    pub admin: bool,
    pub profile_complete: bool,
}

/// Estado de sesión compartido (una instancia por proceso cliente)
#[derive(Clone)]
pub struct SessionState {
    inner: Rc<RefCell<SessionInner>>,
    subscribers: Subscribers,
}

impl SessionState {
    /// Crear sesión vacía en estado `Initializing`
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionInner {
                identity: None,
                token: None,
                status: SessionStatus::Initializing,
                auth_generation: 0,
            })),
            subscribers: Subscribers::new(),
        }
    }

    /// Restaurar la sesión persistida. Se llama exactamente una vez al
    /// arrancar; nunca falla: datos parciales o corruptos se tratan como
    /// "sin sesión" y se limpian. Siempre termina en `Ready`.
    pub fn restore(&self, storage: &dyn KeyValueStorage) {
        let token = storage.get(TOKEN_STORAGE_KEY);
        let identity: Option<Identity> = load_from_storage(storage, IDENTITY_STORAGE_KEY);

        match (token, identity) {
            (Some(token), Some(identity)) => {
                log::info!("💾 [SESSION] Sesión restaurada desde storage: {}", identity.email);
                let mut inner = self.inner.borrow_mut();
                inner.token = Some(token);
                inner.identity = Some(identity);
            }
            (None, None) => {
                log::info!("ℹ️ [SESSION] No hay sesión persistida");
            }
            _ => {
                // Par incompleto o identidad corrupta: limpiar y seguir deslogueado
                log::warn!("⚠️ [SESSION] Estado persistido inválido, descartando");
                let _ = storage.remove(TOKEN_STORAGE_KEY);
                let _ = storage.remove(IDENTITY_STORAGE_KEY);
            }
        }

        self.inner.borrow_mut().status = SessionStatus::Ready;
        self.subscribers.notify();
    }

    /// Reservar la siguiente generación para una llamada de login/register.
    /// El resultado solo se aplicará si la generación sigue vigente.
    pub fn begin_auth(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.auth_generation += 1;
        inner.auth_generation
    }

    /// Aplicar el resultado de un login/register. Devuelve false (y no toca
    /// nada) si la generación quedó obsoleta, p.ej. porque hubo un logout
    /// mientras la llamada estaba en vuelo.
    pub fn commit_auth(
        &self,
        generation: u64,
        token: String,
        identity: Identity,
        storage: &dyn KeyValueStorage,
    ) -> bool {
        {
            let inner = self.inner.borrow();
            if inner.auth_generation != generation {
                log::warn!("⚠️ [SESSION] Respuesta de auth obsoleta descartada (gen {} != {})",
                           generation, inner.auth_generation);
                return false;
            }
        }

        // Escritura atómica: durable primero, memoria después
        if let Err(e) = storage.set(TOKEN_STORAGE_KEY, &token) {
            log::error!("❌ [SESSION] Error persistiendo token: {}", e);
        }
        if let Err(e) = save_to_storage(storage, IDENTITY_STORAGE_KEY, &identity) {
            log::error!("❌ [SESSION] Error persistiendo identidad: {}", e);
        }

        {
            let mut inner = self.inner.borrow_mut();
            inner.token = Some(token);
            inner.identity = Some(identity);
        }
        self.subscribers.notify();
        true
    }

    /// Logout: síncrono, idempotente, siempre exitoso. Limpia memoria y
    /// las dos claves durables, e invalida cualquier auth en vuelo.
    pub fn logout(&self, storage: &dyn KeyValueStorage) {
        let _ = storage.remove(TOKEN_STORAGE_KEY);
        let _ = storage.remove(IDENTITY_STORAGE_KEY);

        {
            let mut inner = self.inner.borrow_mut();
            inner.token = None;
            inner.identity = None;
            inner.auth_generation += 1;
        }
        log::info!("👋 [SESSION] Sesión limpiada");
        self.subscribers.notify();
    }

    /// Fusionar campos de perfil en la identidad actual y re-persistir.
    /// No toca el token. No-op si no hay sesión.
    pub fn update_identity(&self, patch: &IdentityPatch, storage: &dyn KeyValueStorage) {
        let updated = {
            let mut inner = self.inner.borrow_mut();
            match inner.identity.as_mut() {
                Some(identity) => {
                    identity.apply(patch);
                    Some(identity.clone())
                }
                None => None,
            }
        };

        match updated {
            Some(identity) => {
                if let Err(e) = save_to_storage(storage, IDENTITY_STORAGE_KEY, &identity) {
                    log::error!("❌ [SESSION] Error re-persistiendo identidad: {}", e);
                }
                self.subscribers.notify();
            }
            None => {
                log::warn!("⚠️ [SESSION] update_identity sin sesión activa, ignorado");
            }
        }
    }

    // ----- Consultas derivadas (puras, sin efectos) -----

    pub fn status(&self) -> SessionStatus {
        self.inner.borrow().status
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.borrow().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.inner
            .borrow()
            .identity
            .as_ref()
            .map(|i| i.is_admin())
            .unwrap_or(false)
    }

    pub fn is_profile_complete(&self) -> bool {
        self.inner
            .borrow()
            .identity
            .as_ref()
            .map(|i| i.profile_completed)
            .unwrap_or(false)
    }

    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.borrow().identity.clone()
    }

    /// Vista para el route guard
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.borrow();
        SessionSnapshot {
            status: inner.status,
            authenticated: inner.token.is_some(),
            admin: inner.identity.as_ref().map(|i| i.is_admin()).unwrap_or(false),
            profile_complete: inner
                .identity
                .as_ref()
                .map(|i| i.profile_completed)
                .unwrap_or(false),
        }
    }

    /// Suscribirse a transiciones de sesión (login/logout/restore/update)
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback);
    }

    /// Verificación interna del invariante token ⇔ identidad
    #[cfg(test)]
    fn invariant_holds(&self) -> bool {
        let inner = self.inner.borrow();
        inner.token.is_some() == inner.identity.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;
    use crate::utils::storage::MemoryStorage;

    fn identity(profile_completed: bool, role: Role) -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "John Doe".to_string(),
            email: "a@b.com".to_string(),
            role,
            profile_completed,
            age: None,
            gender: None,
            height: None,
            weight: None,
            target_weight: None,
            location: None,
            fitness_goals: vec![],
            preferred_workouts: vec![],
        }
    }

    fn login(session: &SessionState, storage: &MemoryStorage, id: Identity) {
        let generation = session.begin_auth();
        assert!(session.commit_auth(generation, "tok-123".to_string(), id, storage));
    }

    #[test]
    fn fresh_session_restores_to_ready_unauthenticated() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        assert_eq!(session.status(), SessionStatus::Initializing);

        session.restore(&storage);

        assert_eq!(session.status(), SessionStatus::Ready);
        assert!(!session.is_authenticated());
        assert!(session.invariant_holds());
    }

    #[test]
    fn login_then_restore_round_trips() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);
        login(&session, &storage, identity(true, Role::User));
        assert!(session.invariant_holds());

        // Proceso nuevo con el mismo storage
        let revived = SessionState::new();
        revived.restore(&storage);
        assert!(revived.is_authenticated());
        assert_eq!(revived.token(), Some("tok-123".to_string()));
        assert_eq!(revived.identity().unwrap().email, "a@b.com");
        assert!(revived.invariant_holds());
    }

    #[test]
    fn partial_persisted_state_is_cleared_on_restore() {
        let storage = MemoryStorage::new();
        // Solo token, sin identidad: par inválido
        storage.set(TOKEN_STORAGE_KEY, "tok-stale").unwrap();

        let session = SessionState::new();
        session.restore(&storage);

        assert_eq!(session.status(), SessionStatus::Ready);
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), None);
        assert!(session.invariant_holds());
    }

    #[test]
    fn corrupt_identity_json_is_treated_as_no_session() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_STORAGE_KEY, "tok").unwrap();
        storage.set(IDENTITY_STORAGE_KEY, "{corrupt").unwrap();

        let session = SessionState::new();
        session.restore(&storage);

        assert!(!session.is_authenticated());
        assert_eq!(storage.get(IDENTITY_STORAGE_KEY), None);
        assert!(session.invariant_holds());
    }

    #[test]
    fn logout_is_idempotent() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);
        login(&session, &storage, identity(true, Role::User));

        session.logout(&storage);
        let after_once = session.snapshot();
        session.logout(&storage);
        let after_twice = session.snapshot();

        assert_eq!(after_once, after_twice);
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), None);
        assert_eq!(storage.get(IDENTITY_STORAGE_KEY), None);
        assert!(session.invariant_holds());
    }

    #[test]
    fn stale_login_after_logout_is_dropped() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);

        // Login en vuelo...
        let generation = session.begin_auth();
        // ...el usuario hace logout antes de que responda
        session.logout(&storage);

        let applied = session.commit_auth(
            generation,
            "tok-late".to_string(),
            identity(true, Role::User),
            &storage,
        );

        assert!(!applied);
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(TOKEN_STORAGE_KEY), None);
        assert!(session.invariant_holds());
    }

    #[test]
    fn newest_auth_call_wins_over_older_one() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);

        let first = session.begin_auth();
        let second = session.begin_auth();

        // La respuesta vieja llega tarde y se descarta
        assert!(!session.commit_auth(first, "tok-old".to_string(), identity(true, Role::User), &storage));
        assert!(session.commit_auth(second, "tok-new".to_string(), identity(true, Role::User), &storage));
        assert_eq!(session.token(), Some("tok-new".to_string()));
    }

    #[test]
    fn update_identity_merges_and_keeps_token() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);
        login(&session, &storage, identity(false, Role::User));
        assert!(!session.is_profile_complete());

        let patch = IdentityPatch {
            profile_completed: Some(true),
            weight: Some(70.0),
            ..Default::default()
        };
        session.update_identity(&patch, &storage);

        assert!(session.is_profile_complete());
        assert_eq!(session.token(), Some("tok-123".to_string()));

        // El merge quedó persistido
        let revived = SessionState::new();
        revived.restore(&storage);
        assert!(revived.is_profile_complete());
        assert_eq!(revived.identity().unwrap().weight, Some(70.0));
    }

    #[test]
    fn update_identity_without_session_is_a_noop() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);

        session.update_identity(
            &IdentityPatch { profile_completed: Some(true), ..Default::default() },
            &storage,
        );

        assert!(!session.is_authenticated());
        assert_eq!(storage.get(IDENTITY_STORAGE_KEY), None);
        assert!(session.invariant_holds());
    }

    #[test]
    fn admin_role_is_reflected_in_snapshot() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);
        login(&session, &storage, identity(true, Role::Admin));

        let snapshot = session.snapshot();
        assert!(snapshot.authenticated);
        assert!(snapshot.admin);
        assert!(snapshot.profile_complete);
    }

    #[test]
    fn subscribers_are_notified_on_transitions() {
        let storage = MemoryStorage::new();
        let session = SessionState::new();
        let fired = Rc::new(RefCell::new(0));
        {
            let fired = fired.clone();
            session.subscribe(move || *fired.borrow_mut() += 1);
        }

        session.restore(&storage);
        login(&session, &storage, identity(true, Role::User));
        session.logout(&storage);

        // restore + commit_auth + logout
        assert_eq!(*fired.borrow(), 3);
    }
}
