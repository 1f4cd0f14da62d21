// ============================================================================
// GUARD - Decisión de acceso por pantalla
// ============================================================================
// Función pura: snapshot de sesión + requisito de pantalla → decisión.
// El orden de los chequeos es fijo; cada condición corta la evaluación.
// ============================================================================

use crate::routing::routes::{Route, ScreenRequirement};
use crate::state::session::{SessionSnapshot, SessionStatus};

/// Resultado de evaluar el acceso a una pantalla
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    /// La sesión aún se está restaurando: mostrar indicador, no redirigir
    Loading,
    /// Renderizar la pantalla pedida
    Render,
    /// Redirigir a otra pantalla (reemplazando la entrada de historial)
    RedirectTo(Route),
}

/// Evaluar el acceso a una pantalla con el requisito dado.
///
/// Orden de chequeo:
///   1. sesión restaurándose        → Loading
///   2. pantalla pública            → Render
///   3. sin autenticar              → redirigir a Login
///   4. solo-admin sin rol admin    → redirigir a Dashboard
///   5. perfil incompleto           → redirigir a CompleteProfile
///   6. todo en orden               → Render
pub fn evaluate(snapshot: &SessionSnapshot, requirement: &ScreenRequirement) -> Decision {
    if snapshot.status == SessionStatus::Initializing {
        return Decision::Loading;
    }
    if !requirement.auth_required {
        return Decision::Render;
    }
    if !snapshot.authenticated {
        return Decision::RedirectTo(Route::Login);
    }
    if requirement.admin_only && !snapshot.admin {
        return Decision::RedirectTo(Route::Dashboard);
    }
    if !requirement.skip_profile_check && !snapshot.profile_complete {
        return Decision::RedirectTo(Route::CompleteProfile);
    }
    Decision::Render
}

/// Resolver la pantalla que finalmente se muestra para una ruta pedida,
/// siguiendo redirecciones hasta estabilizar. Devuelve None mientras la
/// sesión se restaura.
///
/// Termina siempre: cada redirección aterriza en Login (pública),
/// Dashboard (sin admin_only) o CompleteProfile (con skip_profile_check),
/// ninguna de las cuales puede volver a redirigir por la misma causa.
pub fn resolve(snapshot: &SessionSnapshot, requested: Route) -> Option<Route> {
    let mut current = requested;
    loop {
        match evaluate(snapshot, &current.requirement()) {
            Decision::Loading => return None,
            Decision::Render => return Some(current),
            Decision::RedirectTo(next) => {
                log::info!("🔀 [GUARD] {} → {}", current.path(), next.path());
                current = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(authenticated: bool, admin: bool, profile_complete: bool) -> SessionSnapshot {
        SessionSnapshot {
            status: SessionStatus::Ready,
            authenticated,
            admin,
            profile_complete,
        }
    }

    #[test]
    fn initializing_session_never_redirects() {
        let snap = SessionSnapshot {
            status: SessionStatus::Initializing,
            authenticated: false,
            admin: false,
            profile_complete: false,
        };
        // Ni siquiera la pantalla de admin redirige durante la restauración
        assert_eq!(evaluate(&snap, &Route::Admin.requirement()), Decision::Loading);
        assert_eq!(evaluate(&snap, &Route::Login.requirement()), Decision::Loading);
        assert_eq!(resolve(&snap, Route::Dashboard), None);
    }

    #[test]
    fn anonymous_visitor_reaches_public_screens() {
        let snap = snapshot(false, false, false);
        assert_eq!(evaluate(&snap, &Route::Index.requirement()), Decision::Render);
        assert_eq!(evaluate(&snap, &Route::Login.requirement()), Decision::Render);
        assert_eq!(evaluate(&snap, &Route::Register.requirement()), Decision::Render);
    }

    #[test]
    fn anonymous_visitor_is_sent_to_login() {
        let snap = snapshot(false, false, false);
        assert_eq!(
            evaluate(&snap, &Route::Dashboard.requirement()),
            Decision::RedirectTo(Route::Login)
        );
        assert_eq!(resolve(&snap, Route::Workouts), Some(Route::Login));
    }

    #[test]
    fn incomplete_profile_is_sent_to_complete_profile() {
        let snap = snapshot(true, false, false);
        assert_eq!(
            evaluate(&snap, &Route::Dashboard.requirement()),
            Decision::RedirectTo(Route::CompleteProfile)
        );
        // La propia pantalla de completar perfil sí se renderiza
        assert_eq!(
            evaluate(&snap, &Route::CompleteProfile.requirement()),
            Decision::Render
        );
        assert_eq!(resolve(&snap, Route::Challenges), Some(Route::CompleteProfile));
    }

    #[test]
    fn non_admin_is_bounced_from_admin_to_dashboard() {
        let snap = snapshot(true, false, true);
        assert_eq!(
            evaluate(&snap, &Route::Admin.requirement()),
            Decision::RedirectTo(Route::Dashboard)
        );
        assert_eq!(resolve(&snap, Route::Admin), Some(Route::Dashboard));
    }

    #[test]
    fn admin_check_runs_before_profile_check() {
        // Sin rol admin Y con perfil incompleto: gana el chequeo de rol
        let snap = snapshot(true, false, false);
        assert_eq!(
            evaluate(&snap, &Route::Admin.requirement()),
            Decision::RedirectTo(Route::Dashboard)
        );
        // ...y la redirección encadena hasta CompleteProfile
        assert_eq!(resolve(&snap, Route::Admin), Some(Route::CompleteProfile));
    }

    #[test]
    fn admin_with_complete_profile_renders_admin() {
        let snap = snapshot(true, true, true);
        assert_eq!(evaluate(&snap, &Route::Admin.requirement()), Decision::Render);
        assert_eq!(resolve(&snap, Route::Admin), Some(Route::Admin));
    }

    #[test]
    fn regular_member_renders_protected_screens() {
        let snap = snapshot(true, false, true);
        for route in [Route::Dashboard, Route::Workouts, Route::Buddies, Route::Groups] {
            assert_eq!(resolve(&snap, route), Some(route));
        }
    }

    #[test]
    fn completing_profile_unlocks_the_dashboard() {
        use crate::models::user::{Identity, IdentityPatch, Role};
        use crate::state::session::SessionState;
        use crate::utils::storage::MemoryStorage;

        let storage = MemoryStorage::new();
        let session = SessionState::new();
        session.restore(&storage);

        let generation = session.begin_auth();
        let identity = Identity {
            id: "u1".to_string(),
            name: "John Doe".to_string(),
            email: "a@b.com".to_string(),
            role: Role::User,
            profile_completed: false,
            age: None,
            gender: None,
            height: None,
            weight: None,
            target_weight: None,
            location: None,
            fitness_goals: vec![],
            preferred_workouts: vec![],
        };
        assert!(session.commit_auth(generation, "tok".to_string(), identity, &storage));

        // Recién registrado: el dashboard redirige al onboarding
        assert_eq!(
            resolve(&session.snapshot(), Route::Dashboard),
            Some(Route::CompleteProfile)
        );

        session.update_identity(
            &IdentityPatch { profile_completed: Some(true), ..Default::default() },
            &storage,
        );

        // Con el perfil completo la misma ruta ya renderiza
        assert_eq!(resolve(&session.snapshot(), Route::Dashboard), Some(Route::Dashboard));
    }

    #[test]
    fn unknown_route_falls_closed_for_anonymous_visitors() {
        let snap = snapshot(false, false, false);
        assert_eq!(resolve(&snap, Route::NotFound), Some(Route::Login));
    }

    #[test]
    fn resolve_terminates_for_every_state_and_route() {
        let routes = [
            Route::Index,
            Route::Login,
            Route::Register,
            Route::CompleteProfile,
            Route::Dashboard,
            Route::Workouts,
            Route::Buddies,
            Route::Challenges,
            Route::Groups,
            Route::GymFinder,
            Route::Admin,
            Route::NotFound,
        ];
        for authenticated in [false, true] {
            for admin in [false, true] {
                for profile_complete in [false, true] {
                    let snap = snapshot(authenticated, admin, profile_complete);
                    for route in routes {
                        // resolve estabiliza: el destino vuelve a resolver a sí mismo
                        let settled = resolve(&snap, route).unwrap();
                        assert_eq!(resolve(&snap, settled), Some(settled));
                    }
                }
            }
        }
    }
}
