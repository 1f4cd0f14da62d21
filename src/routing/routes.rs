// ============================================================================
// ROUTES - Pantallas de la aplicación y sus requisitos de acceso
// ============================================================================

/// Pantallas navegables de la aplicación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Index,
    Login,
    Register,
    CompleteProfile,
    Dashboard,
    Workouts,
    Buddies,
    Challenges,
    Groups,
    GymFinder,
    Admin,
    NotFound,
}

impl Route {
    /// Resolver un pathname del navegador a una pantalla
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Index,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/complete-profile" => Route::CompleteProfile,
            "/dashboard" => Route::Dashboard,
            "/workouts" => Route::Workouts,
            "/buddies" => Route::Buddies,
            "/challenges" => Route::Challenges,
            "/groups" => Route::Groups,
            "/gym-finder" => Route::GymFinder,
            "/admin" => Route::Admin,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Index => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::CompleteProfile => "/complete-profile",
            Route::Dashboard => "/dashboard",
            Route::Workouts => "/workouts",
            Route::Buddies => "/buddies",
            Route::Challenges => "/challenges",
            Route::Groups => "/groups",
            Route::GymFinder => "/gym-finder",
            Route::Admin => "/admin",
            Route::NotFound => "/404",
        }
    }

    /// Requisitos de acceso de la pantalla
    pub fn requirement(&self) -> ScreenRequirement {
        match self {
            Route::Index | Route::Login | Route::Register => ScreenRequirement::public(),
            Route::CompleteProfile => ScreenRequirement {
                auth_required: true,
                admin_only: false,
                // La pantalla que completa el perfil no puede exigirlo completo
                skip_profile_check: true,
            },
            Route::Admin => ScreenRequirement {
                auth_required: true,
                admin_only: true,
                skip_profile_check: false,
            },
            Route::Dashboard
            | Route::Workouts
            | Route::Buddies
            | Route::Challenges
            | Route::Groups
            | Route::GymFinder => ScreenRequirement::authenticated(),
            // Rutas desconocidas heredan el requisito más restrictivo razonable
            Route::NotFound => ScreenRequirement::authenticated(),
        }
    }
}

/// Requisitos declarativos de acceso a una pantalla
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScreenRequirement {
    pub auth_required: bool,
    pub admin_only: bool,
    pub skip_profile_check: bool,
}

impl ScreenRequirement {
    pub fn public() -> Self {
        Self {
            auth_required: false,
            admin_only: false,
            skip_profile_check: false,
        }
    }

    pub fn authenticated() -> Self {
        Self {
            auth_required: true,
            admin_only: false,
            skip_profile_check: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trips_for_every_screen() {
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
        ];
        for route in routes {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_map_to_not_found() {
        assert_eq!(Route::from_path("/no-such-page"), Route::NotFound);
        assert_eq!(Route::from_path("/admin/secret"), Route::NotFound);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/"), Route::Index);
    }

    #[test]
    fn unknown_routes_require_authentication() {
        // Fallar cerrado: lo desconocido nunca es público
        assert!(Route::NotFound.requirement().auth_required);
    }

    #[test]
    fn admin_screen_requires_both_auth_and_role() {
        let req = Route::Admin.requirement();
        assert!(req.auth_required);
        assert!(req.admin_only);
        assert!(!req.skip_profile_check);
    }

    #[test]
    fn complete_profile_skips_its_own_check() {
        let req = Route::CompleteProfile.requirement();
        assert!(req.auth_required);
        assert!(req.skip_profile_check);
    }
}
