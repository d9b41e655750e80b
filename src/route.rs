//! Routes
//!
//! Views the app can show and who may see them.

use crate::models::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Login,
    Register,
    /// Customer dashboard
    Dashboard,
    /// Booking wizard
    Book,
    Admin,
}

impl Route {
    pub fn is_public(self) -> bool {
        matches!(self, Route::Landing | Route::Login | Route::Register)
    }
}

/// The route actually shown when `requested` is asked for
pub fn guard(requested: Route, user: Option<&User>) -> Route {
    match (requested, user) {
        (route, _) if route.is_public() => route,
        (_, None) => Route::Login,
        (Route::Admin, Some(user)) if !user.is_admin() => Route::Dashboard,
        (route, Some(_)) => route,
    }
}

/// Landing spot after signing in
pub fn home_for(user: &User) -> Route {
    if user.is_admin() {
        Route::Admin
    } else {
        Route::Dashboard
    }
}
