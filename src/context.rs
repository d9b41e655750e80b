//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

use crate::route::{guard, Route};
use crate::session::SessionContext;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Route requested by the user - read
    pub route: ReadSignal<Route>,
    /// Route requested by the user - write
    set_route: WriteSignal<Route>,
    session: SessionContext,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), session: SessionContext) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session,
        }
    }

    /// Route after the access guard, i.e. the view to render
    pub fn current_view(&self) -> Route {
        let requested = self.route.get();
        let user = self.session.user();
        guard(requested, user.as_ref())
    }

    /// Go to a view; the guard is applied when rendering
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate to {:?}", route);
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
