//! CleanSpace Frontend App
//!
//! Root component: provides the shared contexts and switches between views.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::Toaster;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::Notifier;
use crate::pages::{
    AdminDashboardPage, BookingFlowPage, LandingPage, LoginPage, RegisterPage, UserDashboardPage,
};
use crate::route::Route;
use crate::session::SessionContext;
use crate::store::AppState;

const ACCESS_DENIED: &str = "Access denied";

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();

    // State
    let (route, set_route) = signal(Route::default());
    let session = SessionContext::new(config.api_base_url.clone());
    let notifier = Notifier::new(config.toast_ttl_ms);
    let ctx = AppContext::new((route, set_route), session);

    // Provide context to all children
    provide_context(session);
    provide_context(notifier);
    provide_context(Store::new(AppState::default()));
    provide_context(ctx);

    log::info!("starting against {}", config.api_base_url);
    spawn_local(async move {
        session.restore_from_storage().await;
    });

    // A signed-in customer asking for the admin view is told why they land elsewhere
    Effect::new(move |_| {
        if session.is_restoring() || route.get() != Route::Admin {
            return;
        }
        if let Some(user) = session.user() {
            if !user.is_admin() {
                notifier.error(ACCESS_DENIED);
                ctx.navigate(Route::Dashboard);
            }
        }
    });

    let view_for = move |current: Route| match current {
        Route::Landing => view! { <LandingPage /> }.into_any(),
        Route::Login => view! { <LoginPage /> }.into_any(),
        Route::Register => view! { <RegisterPage /> }.into_any(),
        Route::Dashboard => view! { <UserDashboardPage /> }.into_any(),
        Route::Book => view! { <BookingFlowPage /> }.into_any(),
        Route::Admin => view! { <AdminDashboardPage /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            {move || {
                let requested = route.get();
                if session.is_restoring() && !requested.is_public() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else {
                    view_for(ctx.current_view())
                }
            }}
            <Toaster />
        </div>
    }
}
