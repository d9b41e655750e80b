//! Landing Page
//!
//! Marketing page: navigation, hero, services grid, how-it-works, footer.

use leptos::prelude::*;

use crate::components::ServiceCard;
use crate::context::use_app_context;
use crate::notify::use_notifier;
use crate::route::Route;
use crate::session::use_session;
use crate::store::{load_services_once, use_app_store, AppStateStoreFields};

const HOW_IT_WORKS: &[(&str, &str)] = &[
    ("Choose a service", "Pick the cleaning package that fits your home or office."),
    ("Pick a time", "Select a date and time that works for you."),
    ("Relax", "Our vetted professionals take care of the rest."),
];

#[component]
fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        if session.is_signed_in() {
            view! {
                <button class="btn ghost" data-testid="nav-dashboard-btn" on:click=move |_| ctx.navigate(Route::Dashboard)>
                    "Dashboard"
                </button>
                <button class="btn primary" data-testid="nav-book-btn" on:click=move |_| ctx.navigate(Route::Book)>
                    "Book Now"
                </button>
            }
            .into_any()
        } else {
            view! {
                <button class="btn ghost" data-testid="nav-login-btn" on:click=move |_| ctx.navigate(Route::Login)>
                    "Login"
                </button>
                <button class="btn primary" data-testid="nav-register-btn" on:click=move |_| ctx.navigate(Route::Register)>
                    "Get Started"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <nav class="landing-nav">
            <div class="brand">"CleanSpace"</div>
            <div class="nav-links">
                <a href="#services">"Services"</a>
                <a href="#how-it-works">"How it Works"</a>
                {links}
            </div>
            <button
                class="mobile-menu-btn"
                data-testid="mobile-menu-btn"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <a href="#services">"Services"</a>
                    <a href="#how-it-works">"How it Works"</a>
                    {links}
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let store = use_app_store();
    load_services_once(store, session, use_notifier());

    let start_booking = move |_| {
        let target = if session.is_signed_in() { Route::Book } else { Route::Register };
        ctx.navigate(target);
    };

    view! {
        <div class="landing">
            <NavBar />

            <section class="hero">
                <h1>"A spotless home, without lifting a finger"</h1>
                <p>"Professional cleaning services booked in minutes."</p>
                <button class="btn primary" data-testid="hero-book-btn" on:click=start_booking>
                    "Book a Cleaning"
                </button>
            </section>

            <section id="services" class="services-section">
                <h2>"Our Services"</h2>
                <div class="service-grid">
                    <For
                        each=move || store.services().get()
                        key=|service| service.id.clone()
                        children=move |service| view! { <ServiceCard service=service /> }
                    />
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2>"How it Works"</h2>
                <div class="how-grid">
                    {HOW_IT_WORKS.iter().enumerate().map(|(i, (title, body))| view! {
                        <div class="how-step">
                            <div class="how-number">{i + 1}</div>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <footer class="landing-footer">"© CleanSpace"</footer>
        </div>
    }
}
