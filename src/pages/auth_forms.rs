//! Login and Register Pages

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BookingApi;
use crate::context::{use_app_context, AppContext};
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::notify::{use_notifier, Notifier};
use crate::route::{home_for, Route};
use crate::session::{use_session, SessionContext};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";

fn require(value: &str, name: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        Err(ApiError::Validation(format!("{} is required", name)))
    } else {
        Ok(())
    }
}

fn require_email(email: &str) -> ApiResult<()> {
    require(email, "Email")?;
    if email.contains('@') {
        Ok(())
    } else {
        Err(ApiError::Validation("Please enter a valid email address".into()))
    }
}

pub fn validate_login(request: &LoginRequest) -> ApiResult<()> {
    require_email(&request.email)?;
    require(&request.password, "Password")
}

pub fn validate_register(request: &RegisterRequest) -> ApiResult<()> {
    require(&request.name, "Name")?;
    require_email(&request.email)?;
    require(&request.password, "Password")
}

/// Shared tail of both forms: keep the session and move on to the user's home view
fn finish_sign_in(
    ctx: AppContext,
    session: SessionContext,
    notifier: Notifier,
    result: ApiResult<AuthResponse>,
    welcome: &str,
    fallback: &str,
) {
    match result.and_then(|auth| session.sign_in(auth)) {
        Ok(user) => {
            notifier.success(welcome);
            ctx.navigate(home_for(&user));
        }
        Err(e) => notifier.error(e.user_message(fallback)),
    }
}

#[component]
fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let test_id = format!("{}-input", id);
    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                data-testid=test_id
                type=input_type
                required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notifier = use_notifier();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = LoginRequest { email: email.get(), password: password.get() };
        if let Err(e) = validate_login(&request) {
            notifier.error(e.user_message(LOGIN_FALLBACK));
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = session.gateway().login(&request).await;
            set_loading.set(false);
            finish_sign_in(ctx, session, notifier, result, "Welcome back!", LOGIN_FALLBACK);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <button class="link-btn" on:click=move |_| ctx.navigate(Route::Landing)>"← Back to home"</button>
                <h1>"Welcome Back"</h1>
                <p class="muted">"Sign in to your account to continue"</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormField id="login-email" label="Email" input_type="email" placeholder="you@example.com" value=email />
                    <FormField id="login-password" label="Password" input_type="password" placeholder="••••••••" value=password />
                    <button class="btn primary wide" data-testid="login-submit-btn" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <button class="link-btn" on:click=move |_| ctx.navigate(Route::Register)>"Sign up"</button>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notifier = use_notifier();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest { name: name.get(), email: email.get(), password: password.get() };
        if let Err(e) = validate_register(&request) {
            notifier.error(e.user_message(REGISTER_FALLBACK));
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let result = session.gateway().register(&request).await;
            set_loading.set(false);
            finish_sign_in(ctx, session, notifier, result, "Account created successfully!", REGISTER_FALLBACK);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <button class="link-btn" on:click=move |_| ctx.navigate(Route::Landing)>"← Back to home"</button>
                <h1>"Create Account"</h1>
                <p class="muted">"Join us to book your first cleaning service"</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormField id="register-name" label="Full Name" input_type="text" placeholder="Jane Doe" value=name />
                    <FormField id="register-email" label="Email" input_type="email" placeholder="you@example.com" value=email />
                    <FormField id="register-password" label="Password" input_type="password" placeholder="••••••••" value=password />
                    <button class="btn primary wide" data-testid="register-submit-btn" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <button class="link-btn" on:click=move |_| ctx.navigate(Route::Login)>"Sign in"</button>
                </p>
            </div>
        </div>
    }
}
