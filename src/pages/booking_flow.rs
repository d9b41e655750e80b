//! Booking Flow Page
//!
//! Renders the wizard one step at a time and submits the finished draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ServiceCard, StepProgress};
use crate::context::use_app_context;
use crate::models::Service;
use crate::notify::use_notifier;
use crate::route::Route;
use crate::session::use_session;
use crate::store::{load_services_once, use_app_store, AppStateStoreFields};
use crate::wizard::{BackTarget, BookingWizard, DraftField, WizardStep, SUBMIT_FALLBACK};

/// Text input bound to one draft field
#[component]
fn DraftInput(
    wizard: RwSignal<BookingWizard>,
    field: DraftField,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] min: Option<String>,
) -> impl IntoView {
    let id = format!("{:?}", field).to_lowercase();
    let test_id = format!("booking-{}-input", id);
    view! {
        <div class="form-field">
            <label for=id.clone()>{label}</label>
            <input
                id=id
                data-testid=test_id
                type=input_type
                placeholder=placeholder
                min=min
                prop:value=move || wizard.with(|w| w.field(field))
                on:input=move |ev| wizard.update(|w| w.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SummaryRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="summary-row">
            <div class="summary-label">{label}</div>
            <div class="summary-value">{value}</div>
        </div>
    }
}

#[component]
pub fn BookingFlowPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let notifier = use_notifier();
    let store = use_app_store();
    load_services_once(store, session, notifier);

    let wizard = RwSignal::new(BookingWizard::new());
    let (submitting, set_submitting) = signal(false);
    // memoized so typing into a field doesn't re-render the step
    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let percent = Memo::new(move |_| wizard.with(|w| w.progress_percent()));

    let on_back = move |_| {
        let mut target = BackTarget::ExitToDashboard;
        wizard.update(|w| target = w.back());
        if target == BackTarget::ExitToDashboard {
            ctx.navigate(Route::Dashboard);
        }
    };

    let on_select = Callback::new(move |service: Service| {
        wizard.update(|w| w.select_service(&service));
    });

    let on_next = move |_| {
        let mut result = Ok(WizardStep::SelectService);
        wizard.update(|w| result = w.advance());
        if let Err(e) = result {
            notifier.error(e.to_string());
        }
    };

    let on_submit = move |_| {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        spawn_local(async move {
            let mut working = wizard.get_untracked();
            let result = working.submit(&session.gateway()).await;
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    wizard.set(working);
                    notifier.success("Booking confirmed successfully!");
                    ctx.navigate(Route::Dashboard);
                }
                Err(e) => notifier.error(e.user_message(SUBMIT_FALLBACK)),
            }
        });
    };

    let select_step = move || view! {
        <div class="wizard-step">
            <h2>"Select a Service"</h2>
            <p class="muted">"Choose the cleaning service that fits your needs"</p>
            <div class="service-grid">
                <For
                    each=move || store.services().get()
                    key=|service| service.id.clone()
                    children=move |service| view! { <ServiceCard service=service on_select=on_select /> }
                />
            </div>
        </div>
    };

    let date_time_step = move || {
        let today = crate::dashboard::today().format("%Y-%m-%d").to_string();
        view! {
            <div class="wizard-step">
                <h2>"Select Date & Time"</h2>
                <p class="muted">"Choose when you'd like your cleaning service"</p>
                <DraftInput wizard=wizard field=DraftField::Date label="Date" input_type="date" min=today />
                <DraftInput wizard=wizard field=DraftField::Time label="Time" input_type="time" />
                <button class="btn primary" data-testid="booking-next-btn-1" on:click=on_next>"Continue"</button>
            </div>
        }
    };

    let details_step = move || view! {
        <div class="wizard-step">
            <h2>"Your Details"</h2>
            <p class="muted">"Provide your contact information and address"</p>
            <DraftInput wizard=wizard field=DraftField::Address label="Address" input_type="text" placeholder="123 Main St, City, State, ZIP" />
            <DraftInput wizard=wizard field=DraftField::Phone label="Phone" input_type="tel" placeholder="(555) 123-4567" />
            <div class="form-field">
                <label for="notes">"Additional Notes (Optional)"</label>
                <textarea
                    id="notes"
                    data-testid="booking-notes-input"
                    rows="4"
                    placeholder="Any specific instructions or areas to focus on..."
                    prop:value=move || wizard.with(|w| w.field(DraftField::Notes))
                    on:input=move |ev| wizard.update(|w| w.set_field(DraftField::Notes, event_target_value(&ev)))
                ></textarea>
            </div>
            <button class="btn primary" data-testid="booking-next-btn-2" on:click=on_next>"Continue"</button>
        </div>
    };

    let confirm_step = move || {
        let w = wizard.get_untracked();
        let draft = w.draft().clone();
        let price = w.service_price().map(|p| format!("${:.2}", p)).unwrap_or_default();
        view! {
            <div class="wizard-step">
                <h2>"Confirm Your Booking"</h2>
                <p class="muted">"Please review your booking details"</p>
                <div class="summary">
                    <SummaryRow label="Service" value=format!("{} {}", draft.service_name, price) />
                    <SummaryRow label="Date & Time" value=format!("{} {}", draft.booking_date, draft.booking_time) />
                    <SummaryRow label="Location" value=draft.address.clone() />
                    <SummaryRow label="Contact" value=draft.phone.clone() />
                    {draft.notes.clone().map(|notes| view! { <SummaryRow label="Notes" value=notes /> })}
                </div>
                <button
                    class="btn primary wide"
                    data-testid="booking-confirm-btn"
                    disabled=move || submitting.get()
                    on:click=on_submit
                >
                    {move || if submitting.get() { "Confirming..." } else { "Confirm Booking" }}
                </button>
            </div>
        }
    };

    view! {
        <div class="booking-flow">
            <button class="btn ghost" data-testid="booking-back-btn" on:click=on_back>"← Back"</button>
            <div class="wizard-card">
                <StepProgress current=step percent=percent />
                {move || match step.get() {
                    WizardStep::SelectService => select_step().into_any(),
                    WizardStep::DateTime => date_time_step().into_any(),
                    WizardStep::Details => details_step().into_any(),
                    WizardStep::Confirm => confirm_step().into_any(),
                }}
            </div>
        </div>
    }
}
