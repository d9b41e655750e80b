//! Step Progress Component
//!
//! Numbered step indicators plus a progress bar for the booking wizard.

use leptos::prelude::*;

use crate::wizard::WizardStep;

#[component]
pub fn StepProgress(
    #[prop(into)] current: Signal<WizardStep>,
    #[prop(into)] percent: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="step-progress">
            <div class="step-row">
                {WizardStep::ALL.iter().map(|step| {
                    let step = *step;
                    let index = step.index();
                    let reached = move || index <= current.get().index();
                    let done = move || index < current.get().index();
                    view! {
                        <div class="step">
                            <div class=move || if reached() { "step-dot active" } else { "step-dot" }>
                                {move || if done() { "✓".to_string() } else { (index + 1).to_string() }}
                            </div>
                            <div class=move || if reached() { "step-title active" } else { "step-title" }>
                                {step.title()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=move || format!("width: {}%", percent.get())></div>
            </div>
        </div>
    }
}
