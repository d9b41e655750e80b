//! Service Card Component

use leptos::prelude::*;

use crate::models::Service;

/// Catalog entry; clickable when `on_select` is given
#[component]
pub fn ServiceCard(
    service: Service,
    #[prop(optional, into)] on_select: Option<Callback<Service>>,
) -> impl IntoView {
    let test_id = format!("service-option-{}", service.id);
    let price = service.price_label();
    let duration = format!("{} min", service.duration_minutes);
    let selectable = on_select.is_some();
    let picked = service.clone();

    view! {
        <div
            class=if selectable { "service-card selectable" } else { "service-card" }
            data-testid=test_id
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.run(picked.clone());
                }
            }
        >
            <img class="service-image" src=service.image_url.clone() alt=service.name.clone() />
            <h3 class="service-name">{service.name.clone()}</h3>
            <p class="service-description">{service.description.clone()}</p>
            <div class="service-meta">
                <span class="service-price">{price}</span>
                <span class="service-duration">{duration}</span>
            </div>
        </div>
    }
}
