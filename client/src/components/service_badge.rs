//! Platform icon badge.

use leptos::prelude::*;

use crate::net::types::ServiceId;

/// Small square badge tinted with the service accent.
#[component]
pub fn ServiceBadge(service: ServiceId, #[prop(optional)] large: bool) -> impl IntoView {
    let class = format!("service-badge service-badge--{}", service.accent());

    view! {
        <span class=class class:service-badge--large=large title=service.display_name()>
            {service.glyph()}
        </span>
    }
}
