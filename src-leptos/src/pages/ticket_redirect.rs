//! Legacy ticket link redirect
//!
//! `/support/ticket/:ticketId` forwards to the ticket list with the ticket
//! opened, replacing the history entry so Back skips this page.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

pub const TICKET_LIST_PATH: &str = "/support/tickets";

/// Destination for a ticket id taken from the route.
///
/// Whitespace-only ids count as absent; any other id is kept verbatim and
/// percent-encoded as a URI component (space -> `%20`).
pub fn redirect_target(ticket_id: Option<&str>) -> String {
    match ticket_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => format!("{}?open={}", TICKET_LIST_PATH, encode_component(id)),
        None => TICKET_LIST_PATH.to_string(),
    }
}

fn encode_component(value: &str) -> String {
    // byte_serialize writes space as '+' and escapes a literal '+' as %2B.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[component]
pub fn TicketRedirect() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    Effect::new(move |redirected: Option<()>| {
        if redirected.is_some() {
            return;
        }
        let ticket_id = params.with_untracked(|p| p.get("ticketId"));
        let target = redirect_target(ticket_id.as_deref());
        log::debug!("Redirecting ticket link to {}", target);
        navigate(
            &target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! {
        <div class="redirect-page">
            <div class="loading-spinner"></div>
            <p class="redirect-page__message">"Opening your ticket..."</p>
        </div>
    }
}
