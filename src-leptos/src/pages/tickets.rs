//! Support ticket list
//!
//! Placeholder list view; honours the `open` query parameter that ticket
//! redirects append.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

#[component]
pub fn Tickets() -> impl IntoView {
    let query = use_query_map();
    let open_ticket = move || {
        query
            .read()
            .get("open")
            .filter(|id| !id.trim().is_empty())
    };

    view! {
        <Title text="Support tickets" />
        <div class="page tickets">
            <header class="page-header">
                <h1>"Support tickets"</h1>
            </header>
            {move || match open_ticket() {
                Some(id) => view! {
                    <div class="ticket-panel">
                        <h2>{format!("Ticket {}", id)}</h2>
                        <p class="text-muted">"Loading conversation..."</p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <p class="empty-state">"Select a ticket to view its conversation."</p>
                }
                .into_any(),
            }}
        </div>
    }
}
