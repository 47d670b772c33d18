//! Main App component with routing

use crate::pages::{Home, TicketRedirect, Tickets};
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <main class="main-content">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/support/tickets") view=Tickets />
                    <Route path=path!("/support/ticket") view=TicketRedirect />
                    <Route path=path!("/support/ticket/:ticketId") view=TicketRedirect />
                </Routes>
            </main>
        </Router>
    }
}
