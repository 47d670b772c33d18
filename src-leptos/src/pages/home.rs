//! Landing page with headline numbers

use crate::components::AnimatedCounter;
use crate::hooks::use_cursor_tracker;
use leptos::prelude::*;
use leptos_meta::Title;

const HEADLINE_STATS: [(&str, u64); 3] = [
    ("Tickets resolved", 12_345),
    ("Teams supported", 480),
    ("Avg. first reply (min)", 4),
];

#[component]
pub fn Home() -> impl IntoView {
    use_cursor_tracker();

    view! {
        <Title text="Support" />
        <div class="page home">
            <div class="cursor-glow"></div>
            <section class="hero">
                <h1>"How can we help?"</h1>
                <a href="/support/tickets" class="btn btn--primary">"View your tickets"</a>
            </section>
            <section class="stats-row">
                {HEADLINE_STATS
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="stats-card">
                            <div class="stats-card__value">
                                <AnimatedCounter value=value />
                            </div>
                            <div class="stats-card__title">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>
            <footer class="page-footer text-muted">{concat!("v", env!("GIT_VERSION"))}</footer>
        </div>
    }
}
