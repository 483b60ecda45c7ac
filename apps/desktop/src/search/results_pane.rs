//! Results pane — stats line plus fragment injection.

use dioxus::prelude::*;

use crate::state::SearchContext;

/// Stats line and the rendered fragment for one context. Fragments come from
/// `faqscope_core::render`, which escapes all externally supplied text
/// before it reaches this injection point.
#[component]
pub fn ResultsPane(ctx: SearchContext) -> Element {
    let stats = ctx.stats.read();
    let pane_html = ctx.pane_html.read();

    rsx! {
        div { class: "search-stats", "{stats}" }
        div {
            class: "results-container",
            dangerous_inner_html: "{pane_html}",
        }
    }
}
