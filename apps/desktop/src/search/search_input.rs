//! Search input with per-context trailing-edge debounce.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::warn;

use faqscope_core::debounce::SeqToken;
use faqscope_core::render;
use faqscope_http::FaqSearchClient;

use crate::state::SearchContext;

/// Quiet period after the last keystroke before a search fires.
const DEBOUNCE_DELAY: Duration = Duration::from_millis(200);

#[component]
pub fn SearchInput(ctx: SearchContext, placeholder: String) -> Element {
    let client = use_context::<Arc<FaqSearchClient>>();
    let query = ctx.query.read();
    let has_query = !query.trim().is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    oninput: {
                        let client = client.clone();
                        move |e: Event<FormData>| {
                            on_query_changed(ctx, client.clone(), e.value());
                        }
                    },
                }

                // Clear button
                if has_query {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            let mut ctx = ctx;
                            ctx.query.set(String::new());
                            ctx.gate.write().arm();
                            ctx.reset_pane();
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

/// Handle one input event: arm the gate, reset on empty input, otherwise
/// show the loading fragment and schedule the debounced remote search.
fn on_query_changed(mut ctx: SearchContext, client: Arc<FaqSearchClient>, value: String) {
    ctx.query.set(value.clone());

    // Every keystroke starts a new cycle; pending sleeps and in-flight
    // responses from older cycles go stale here.
    let token = ctx.gate.write().arm();

    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        ctx.reset_pane();
        return;
    }

    ctx.pane_html.set(render::loading_fragment());

    spawn(async move {
        tokio::time::sleep(DEBOUNCE_DELAY).await;
        if !ctx.gate.read().is_live(token) {
            return;
        }
        run_remote_search(ctx, client, trimmed, token).await;
    });
}

/// Execute the search and apply the outcome to the pane, unless a newer
/// cycle started while the request was in flight.
async fn run_remote_search(
    mut ctx: SearchContext,
    client: Arc<FaqSearchClient>,
    query: String,
    token: SeqToken,
) {
    let outcome = client.search(ctx.endpoint, &query).await;
    if !ctx.gate.read().is_live(token) {
        return;
    }

    match outcome {
        Ok(hits) => {
            ctx.stats.set(render::stats_line(hits.len()));
            ctx.pane_html.set(render::results_fragment(&hits, &query));
        }
        Err(err) => {
            warn!(error = %err, "search failed");
            ctx.pane_html.set(render::error_fragment(&err.to_string()));
            ctx.stats.set(String::new());
        }
    }
}
