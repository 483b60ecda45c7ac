//! Search column — input field + stats line + results pane.

mod results_pane;
mod search_input;

use dioxus::prelude::*;

use crate::state::SearchContext;
use results_pane::ResultsPane;
use search_input::SearchInput;

/// One full search column. The two columns on screen are identical apart
/// from their context and labels.
#[component]
pub fn SearchColumn(ctx: SearchContext, title: String, placeholder: String) -> Element {
    rsx! {
        div {
            class: "search-column",
            h2 { class: "search-column-title", "{title}" }
            SearchInput { ctx, placeholder }
            ResultsPane { ctx }
        }
    }
}
