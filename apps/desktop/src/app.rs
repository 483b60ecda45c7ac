//! Root application component — two independent search columns.

use std::sync::Arc;

use dioxus::prelude::*;

use faqscope_core::endpoint::SearchEndpoint;
use faqscope_http::{FaqSearchClient, StaticTokenProvider};

use crate::config::AppConfig;
use crate::search::SearchColumn;
use crate::state::SearchContext;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // One client shared by both panes, built from the environment once.
    use_context_provider(|| {
        let config = AppConfig::from_env();
        let tokens = Arc::new(StaticTokenProvider::new(config.api_token.clone()));
        Arc::new(
            FaqSearchClient::new(&config.api_base_url, tokens)
                .expect("FAQSCOPE_API_URL is not a valid URL"),
        )
    });

    let pg = SearchContext::use_new(SearchEndpoint::PgSearch);
    let doc = SearchContext::use_new(SearchEndpoint::DocSearch);

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Titlebar (drag region)
            div {
                class: "titlebar",
                span { class: "titlebar-title", "FaqScope" }
            }

            // Two panes, one per search backend
            div {
                class: "content-area",
                SearchColumn {
                    ctx: pg,
                    title: "Полнотекстовый поиск (PostgreSQL)",
                    placeholder: "Введите ключевое слово...",
                }
                SearchColumn {
                    ctx: doc,
                    title: "Поиск по документам (MongoDB)",
                    placeholder: "Введите запрос...",
                }
            }
        }
    }
}
