//! Per-pane search state using Dioxus signals.

use dioxus::prelude::*;

use faqscope_core::debounce::SequenceGate;
use faqscope_core::endpoint::SearchEndpoint;
use faqscope_core::render;

/// Everything one search pane owns: its endpoint, the current query text,
/// the rendered pane fragment, the stats line, and the sequence gate that
/// cancels pending debounce cycles and rejects stale responses.
///
/// Two contexts exist, created once at app start and living for the app's
/// lifetime. They share no mutable state; each pane debounces and renders
/// on its own.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchContext {
    pub endpoint: SearchEndpoint,
    pub query: Signal<String>,
    pub pane_html: Signal<String>,
    pub stats: Signal<String>,
    pub gate: Signal<SequenceGate>,
}

impl SearchContext {
    /// Hook-style constructor — call unconditionally during render, once per
    /// pane.
    pub fn use_new(endpoint: SearchEndpoint) -> Self {
        Self {
            endpoint,
            query: use_signal(String::new),
            pane_html: use_signal(render::prompt_fragment),
            stats: use_signal(String::new),
            gate: use_signal(SequenceGate::new),
        }
    }

    /// Reset the pane to its initial placeholder: prompt fragment, empty
    /// stats. Does not touch the query signal.
    pub fn reset_pane(&mut self) {
        self.pane_html.set(render::prompt_fragment());
        self.stats.set(String::new());
    }
}
