//! FaqScope Desktop — Dioxus-powered knowledge-base search client.

use dioxus::prelude::*;

mod app;
mod config;
mod search;
mod state;

use app::App;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("faqscope_http=debug".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((10, 10, 10, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("FaqScope")
                            .with_inner_size(LogicalSize::new(1100.0, 760.0))
                            .with_min_inner_size(LogicalSize::new(700.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
