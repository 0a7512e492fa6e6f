#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::Navigation;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    init_tracing();
    tracing::info!("starting swamiji desktop");
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Swami Ji – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_tracing();
    LaunchBuilder::server().launch(App);
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("swamiji_desktop=info,ui=info"));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        eprintln!("tracing subscriber already installed");
    }
}

#[component]
fn App() -> Element {
    let language = ui::context::use_site_context();
    let title = ui::i18n::lookup("page-title").unwrap_or_default();
    let description = ui::i18n::lookup("page-description").unwrap_or_default();

    // Remount the routed tree when the language changes.
    let routed = rsx! {
        div { key: "{language().tag()}", lang: language().tag(),
            Router::<Route> { }
        }
    };

    rsx! {
        // Always inline the theme; packaged builds ship no stylesheet files.
        document::Style { "{THEME_CSS_INLINE}" }
        document::Title { "{title}" }
        document::Meta { name: "description", content: description }

        {routed}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: shared navigation above the routed page.
#[component]
fn DesktopLayout() -> Element {
    rsx! {
        Navigation {}
        Outlet::<Route> {}
    }
}
