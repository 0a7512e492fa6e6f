use dioxus::prelude::*;

use ui::components::Navigation;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting swamiji web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let language = ui::context::use_site_context();
    let title = ui::i18n::lookup("page-title").unwrap_or_default();
    let description = ui::i18n::lookup("page-description").unwrap_or_default();

    // Remount the routed tree when the language changes.
    let routed = rsx! {
        div { key: "{language().tag()}", lang: language().tag(),
            Router::<Route> {}
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "{title}" }
        document::Meta { name: "description", content: description }

        {routed}
    }
}

/// Web layout: shared navigation above the routed page.
#[component]
fn WebLayout() -> Element {
    rsx! {
        Navigation {}
        Outlet::<Route> {}
    }
}
