use dioxus::prelude::*;

use ui::components::Navigation;
use ui::views::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileLayout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!("starting swamiji mobile");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let language = ui::context::use_site_context();

    // Remount the routed tree when the language changes.
    let routed = rsx! {
        div { key: "{language().tag()}", lang: language().tag(),
            Router::<Route> {}
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        {routed}
    }
}

/// Mobile layout: shared navigation above the routed page.
#[component]
fn MobileLayout() -> Element {
    rsx! {
        Navigation {}
        Outlet::<Route> {}
    }
}
