use api::Language;
use dioxus::prelude::*;

use crate::context::{switch_language, use_language, use_ui_state};
use crate::core::{platform, timing};
use crate::t;

// Navbar stylesheet, also inlined for release native builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// How often the scroll offset is sampled.
const SCROLL_POLL_MS: u64 = 100;

/// In-page anchors: (section id, message key).
const SECTIONS: [(&str, &str); 6] = [
    ("home", "nav-home"),
    ("about", "nav-about"),
    ("teachings", "nav-teachings"),
    ("quotes", "nav-quotes"),
    ("events", "nav-events"),
    ("contact", "nav-contact"),
];

fn section_label(key: &str) -> String {
    crate::i18n::lookup(key).unwrap_or_else(|| key.to_string())
}

/// Label of the toggle: the language a click switches to.
fn toggle_label(current: Language) -> &'static str {
    match current.toggled() {
        Language::En => "EN",
        Language::Hi => "हिंदी",
    }
}

#[component]
pub fn Navigation() -> Element {
    let language = use_language();
    let ui = use_ui_state();

    // Poll instead of listening: the same code path serves web and native,
    // and native simply never reports metrics.
    use_future(move || async move {
        let Some(mut ui) = ui else {
            return;
        };
        loop {
            if let Some(metrics) = platform::scroll_metrics() {
                let mut next = ui.peek().clone();
                if next.observe_scroll(metrics.offset, metrics.max) {
                    ui.set(next);
                }
            } else if platform::Platform::current() == platform::Platform::Native {
                break;
            }
            timing::sleep_ms(SCROLL_POLL_MS).await;
        }
    });

    let state = ui.map(|ui| ui()).unwrap_or_default();
    let header_class = if state.is_scrolled {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let links_class = if state.mobile_menu_open {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: header_class,
            div {
                class: "navbar__progress",
                style: "transform: scaleX({state.scroll_progress})",
            }
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-mark", aria_hidden: "true", "ॐ" }
                    span { class: "navbar__brand-name", {t!("brand-name")} }
                }

                nav { class: links_class,
                    for (id, key) in SECTIONS {
                        a {
                            key: "{id}",
                            class: if state.active_section == id { "navbar__link navbar__link--active" } else { "navbar__link" },
                            href: "#{id}",
                            onclick: move |_| {
                                if let Some(mut ui) = ui {
                                    ui.with_mut(|ui| {
                                        ui.set_active_section(id);
                                        ui.close_mobile_menu();
                                    });
                                }
                            },
                            {section_label(key)}
                        }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        lang: language.toggled().tag(),
                        title: t!("nav-language-label"),
                        onclick: move |_| switch_language(language.toggled()),
                        {toggle_label(language)}
                    }
                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_label: t!("nav-menu-toggle"),
                        aria_expanded: "{state.mobile_menu_open}",
                        onclick: move |_| {
                            if let Some(mut ui) = ui {
                                ui.with_mut(|ui| ui.toggle_mobile_menu());
                            }
                        },
                        span { class: "navbar__menu-bar" }
                        span { class: "navbar__menu-bar" }
                        span { class: "navbar__menu-bar" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_names_the_other_language() {
        assert_eq!(toggle_label(Language::En), "हिंदी");
        assert_eq!(toggle_label(Language::Hi), "EN");
    }

    #[test]
    fn every_anchor_has_a_message() {
        for (id, key) in SECTIONS {
            assert!(crate::i18n::lookup(key).is_some(), "{id} has no label");
        }
    }
}
