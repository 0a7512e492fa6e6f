use api::MockContentRepository;
use dioxus::prelude::*;

use crate::carousel::HeroSection;
use crate::core::store::{fetch_content, ContentState};
use crate::sections::{AboutSection, EventsSection, QuotesSection, SiteFooter, TeachingsSection};
use crate::t;

#[component]
pub fn Home() -> Element {
    let mut content = use_signal(|| {
        let mut state = ContentState::default();
        state.begin_fetch();
        state
    });

    use_future(move || async move {
        let mut next = content.peek().clone();
        fetch_content(&MockContentRepository::new(), &mut next);
        content.set(next);
    });

    let state = content();

    rsx! {
        main { class: "page page-home",
            HeroSection {}

            if let Some(error) = state.error.clone() {
                div { class: "banner banner--error", role: "alert",
                    p { {t!("content-load-failed", reason = error)} }
                    button {
                        r#type: "button",
                        class: "banner__dismiss",
                        onclick: move |_| content.with_mut(|state| state.clear_error()),
                        {t!("content-dismiss")}
                    }
                }
            }

            if state.loading {
                div { class: "spinner", role: "status",
                    span { class: "spinner__ring", aria_hidden: "true" }
                    span { class: "visually-hidden", {t!("common-loading")} }
                }
            } else {
                if let Some(info) = state.info.clone() {
                    AboutSection { info }
                }
                TeachingsSection { teachings: state.teachings.clone() }
                QuotesSection { quotes: state.quotes.clone() }
                EventsSection { events: state.events.clone() }
            }

            SiteFooter {}
        }
    }
}
