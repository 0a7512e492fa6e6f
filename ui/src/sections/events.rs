use api::Event;
use dioxus::prelude::*;

use crate::context::use_language;
use crate::core::format::format_event_date;
use crate::t;

#[component]
pub fn EventsSection(events: Vec<Event>) -> Element {
    let language = use_language();

    if events.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "events", class: "section section--events",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {t!("events-title")} }
                    p { class: "section__subtitle", {t!("events-subtitle")} }
                }

                div { class: "events__grid",
                    for event in events.iter() {
                        article { key: "{event.id}", class: "card event-card",
                            if let Some(image) = event.image_url.as_ref() {
                                img { class: "event-card__image", src: "{image}", alt: "{event.title.get(language)}", loading: "lazy" }
                            }
                            div { class: "event-card__body",
                                p { class: "event-card__date", {format_event_date(&event.date, language)} }
                                h3 { class: "event-card__title", "{event.title.get(language)}" }
                                p { class: "event-card__location", "{event.location.get(language)}" }
                                p { class: "event-card__description", "{event.description.get(language)}" }
                                a { class: "button button--outline", href: "#contact", {t!("events-register")} }
                            }
                        }
                    }
                }
            }
        }
    }
}
