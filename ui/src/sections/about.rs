use api::SwamiJi;
use dioxus::prelude::*;

use crate::context::use_language;
use crate::t;

#[component]
pub fn AboutSection(info: SwamiJi) -> Element {
    let language = use_language();

    rsx! {
        section { id: "about", class: "section section--about",
            div { class: "section__inner about",
                div { class: "about__portrait",
                    img { src: "{info.image_url}", alt: "{info.name.get(language)}", loading: "lazy" }
                }
                div { class: "about__body",
                    header { class: "section__header section__header--left",
                        h2 { class: "section__title", {t!("about-title")} }
                        p { class: "section__subtitle", {t!("about-subtitle")} }
                    }
                    h3 { class: "about__name", "{info.name.get(language)}" }
                    p { class: "about__title", "{info.title.get(language)}" }
                    p { class: "about__bio", "{info.bio.get(language)}" }
                }
            }

            if !info.achievements.is_empty() {
                div { class: "section__inner",
                    h3 { class: "about__achievements-title", {t!("about-achievements")} }
                    ul { class: "achievements",
                        for achievement in info.achievements.iter() {
                            li { key: "{achievement.id}", class: "card achievement",
                                span { class: "achievement__year", "{achievement.year}" }
                                h4 { class: "achievement__title", "{achievement.title.get(language)}" }
                                p { class: "achievement__description", "{achievement.description.get(language)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
