use dioxus::prelude::*;

use crate::t;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("YouTube", "https://youtube.com"),
];

/// Page footer. The newsletter form is presentational; nothing is submitted.
#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { id: "contact", class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__mark", aria_hidden: "true", "ॐ" }
                    span { class: "footer__name", {t!("brand-name")} }
                }

                div { class: "footer__social",
                    h4 { {t!("footer-follow-us")} }
                    ul {
                        for (name, href) in SOCIAL_LINKS {
                            li { key: "{name}",
                                a { href, target: "_blank", rel: "noopener noreferrer", "{name}" }
                            }
                        }
                    }
                }

                form {
                    class: "footer__newsletter",
                    onsubmit: move |evt| evt.prevent_default(),
                    label { r#for: "newsletter-email", {t!("footer-newsletter")} }
                    input {
                        id: "newsletter-email",
                        r#type: "email",
                        placeholder: t!("footer-email-placeholder"),
                    }
                    button { r#type: "submit", class: "button button--primary", {t!("footer-subscribe")} }
                }
            }
            p { class: "footer__copyright", {t!("footer-copyright")} }
        }
    }
}
