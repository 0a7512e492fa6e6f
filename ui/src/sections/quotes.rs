use api::{Language, Quote};
use dioxus::prelude::*;

use crate::context::use_language;
use crate::t;

/// Index after `current`, wrapping to the first quote.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Index before `current`, wrapping to the last quote.
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

fn dot_class(index: usize, active: usize) -> &'static str {
    if index == active {
        "quote__dot quote__dot--active"
    } else {
        "quote__dot"
    }
}

/// Plain-text form of a quote for sharing.
fn share_text(quote: &Quote, language: Language) -> String {
    match quote.context.as_ref() {
        Some(context) => format!("“{}”\n{}", quote.text.get(language), context.get(language)),
        None => format!("“{}”", quote.text.get(language)),
    }
}

/// Script handing `text` to the system share sheet, or the clipboard where
/// sharing is unavailable.
fn share_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "const text = {literal};\n\
         if (navigator.share) {{ navigator.share({{ text }}).catch(() => {{}}); }}\n\
         else if (navigator.clipboard) {{ navigator.clipboard.writeText(text); }}"
    )
}

#[component]
pub fn QuotesSection(quotes: Vec<Quote>) -> Element {
    let language = use_language();
    let mut current = use_signal(|| 0usize);

    let len = quotes.len();
    // The list can shrink underneath a stale index after a refetch.
    let Some(quote) = quotes.get(current() % len.max(1)).cloned() else {
        return rsx! {};
    };
    let active = current() % len;
    let position = active + 1;
    let share = share_text(&quote, language);

    // Keyed so each quote mounts fresh and replays its entrance.
    let quote_view = rsx! {
        figure { key: "{quote.id}", class: "quote",
            blockquote { class: "quote__text", "“{quote.text.get(language)}”" }
            if let Some(context) = quote.context.as_ref() {
                figcaption { class: "quote__context", "{context.get(language)}" }
            }
            button {
                r#type: "button",
                class: "quote__share",
                onclick: move |_| {
                    document::eval(&share_script(&share));
                },
                {t!("quotes-share")}
            }
        }
    };

    rsx! {
        section { id: "quotes", class: "section section--quotes",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {t!("quotes-title")} }
                    p { class: "section__subtitle", {t!("quotes-subtitle")} }
                }

                {quote_view}

                div { class: "quote__controls",
                    button {
                        r#type: "button",
                        class: "quote__nav",
                        aria_label: t!("quotes-previous"),
                        onclick: move |_| current.set(prev_index(current() % len, len)),
                        "‹"
                    }
                    span { class: "quote__position",
                        {t!("quotes-position", current = position, total = len)}
                    }
                    button {
                        r#type: "button",
                        class: "quote__nav",
                        aria_label: t!("quotes-next"),
                        onclick: move |_| current.set(next_index(current() % len, len)),
                        "›"
                    }
                }

                div { class: "quote__dots",
                    for index in 0..len {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: dot_class(index, active),
                            aria_label: t!("quotes-show", number = (index + 1)),
                            onclick: move |_| current.set(index),
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::{ContentRepository, MockContentRepository};

    use super::*;

    #[test]
    fn only_the_current_dot_is_active() {
        let classes: Vec<_> = (0..4).map(|index| dot_class(index, 2)).collect();
        assert_eq!(
            classes,
            ["quote__dot", "quote__dot", "quote__dot quote__dot--active", "quote__dot"]
        );
    }

    #[test]
    fn share_text_follows_the_language() {
        let quotes = MockContentRepository::new().quotes().unwrap();
        let quote = &quotes[0];
        let en = share_text(quote, Language::En);
        let hi = share_text(quote, Language::Hi);
        assert!(en.starts_with(&format!("“{}”", quote.text.en)));
        assert!(hi.starts_with(&format!("“{}”", quote.text.hi)));
        if let Some(context) = quote.context.as_ref() {
            assert!(en.ends_with(&context.en));
        }
    }

    #[test]
    fn share_script_embeds_an_escaped_literal() {
        let script = share_script("say \"om\"\nthen </script>");
        assert!(script.starts_with(r#"const text = "say \"om\"\nthen </script>";"#));
        assert!(script.contains("navigator.share({ text })"));
        assert!(script.contains("navigator.clipboard.writeText(text)"));
    }

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_and_single_lists_stay_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
