use api::Teaching;
use dioxus::prelude::*;

use crate::context::use_language;
use crate::core::{format, platform, timing};
use crate::t;

/// How long the modal's close animation runs before it is removed.
pub const MODAL_CLOSE_MS: u64 = 200;

const EXCERPT_CHARS: usize = 150;

/// Card artwork, cycled by position in the list.
const TEACHING_IMAGES: [&str; 6] = [
    "/images/teachings/meditation.svg",
    "/images/teachings/lotus.svg",
    "/images/teachings/mandala.svg",
    "/images/teachings/enlightenment.svg",
    "/images/teachings/chakra.svg",
    "/images/teachings/peace.svg",
];

fn teaching_image(index: usize) -> &'static str {
    TEACHING_IMAGES[index % TEACHING_IMAGES.len()]
}

fn category_key(category: &str) -> String {
    format!("teachings-category-{category}")
}

/// Localized category name. Categories without a message show as stored.
fn category_label(category: &str) -> String {
    crate::i18n::lookup(&category_key(category)).unwrap_or_else(|| category.to_string())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
    Closing(usize),
}

/// One-shot open/close sequencer for the teaching modal.
///
/// Each close hands out a token; the delayed completion only removes the
/// modal if no open happened in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalSequencer {
    state: ModalState,
    generation: u64,
}

impl ModalSequencer {
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Index of the teaching currently rendered, including while closing.
    pub fn shown(&self) -> Option<usize> {
        match self.state {
            ModalState::Open(index) | ModalState::Closing(index) => Some(index),
            ModalState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.shown().is_some()
    }

    pub fn open(&mut self, index: usize) {
        self.generation += 1;
        self.state = ModalState::Open(index);
    }

    /// Start the close animation. `None` when there is nothing open.
    pub fn begin_close(&mut self) -> Option<u64> {
        match self.state {
            ModalState::Open(index) => {
                self.generation += 1;
                self.state = ModalState::Closing(index);
                Some(self.generation)
            }
            ModalState::Closing(_) | ModalState::Closed => None,
        }
    }

    /// Finish a close started with `token`. Stale tokens are ignored.
    pub fn finish_close(&mut self, token: u64) -> bool {
        match self.state {
            ModalState::Closing(_) if token == self.generation => {
                self.state = ModalState::Closed;
                true
            }
            _ => false,
        }
    }
}

#[component]
pub fn TeachingsSection(teachings: Vec<Teaching>) -> Element {
    let language = use_language();
    let mut modal = use_signal(ModalSequencer::default);

    use_effect(move || platform::set_body_scroll_locked(modal.read().is_open()));
    use_drop(|| platform::set_body_scroll_locked(false));

    let close = move |_: MouseEvent| {
        let Some(token) = modal.write().begin_close() else {
            return;
        };
        platform::spawn_future(async move {
            timing::sleep_ms(MODAL_CLOSE_MS).await;
            if let Ok(mut sequencer) = modal.try_write() {
                sequencer.finish_close(token);
            }
        });
    };

    if teachings.is_empty() {
        return rsx! {};
    }

    let sequencer = modal();
    let shown = sequencer
        .shown()
        .and_then(|index| teachings.get(index).cloned().map(|teaching| (index, teaching)));
    let closing = matches!(sequencer.state(), ModalState::Closing(_));

    rsx! {
        section { id: "teachings", class: "section section--teachings",
            div { class: "section__inner",
                header { class: "section__header",
                    h2 { class: "section__title", {t!("teachings-title")} }
                    p { class: "section__subtitle", {t!("teachings-subtitle")} }
                }

                div { class: "teachings__grid",
                    for (index, teaching) in teachings.iter().enumerate() {
                        article {
                            key: "{teaching.id}",
                            class: "card teaching-card",
                            onclick: move |_| modal.write().open(index),
                            img {
                                class: "teaching-card__image",
                                src: teaching_image(index),
                                alt: "",
                            }
                            span { class: "teaching-card__category", {category_label(&teaching.category)} }
                            h3 { class: "teaching-card__title", "{teaching.title.get(language)}" }
                            p { class: "teaching-card__excerpt",
                                {format::excerpt(teaching.content.get(language), EXCERPT_CHARS)}
                            }
                            button { r#type: "button", class: "teaching-card__more", {t!("teachings-read-more")} }
                        }
                    }
                }
            }

            if let Some((index, teaching)) = shown {
                div {
                    class: if closing { "modal modal--closing" } else { "modal" },
                    role: "dialog",
                    aria_modal: "true",
                    onclick: close,
                    div {
                        class: "modal__panel",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            r#type: "button",
                            class: "modal__close",
                            aria_label: t!("teachings-close"),
                            onclick: close,
                            "×"
                        }
                        img {
                            class: "modal__image",
                            src: teaching_image(index),
                            alt: "{teaching.title.get(language)}",
                        }
                        span { class: "teaching-card__category", {category_label(&teaching.category)} }
                        h3 { class: "modal__title", "{teaching.title.get(language)}" }
                        p { class: "modal__body", "{teaching.content.get(language)}" }
                        p { class: "modal__meta",
                            {format::format_event_date(&teaching.date, language)}
                        }
                    }
                }
            }
        }
    }
}
