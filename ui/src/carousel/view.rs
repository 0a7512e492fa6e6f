use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use thiserror::Error;

use crate::core::{platform, timing};
use crate::t;

use super::deck::{DeckError, Slide, SlideDeck};
use super::engine::{
    RevealTicket, RotationConfig, RotationError, SlideRotation, TickOutcome, COUNTDOWN_PERIOD_MS,
};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Why the hero could not be built. Fatal for the section; the rest of the
/// page still renders.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeroError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Rotation(#[from] RotationError),
}

/// Validate the localized slide table and build a controller for it.
pub fn prepare_carousel(config: RotationConfig) -> Result<(SlideDeck, SlideRotation), HeroError> {
    let deck = SlideDeck::localized()?;
    let rotation = SlideRotation::new(deck.len(), config)?;
    Ok((deck, rotation))
}

#[component]
pub fn HeroSection() -> Element {
    let language = crate::context::use_language();

    match prepare_carousel(RotationConfig::default()) {
        Ok((deck, rotation)) => rsx! {
            // Remount per language so the controller restarts on the new table.
            HeroCarousel { key: "{language.tag()}", deck, rotation }
        },
        Err(err) => {
            tracing::error!("hero carousel disabled: {err}");
            rsx! {
                document::Link { rel: "stylesheet", href: HERO_CSS }
                section { id: "home", class: "hero hero--error", role: "alert",
                    h1 { class: "hero__title", {t!("hero-error-title")} }
                    p { class: "hero__description",
                        {t!("hero-error-body", reason = err.to_string())}
                    }
                }
            }
        }
    }
}

#[component]
pub fn HeroCarousel(deck: SlideDeck, rotation: SlideRotation) -> Element {
    let mut rotation = use_signal(move || rotation);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<CarouselEvent>>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    let timers: Rc<RefCell<TimerHandles>> = use_hook(|| Rc::new(RefCell::new(TimerHandles::default())));

    let coroutine = {
        let sender_slot = sender_slot.clone();
        let timers = timers.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<CarouselEvent>| {
            let sender_slot = sender_slot.clone();
            let timers = timers.clone();
            let mut rotation_signal = rotation;

            async move {
                while let Some(event) = rx.next().await {
                    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
                        continue;
                    };

                    match event {
                        CarouselEvent::Start => {
                            let started = rotation_signal.with_mut(|r| r.start());
                            if let Some(session) = started {
                                let period_ms = rotation_signal.peek().config.rotation_period_ms();
                                let rotate = repeat_every(
                                    sender.clone(),
                                    period_ms,
                                    CarouselEvent::Rotate { session },
                                );
                                let countdown = repeat_every(
                                    sender,
                                    COUNTDOWN_PERIOD_MS,
                                    CarouselEvent::Countdown { session },
                                );
                                timers.borrow_mut().replace_periodic(rotate, countdown);
                            }
                        }
                        CarouselEvent::Rotate { session } => {
                            let outcome = rotation_signal.with_mut(|r| r.on_rotation_tick(session));
                            if let TickOutcome::Advanced { .. } = outcome {
                                timers.borrow_mut().cancel_reveal();
                            }
                        }
                        CarouselEvent::Countdown { session } => {
                            rotation_signal.with_mut(|r| r.on_countdown_tick(session));
                        }
                        CarouselEvent::ImageSettled { epoch, failed } => {
                            if failed {
                                // Revealing anyway keeps the text readable without the picture.
                                tracing::warn!(epoch, "hero image failed to load");
                            }
                            let ticket = rotation_signal.with_mut(|r| r.on_image_loaded(epoch));
                            if let Some(ticket) = ticket {
                                let task = fire_after(
                                    sender,
                                    ticket.delay_ms,
                                    CarouselEvent::RevealDue(ticket),
                                );
                                timers.borrow_mut().arm_reveal(task);
                            }
                        }
                        CarouselEvent::RevealDue(ticket) => {
                            if rotation_signal.with_mut(|r| r.on_reveal_due(ticket)) {
                                timers.borrow_mut().reveal = None;
                            }
                        }
                        CarouselEvent::Select(index) => {
                            match rotation_signal.with_mut(|r| r.select_slide(index)) {
                                Ok(()) => timers.borrow_mut().cancel_reveal(),
                                Err(err) => tracing::warn!("ignoring slide selection: {err}"),
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());
    use_hook(move || coroutine.send(CarouselEvent::Start));

    {
        let timers = timers.clone();
        use_drop(move || {
            timers.borrow_mut().cancel_all();
            if let Ok(mut controller) = rotation.try_write() {
                controller.stop();
            }
        });
    }

    let (state, epoch) = {
        let controller = rotation.read();
        (controller.state(), controller.epoch())
    };
    let Some(slide) = deck.get(state.active_index).cloned() else {
        return rsx! {};
    };

    // Keyed so the value animates in again each second.
    let countdown = state.countdown_secs;
    let countdown_value = rsx! {
        span { key: "{countdown}", class: "hero__countdown-value", "{countdown}" }
    };

    // Template root, so the key remounts the slide on every change and a
    // load event always belongs to the slide that raised it.
    let slide_view = rsx! {
        HeroSlide {
            key: "{epoch}",
            slide,
            image_loaded: state.image_loaded,
            content_visible: state.content_visible,
            on_settled: move |failed: bool| coroutine.send(CarouselEvent::ImageSettled { epoch, failed }),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section { id: "home", class: "hero",
            div { class: "hero__backdrop" }
            div { class: "hero__om", aria_hidden: "true", "ॐ" }

            {slide_view}

            div { class: "hero__indicators",
                for index in 0..deck.len() {
                    button {
                        key: "{index}",
                        r#type: "button",
                        class: if index == state.active_index { "hero__dot hero__dot--active" } else { "hero__dot" },
                        aria_label: t!("hero-show-slide", number = (index + 1)),
                        onclick: move |_| coroutine.send(CarouselEvent::Select(index)),
                    }
                }
            }

            if state.content_visible {
                div { class: "hero__countdown",
                    p { class: "hero__countdown-label", {t!("hero-next-slide")} }
                    {countdown_value}
                }
            }
        }
    }
}

/// Image and content classes for the reveal flags.
fn slide_classes(image_loaded: bool, content_visible: bool) -> (&'static str, &'static str) {
    let image = if image_loaded {
        "hero__image hero__image--loaded"
    } else {
        "hero__image hero__image--loading"
    };
    let content = if content_visible {
        "hero__content hero__content--visible"
    } else {
        "hero__content"
    };
    (image, content)
}

/// One slide's picture and text. `on_settled` reports whether the image
/// failed.
#[component]
fn HeroSlide(
    slide: Slide,
    image_loaded: bool,
    content_visible: bool,
    on_settled: EventHandler<bool>,
) -> Element {
    let (image_class, content_class) = slide_classes(image_loaded, content_visible);

    rsx! {
        div { class: "hero__stage",
            img {
                class: image_class,
                src: "{slide.image}",
                alt: "{slide.title}",
                onload: move |_| on_settled.call(false),
                onerror: move |_| on_settled.call(true),
            }
            div { class: "hero__shade" }
        }

        div { class: content_class,
            div { class: "hero__symbol", "ॐ" }
            h1 { class: "hero__title", "{slide.title}" }
            p { class: "hero__subtitle", "{slide.subtitle}" }
            p { class: "hero__description", "{slide.description}" }
            div { class: "hero__divider" }
            a { class: "button button--primary hero__cta", href: "#about", {t!("hero-cta")} }
        }
    }
}

/// Cancellation handles for the three timer sources.
#[derive(Default)]
struct TimerHandles {
    rotation: Option<Task>,
    countdown: Option<Task>,
    reveal: Option<Task>,
}

impl TimerHandles {
    fn replace_periodic(&mut self, rotation: Task, countdown: Task) {
        self.cancel_periodic();
        self.rotation = Some(rotation);
        self.countdown = Some(countdown);
    }

    fn arm_reveal(&mut self, task: Task) {
        self.cancel_reveal();
        self.reveal = Some(task);
    }

    fn cancel_periodic(&mut self) {
        for task in [self.rotation.take(), self.countdown.take()].into_iter().flatten() {
            task.cancel();
        }
    }

    fn cancel_reveal(&mut self) {
        if let Some(task) = self.reveal.take() {
            task.cancel();
        }
    }

    fn cancel_all(&mut self) {
        self.cancel_periodic();
        self.cancel_reveal();
    }
}

fn repeat_every(sender: UnboundedSender<CarouselEvent>, period_ms: u64, event: CarouselEvent) -> Task {
    platform::spawn_future(async move {
        loop {
            timing::sleep_ms(period_ms).await;
            if sender.unbounded_send(event.clone()).is_err() {
                break;
            }
        }
    })
}

fn fire_after(sender: UnboundedSender<CarouselEvent>, delay_ms: u64, event: CarouselEvent) -> Task {
    platform::spawn_future(async move {
        timing::sleep_ms(delay_ms).await;
        let _ = sender.unbounded_send(event);
    })
}

#[derive(Debug, Clone)]
enum CarouselEvent {
    Start,
    Rotate { session: u64 },
    Countdown { session: u64 },
    ImageSettled { epoch: u64, failed: bool },
    RevealDue(RevealTicket),
    Select(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_slide_renders_hidden_until_revealed() {
        let mut rotation = SlideRotation::new(6, RotationConfig::default()).unwrap();
        rotation.start().unwrap();
        let stale = rotation.epoch();
        rotation.select_slide(3).unwrap();

        let state = rotation.state();
        assert_eq!(
            slide_classes(state.image_loaded, state.content_visible),
            ("hero__image hero__image--loading", "hero__content")
        );

        // The replaced slide's load cannot light up the new one.
        assert_eq!(rotation.on_image_loaded(stale), None);
        let ticket = rotation.on_image_loaded(rotation.epoch()).unwrap();
        assert!(rotation.on_reveal_due(ticket));

        let state = rotation.state();
        assert_eq!(
            slide_classes(state.image_loaded, state.content_visible),
            ("hero__image hero__image--loaded", "hero__content hero__content--visible")
        );
    }
}
