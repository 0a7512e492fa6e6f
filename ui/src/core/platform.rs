//! Platform glue: task spawning and the few browser APIs the site touches.
//! Native targets get inert fallbacks.

use std::future::Future;

use dioxus::prelude::{spawn, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Spawn a future on the current component scope. Dropping the scope
/// cancels the task; the handle allows cancelling it earlier.
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) -> Task {
    spawn(fut)
}

/// Vertical scroll position of the document and how far it can scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub max: f64,
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let offset = window.scroll_y().ok()?;
    let root = window.document()?.document_element()?;
    let max = f64::from(root.scroll_height() - root.client_height()).max(0.0);
    Some(ScrollMetrics { offset, max })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    None
}

/// Prevent the page behind a modal from scrolling.
#[cfg(target_arch = "wasm32")]
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if result.is_err() {
        tracing::warn!(locked, "could not update body overflow");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_body_scroll_locked(_locked: bool) {}
