//! Slide rotation state machine for the hero carousel.
//!
//! The engine is pure: it never sleeps or spawns. The view drives it from
//! three timer sources (rotation, countdown and the one-shot reveal) and
//! forwards image-load events. Every timer event carries the token it was
//! armed with, a `session` for the periodic triggers and a [`RevealTicket`]
//! for the reveal, so events from a stopped run or an earlier slide fall
//! through as no-ops.

use thiserror::Error;

/// Seconds between automatic slide advances.
pub const DEFAULT_INTERVAL_SECS: u32 = 4;
/// Period of the countdown display trigger.
pub const COUNTDOWN_PERIOD_MS: u64 = 1_000;
/// Grace delay between an image finishing loading and its text appearing.
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationConfig {
    pub interval_secs: u32,
    pub reveal_delay_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}

impl RotationConfig {
    pub fn rotation_period_ms(&self) -> u64 {
        crate::core::timing::secs_to_ms(self.interval_secs)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RotationError {
    #[error("the carousel has no slides to rotate")]
    NoSlides,
    #[error("rotation interval must be at least one second")]
    ZeroInterval,
    #[error("slide {index} is out of range for a deck of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// What the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub active_index: usize,
    pub countdown_secs: u32,
    pub image_loaded: bool,
    pub content_visible: bool,
}

/// Handle for one armed reveal. Only the most recently armed ticket can
/// make content visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub epoch: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced { active_index: usize },
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRotation {
    pub config: RotationConfig,
    slide_count: usize,
    state: RotationState,
    running: bool,
    /// Bumped on every `start`/`stop`; periodic ticks from older sessions are dropped.
    session: u64,
    /// Bumped whenever the active slide changes; image and reveal events are
    /// only honored for the current epoch.
    epoch: u64,
    pending_reveal: Option<RevealTicket>,
}

impl SlideRotation {
    pub fn new(slide_count: usize, config: RotationConfig) -> Result<Self, RotationError> {
        if slide_count == 0 {
            return Err(RotationError::NoSlides);
        }
        if config.interval_secs == 0 {
            return Err(RotationError::ZeroInterval);
        }
        Ok(Self {
            config,
            slide_count,
            state: RotationState {
                active_index: 0,
                countdown_secs: config.interval_secs,
                image_loaded: false,
                content_visible: false,
            },
            running: false,
            session: 0,
            epoch: 0,
            pending_reveal: None,
        })
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pending_reveal(&self) -> Option<RevealTicket> {
        self.pending_reveal
    }

    /// Begin rotating. Returns the session the periodic triggers must carry,
    /// or `None` if already running (the existing triggers stay authoritative).
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.running = true;
        self.session = self.session.wrapping_add(1);
        self.state.countdown_secs = self.config.interval_secs;
        tracing::debug!(session = self.session, slides = self.slide_count, "carousel started");
        Some(self.session)
    }

    /// Stop rotating and drop any armed reveal. Idempotent.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.session = self.session.wrapping_add(1);
        self.pending_reveal = None;
        tracing::debug!(session = self.session, "carousel stopped");
    }

    fn accepts(&self, session: u64) -> bool {
        self.running && session == self.session
    }

    pub fn on_rotation_tick(&mut self, session: u64) -> TickOutcome {
        if !self.accepts(session) {
            tracing::trace!(session, current = self.session, "late rotation tick ignored");
            return TickOutcome::Ignored;
        }
        let next = (self.state.active_index + 1) % self.slide_count;
        self.show(next);
        self.state.countdown_secs = self.config.interval_secs;
        tracing::debug!(active_index = next, "slide advanced");
        TickOutcome::Advanced { active_index: next }
    }

    /// Returns whether the countdown changed.
    ///
    /// At zero the countdown wraps back to the full interval even though no
    /// rotation happened; if the rotation trigger runs late the display can
    /// re-arm out of phase with it.
    pub fn on_countdown_tick(&mut self, session: u64) -> bool {
        if !self.accepts(session) {
            tracing::trace!(session, current = self.session, "late countdown tick ignored");
            return false;
        }
        self.state.countdown_secs = match self.state.countdown_secs {
            0 => self.config.interval_secs,
            secs => secs - 1,
        };
        true
    }

    /// The image of slide `epoch` finished loading. Returns the reveal to
    /// schedule, or `None` when the event is late, stale or a duplicate.
    pub fn on_image_loaded(&mut self, epoch: u64) -> Option<RevealTicket> {
        if !self.running {
            tracing::trace!(epoch, "image load after teardown ignored");
            return None;
        }
        if epoch != self.epoch {
            tracing::trace!(epoch, current = self.epoch, "image load for a previous slide ignored");
            return None;
        }
        if self.state.image_loaded {
            return None;
        }
        self.state.image_loaded = true;
        let ticket = RevealTicket {
            epoch,
            delay_ms: self.config.reveal_delay_ms,
        };
        self.pending_reveal = Some(ticket);
        Some(ticket)
    }

    /// The reveal delay for `ticket` elapsed. Returns whether content became visible.
    pub fn on_reveal_due(&mut self, ticket: RevealTicket) -> bool {
        if !self.running || self.pending_reveal != Some(ticket) {
            tracing::trace!(epoch = ticket.epoch, "stale reveal ignored");
            return false;
        }
        self.pending_reveal = None;
        self.state.content_visible = true;
        true
    }

    /// Jump to `index` (indicator dot). The countdown and the rotation
    /// trigger keep their phase, so the next automatic advance may follow
    /// sooner than a full interval. Selecting the active slide is a no-op.
    pub fn select_slide(&mut self, index: usize) -> Result<(), RotationError> {
        if index >= self.slide_count {
            return Err(RotationError::OutOfRange {
                index,
                len: self.slide_count,
            });
        }
        if index != self.state.active_index {
            self.show(index);
            tracing::debug!(active_index = index, "slide selected");
        }
        Ok(())
    }

    /// Make `index` active and restart the reveal sequence for it.
    fn show(&mut self, index: usize) {
        self.state.active_index = index;
        self.state.image_loaded = false;
        self.state.content_visible = false;
        self.epoch = self.epoch.wrapping_add(1);
        self.pending_reveal = None;
    }
}
