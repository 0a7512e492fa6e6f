//! Landing page sections below the hero.

mod about;
mod events;
mod footer;
pub mod quotes;
pub mod teachings;

pub use about::AboutSection;
pub use events::EventsSection;
pub use footer::SiteFooter;
pub use quotes::QuotesSection;
pub use teachings::{ModalSequencer, ModalState, TeachingsSection, MODAL_CLOSE_MS};
