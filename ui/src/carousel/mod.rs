//! Hero carousel: slide table, rotation controller and its Dioxus driver.

pub mod deck;
pub mod engine;
mod view;

pub use deck::{DeckError, Slide, SlideDeck, HERO_SLIDE_COUNT};
pub use engine::{RotationConfig, RotationError, RotationState, SlideRotation};
pub use view::{prepare_carousel, HeroCarousel, HeroError, HeroSection};
