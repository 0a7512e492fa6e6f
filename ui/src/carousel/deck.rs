//! The hero slide table and its validation.

use std::fmt;

use thiserror::Error;

/// Number of slides the hero carousel publishes.
pub const HERO_SLIDE_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
    /// Opaque asset reference handed to the `img` element.
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideField {
    Title,
    Subtitle,
    Image,
    Description,
}

impl fmt::Display for SlideField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlideField::Title => "title",
            SlideField::Subtitle => "subtitle",
            SlideField::Image => "image",
            SlideField::Description => "description",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("no hero slides are configured")]
    Empty,
    #[error("hero slide {number} has no {field} (message `{key}`)")]
    MissingField {
        number: usize,
        field: SlideField,
        key: &'static str,
    },
}

/// Localization keys of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideKeys {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

macro_rules! slide_keys {
    ($n:literal) => {
        SlideKeys {
            title: concat!("hero-slide-", $n, "-title"),
            subtitle: concat!("hero-slide-", $n, "-subtitle"),
            image: concat!("hero-slide-", $n, "-image"),
            description: concat!("hero-slide-", $n, "-description"),
        }
    };
}

pub const HERO_SLIDE_KEYS: [SlideKeys; HERO_SLIDE_COUNT] = [
    slide_keys!(1),
    slide_keys!(2),
    slide_keys!(3),
    slide_keys!(4),
    slide_keys!(5),
    slide_keys!(6),
];

/// A validated, non-empty list of slides with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Resolve `keys` through `lookup`. Missing or blank messages fail the
    /// whole deck; the carousel never runs on a partial table.
    pub fn from_lookup<F>(keys: &[SlideKeys], lookup: F) -> Result<Self, DeckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if keys.is_empty() {
            return Err(DeckError::Empty);
        }

        let fetch = |number: usize, field: SlideField, key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(DeckError::MissingField { number, field, key })
        };

        let slides = keys
            .iter()
            .enumerate()
            .map(|(index, slide)| {
                let number = index + 1;
                Ok(Slide {
                    title: fetch(number, SlideField::Title, slide.title)?,
                    subtitle: fetch(number, SlideField::Subtitle, slide.subtitle)?,
                    image: fetch(number, SlideField::Image, slide.image)?,
                    description: fetch(number, SlideField::Description, slide.description)?,
                })
            })
            .collect::<Result<Vec<_>, DeckError>>()?;

        Ok(Self { slides })
    }

    /// The hero table in the loader's current language.
    pub fn localized() -> Result<Self, DeckError> {
        Self::from_lookup(&HERO_SLIDE_KEYS, crate::i18n::lookup)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}
