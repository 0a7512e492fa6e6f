//! Repository port for site content.

use crate::error::ContentError;
use crate::model::{Event, Quote, SwamiJi, Teaching};

/// Source of the profile, teachings, quotes and events shown on the site.
pub trait ContentRepository {
    fn swamiji_info(&self) -> Result<SwamiJi, ContentError>;
    fn teachings(&self) -> Result<Vec<Teaching>, ContentError>;
    fn quotes(&self) -> Result<Vec<Quote>, ContentError>;
    fn events(&self) -> Result<Vec<Event>, ContentError>;
}

impl<R: ContentRepository + ?Sized> ContentRepository for &R {
    fn swamiji_info(&self) -> Result<SwamiJi, ContentError> {
        (**self).swamiji_info()
    }

    fn teachings(&self) -> Result<Vec<Teaching>, ContentError> {
        (**self).teachings()
    }

    fn quotes(&self) -> Result<Vec<Quote>, ContentError> {
        (**self).quotes()
    }

    fn events(&self) -> Result<Vec<Event>, ContentError> {
        (**self).events()
    }
}
