//! Application use cases. Each one forwards to the repository it wraps.

use crate::error::ContentError;
use crate::model::{Event, Quote, SwamiJi, Teaching};
use crate::repository::ContentRepository;

#[derive(Debug, Clone)]
pub struct GetSwamiJiInfo<R> {
    repository: R,
}

impl<R: ContentRepository> GetSwamiJiInfo<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<SwamiJi, ContentError> {
        self.repository.swamiji_info()
    }
}

#[derive(Debug, Clone)]
pub struct GetTeachings<R> {
    repository: R,
}

impl<R: ContentRepository> GetTeachings<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<Vec<Teaching>, ContentError> {
        self.repository.teachings()
    }
}

#[derive(Debug, Clone)]
pub struct GetQuotes<R> {
    repository: R,
}

impl<R: ContentRepository> GetQuotes<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<Vec<Quote>, ContentError> {
        self.repository.quotes()
    }
}

#[derive(Debug, Clone)]
pub struct GetEvents<R> {
    repository: R,
}

impl<R: ContentRepository> GetEvents<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn execute(&self) -> Result<Vec<Event>, ContentError> {
        self.repository.events()
    }
}
