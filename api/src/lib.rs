//! Content layer for the Swami Ji site: domain entities, the repository port,
//! the mock repository, use cases and the `/api/swamiji/*` endpoint handlers.

mod error;
pub mod mock;
pub mod model;
pub mod repository;
pub mod routes;
pub mod use_cases;

pub use error::ContentError;
pub use mock::MockContentRepository;
pub use model::{Achievement, Event, Language, Localized, Quote, SwamiJi, Teaching};
pub use repository::ContentRepository;
pub use routes::{ApiResponse, Endpoint, Method};
