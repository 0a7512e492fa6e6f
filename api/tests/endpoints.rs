use api::routes::{self, STATUS_INTERNAL_ERROR, STATUS_METHOD_NOT_ALLOWED, STATUS_NOT_FOUND};
use api::{
    ContentError, ContentRepository, Endpoint, Event, Method, MockContentRepository, Quote,
    SwamiJi, Teaching,
};

/// Repository whose backing store is always down.
struct BrokenRepository;

impl ContentRepository for BrokenRepository {
    fn swamiji_info(&self) -> Result<SwamiJi, ContentError> {
        Err(ContentError::Unavailable("disk on fire".into()))
    }

    fn teachings(&self) -> Result<Vec<Teaching>, ContentError> {
        Err(ContentError::Unavailable("disk on fire".into()))
    }

    fn quotes(&self) -> Result<Vec<Quote>, ContentError> {
        Err(ContentError::Unavailable("disk on fire".into()))
    }

    fn events(&self) -> Result<Vec<Event>, ContentError> {
        Err(ContentError::Unavailable("events table missing".into()))
    }
}

#[test]
fn get_info_returns_profile_json() {
    let response = routes::handle(&MockContentRepository, Method::Get, Endpoint::Info);
    assert!(response.is_success());
    assert_eq!(response.body["name"]["en"], "Swami Ji Maharaj");
    assert_eq!(response.body["imageUrl"], "/images/swamiji-portrait.svg");
    assert_eq!(response.body["achievements"].as_array().map(Vec::len), Some(2));
}

#[test]
fn list_endpoints_return_arrays() {
    let repo = MockContentRepository::new();
    for (endpoint, expected) in [
        (Endpoint::Teachings, 3),
        (Endpoint::Quotes, 4),
        (Endpoint::Events, 2),
    ] {
        let response = routes::handle(&repo, Method::Get, endpoint);
        assert_eq!(response.status, 200, "{endpoint:?}");
        assert_eq!(response.body.as_array().map(Vec::len), Some(expected));
    }
}

#[test]
fn non_get_methods_are_rejected() {
    let repo = MockContentRepository::new();
    for method in [Method::Post, Method::Put, Method::Delete, Method::Head] {
        for endpoint in Endpoint::ALL {
            let response = routes::handle(&repo, method, endpoint);
            assert_eq!(response.status, STATUS_METHOD_NOT_ALLOWED);
            assert_eq!(response.error_message(), Some("Method not allowed"));
        }
    }
}

#[test]
fn method_check_precedes_repository_access() {
    let response = routes::handle(&BrokenRepository, Method::Post, Endpoint::Info);
    assert_eq!(response.status, STATUS_METHOD_NOT_ALLOWED);
}

#[test]
fn repository_failures_map_to_endpoint_messages() {
    let expected = [
        (Endpoint::Info, "Failed to fetch Swami Ji information"),
        (Endpoint::Teachings, "Failed to fetch teachings"),
        (Endpoint::Quotes, "Failed to fetch quotes"),
        (Endpoint::Events, "Failed to fetch events"),
    ];
    for (endpoint, message) in expected {
        let response = routes::handle(&BrokenRepository, Method::Get, endpoint);
        assert_eq!(response.status, STATUS_INTERNAL_ERROR);
        assert_eq!(response.error_message(), Some(message));
    }
}

#[test]
fn unknown_paths_are_not_found() {
    let response = routes::route(&MockContentRepository, Method::Get, "/api/swamiji/gallery");
    assert_eq!(response.status, STATUS_NOT_FOUND);

    let response = routes::route(&MockContentRepository, Method::Get, "/api/swamiji/quotes");
    assert_eq!(response.status, 200);
}

#[test]
fn bodies_decode_back_into_entities() {
    let response = routes::route(&MockContentRepository, Method::Get, Endpoint::Events.path());
    let events: Vec<Event> = serde_json::from_value(response.body).unwrap();
    assert_eq!(events[0].location.en, "Himalayan Ashram, Rishikesh");
}

#[test]
fn repository_error_detail_stays_out_of_the_body() {
    let err = BrokenRepository.events().unwrap_err();
    assert_eq!(err.to_string(), "content source unavailable: events table missing");

    let response = routes::handle(&BrokenRepository, Method::Get, Endpoint::Events);
    assert_eq!(response.body, serde_json::json!({ "error": "Failed to fetch events" }));
}
