use httpmock::prelude::*;
use met_search::core::input::{SearchForm, SubmitEvent};
use met_search::core::{Container, ResponsePolicy};
use met_search::{HtmlPage, MetMuseumClient, SearchError, SearchPage, SearchPipeline};
use std::sync::Arc;
use std::time::Duration;

fn page_for(
    server: &MockServer,
    policy: ResponsePolicy,
) -> (SearchPage<MetMuseumClient, HtmlPage>, Arc<HtmlPage>) {
    let api = Arc::new(MetMuseumClient::new(&server.base_url()));
    let container = Arc::new(HtmlPage::new("test"));
    let pipeline = SearchPipeline::new(api, container.clone(), policy);
    (SearchPage::new(SearchForm::new(), pipeline), container)
}

#[tokio::test]
async fn test_search_query_is_lower_cased_input() {
    let server = MockServer::start();
    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "sunflowers");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"total": 1, "objectIDs": [436524]}));
    });
    let detail_mock = server.mock(|when, then| {
        when.method(GET).path("/objects/436524");
        then.status(200).json_body(serde_json::json!({
            "objectID": 436524,
            "primaryImageSmall": "https://images.example.com/sunflowers.jpg"
        }));
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Strict);
    page.form_mut().set_value("SunFlowers");
    let mut event = SubmitEvent::new();
    let submission = page.submit(&mut event);
    assert!(event.default_prevented());

    let image = submission.outcome().await.unwrap();

    search_mock.assert();
    detail_mock.assert();
    assert_eq!(image.src, "https://images.example.com/sunflowers.jpg");
    assert_eq!(container.children().await, vec![image]);
}

#[tokio::test]
async fn test_detail_request_targets_first_identifier() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .json_body(serde_json::json!({"total": 2, "objectIDs": [12345, 67890]}));
    });
    let first = server.mock(|when, then| {
        when.method(GET).path("/objects/12345");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/x.jpg"}));
    });
    let second = server.mock(|when, then| {
        when.method(GET).path("/objects/67890");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/y.jpg"}));
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Strict);
    page.type_and_submit("vase").outcome().await.unwrap();

    first.assert();
    assert_eq!(second.hits(), 0);
    let children = container.children().await;
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].src, "http://example.com/x.jpg");
}

#[tokio::test]
async fn test_empty_identifier_list_lenient_requests_undefined() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .json_body(serde_json::json!({"total": 0, "objectIDs": []}));
    });
    let undefined = server.mock(|when, then| {
        when.method(GET).path("/objects/undefined");
        then.status(404)
            .json_body(serde_json::json!({"message": "Not a valid object"}));
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Lenient);
    let image = page.type_and_submit("qwxz").outcome().await.unwrap();

    undefined.assert();
    assert_eq!(image.src, "");
    assert_eq!(container.children().await.len(), 1);
}

#[tokio::test]
async fn test_empty_identifier_list_strict_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .json_body(serde_json::json!({"total": 0, "objectIDs": []}));
    });
    let detail = server.mock(|when, then| {
        when.method(GET).path_contains("/objects/");
        then.status(404);
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Strict);
    let result = page.type_and_submit("qwxz").outcome().await;

    assert!(matches!(result, Err(SearchError::MalformedResponse { .. })));
    assert_eq!(detail.hits(), 0);
    assert!(container.children().await.is_empty());
}

#[tokio::test]
async fn test_two_sequential_cycles_accumulate_newest_first() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "cat");
        then.status(200).json_body(serde_json::json!({"objectIDs": [1]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "dog");
        then.status(200).json_body(serde_json::json!({"objectIDs": [2]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/objects/1");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/cat.jpg"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/objects/2");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/dog.jpg"}));
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Strict);
    page.type_and_submit("Cat").outcome().await.unwrap();
    page.type_and_submit("Dog").outcome().await.unwrap();

    let children = container.children().await;
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].src, "http://example.com/dog.jpg");
    assert_eq!(children[1].src, "http://example.com/cat.jpg");
}

#[tokio::test]
async fn test_overlapping_submissions_land_in_completion_order() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "slow");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(serde_json::json!({"objectIDs": [10]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "fast");
        then.status(200).json_body(serde_json::json!({"objectIDs": [20]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/objects/10");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/slow.jpg"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/objects/20");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/fast.jpg"}));
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Strict);
    let slow = page.type_and_submit("slow");
    let fast = page.type_and_submit("fast");
    fast.outcome().await.unwrap();
    slow.outcome().await.unwrap();

    let children = container.children().await;
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].src, "http://example.com/slow.jpg");
    assert_eq!(children[1].src, "http://example.com/fast.jpg");
}

#[tokio::test]
async fn test_empty_term_is_forwarded() {
    let server = MockServer::start();
    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("q", "");
        then.status(200).json_body(serde_json::json!({"objectIDs": null}));
    });

    let (page, container) = page_for(&server, ResponsePolicy::Strict);
    let mut event = SubmitEvent::new();
    let result = page.submit(&mut event).outcome().await;

    assert!(event.default_prevented());
    search_mock.assert();
    assert!(matches!(result, Err(SearchError::MalformedResponse { .. })));
    assert!(container.children().await.is_empty());
}

#[tokio::test]
async fn test_missing_image_field_strict_is_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).json_body(serde_json::json!({"objectIDs": [5]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/objects/5");
        then.status(200)
            .json_body(serde_json::json!({"objectID": 5, "primaryImageSmall": ""}));
    });

    let (mut page, container) = page_for(&server, ResponsePolicy::Strict);
    let result = page.type_and_submit("no image").outcome().await;

    assert!(matches!(result, Err(SearchError::MalformedResponse { .. })));
    assert!(container.children().await.is_empty());
}

#[tokio::test]
async fn test_network_failure_is_an_http_error() {
    // Nothing listens on port 9 on test hosts.
    let api = Arc::new(MetMuseumClient::new("http://127.0.0.1:9"));
    let container = Arc::new(HtmlPage::new("test"));
    let pipeline = SearchPipeline::new(api, container.clone(), ResponsePolicy::Lenient);
    let mut page = SearchPage::new(SearchForm::new(), pipeline);

    let result = page.type_and_submit("anything").outcome().await;

    assert!(matches!(result, Err(SearchError::Http(_))));
    assert!(container.children().await.is_empty());
}

#[tokio::test]
async fn test_request_timeout_aborts_slow_search() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({"objectIDs": [1]}));
    });
    let detail_mock = server.mock(|when, then| {
        when.method(GET).path("/objects/1");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/1.jpg"}));
    });

    let api = Arc::new(
        MetMuseumClient::with_timeout(&server.base_url(), Some(Duration::from_secs(1))).unwrap(),
    );
    let container = Arc::new(HtmlPage::new("test"));
    let pipeline = SearchPipeline::new(api, container.clone(), ResponsePolicy::Strict);
    let mut page = SearchPage::new(SearchForm::new(), pipeline);

    let result = page.type_and_submit("slow").outcome().await;

    match result {
        Err(SearchError::Http(e)) => assert!(e.is_timeout()),
        other => panic!("expected a timed-out request, got {:?}", other),
    }
    assert_eq!(detail_mock.hits(), 0);
    assert!(container.children().await.is_empty());
}

#[tokio::test]
async fn test_without_timeout_slow_search_still_completes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .delay(Duration::from_millis(1500))
            .json_body(serde_json::json!({"objectIDs": [1]}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/objects/1");
        then.status(200)
            .json_body(serde_json::json!({"primaryImageSmall": "http://example.com/1.jpg"}));
    });

    let api = Arc::new(MetMuseumClient::with_timeout(&server.base_url(), None).unwrap());
    let container = Arc::new(HtmlPage::new("test"));
    let pipeline = SearchPipeline::new(api, container.clone(), ResponsePolicy::Strict);
    let mut page = SearchPage::new(SearchForm::new(), pipeline);

    let image = page.type_and_submit("slow").outcome().await.unwrap();

    assert_eq!(image.src, "http://example.com/1.jpg");
    assert_eq!(container.children().await.len(), 1);
}
