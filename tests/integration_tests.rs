//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: config → HTTP requests → typed pages,
//! windows, and entries.

use futures::{pin_mut, StreamExt};
use pagekit::config::ClientConfig;
use pagekit::content::{ContentClient, EntryQuery};
use pagekit::types::SortDirection;
use pagekit::window::PageLabel;
use pagekit::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn entry_json(uuid: &str, title: &str, category: Option<&str>) -> serde_json::Value {
    json!({
        "uuid": uuid,
        "locale": "en",
        "published_at": "2024-03-01T09:30:00Z",
        "fields": {
            "title": title,
            "slug": title.to_lowercase().replace(' ', "-"),
            "content": "body",
            "excerpt": "summary",
            "published_date": "2024-03-01",
            "category": category,
            "views": "120"
        }
    })
}

fn client_for(server: &MockServer) -> ContentClient {
    let config = ClientConfig::new(server.uri(), "proj-1").with_token("secret");
    ContentClient::new(config).unwrap()
}

#[tokio::test]
async fn page_based_listing_produces_window() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(header("project-id", "proj-1"))
        .and(header("Authorization", "Bearer secret"))
        .and(query_param("page", "2"))
        .and(query_param("paginate", "10"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                entry_json("a-11", "Eleventh", Some("news")),
                entry_json("a-12", "Twelfth", Some("tech")),
            ],
            "total": 135
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .entries("articles", &EntryQuery::new().page(2).per_page(10))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].fields.title, "Eleventh");
    assert_eq!(page.total, Some(135));
    assert_eq!(page.total_pages(), Some(14));
    assert!(page.has_more());

    // Near the start of 14 pages: a leading run, one jump to the end
    let window = page.window().unwrap();
    assert_eq!(window.first(), Some(&PageLabel::Page(1)));
    assert_eq!(window.last(), Some(&PageLabel::Page(14)));
    assert_eq!(
        window.iter().filter(|label| label.is_ellipsis()).count(),
        1
    );
    assert!(window.contains(&PageLabel::Page(2)));
}

#[tokio::test]
async fn filters_and_sort_reach_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("where[category]", "news"))
        .and(query_param("where[title][like]", "%rust%"))
        .and(query_param("sort", "published_date:DESC"))
        .and(query_param("locale", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = EntryQuery::new()
        .locale("fr")
        .category("news")
        .search("rust")
        .sort("published_date", SortDirection::Desc);

    let page = client.entries("articles", &query).await.unwrap();
    assert!(page.items.is_empty());
    assert!(page.total.is_none());
}

#[tokio::test]
async fn limit_offset_slice_advances() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            entry_json("a-5", "Fifth", None),
            entry_json("a-6", "Sixth", None),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let slice = client
        .entries_slice("articles", 2, 4, None)
        .await
        .unwrap();

    assert_eq!(slice.items.len(), 2);
    assert!(slice.has_more());
    assert_eq!(slice.next_offset(), 6);
}

#[tokio::test]
async fn missing_entry_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.entry("articles", "nope", None).await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::NotFound { collection, uuid } => {
            assert_eq!(collection, "articles");
            assert_eq!(uuid, "nope");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn single_entry_and_translation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog-posts/b-1"))
        .and(query_param("locale", "en"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": entry_json("b-1", "Hello", None) })),
        )
        .mount(&server)
        .await;

    let mut translated = entry_json("b-1", "Bonjour", None);
    translated["locale"] = json!("fr");
    Mock::given(method("GET"))
        .and(path("/blog-posts/b-1"))
        .and(query_param("translation_locale", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(translated))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let entry = client.entry("blog-posts", "b-1", Some("en")).await.unwrap();
    assert_eq!(entry.fields.title, "Hello");

    let translation = client.translation("blog-posts", "b-1", "fr").await.unwrap();
    assert_eq!(translation.fields.title, "Bonjour");
    assert_eq!(translation.locale, "fr");
}

#[tokio::test]
async fn stream_pages_until_exhausted() {
    let server = MockServer::start().await;

    let pages = [
        vec![
            entry_json("a-1", "First", None),
            entry_json("a-2", "Second", None),
        ],
        vec![
            entry_json("a-3", "Third", None),
            entry_json("a-4", "Fourth", None),
        ],
        vec![entry_json("a-5", "Fifth", None)],
    ];

    for (i, items) in pages.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path("/articles"))
            .and(query_param("page", (i + 1).to_string()))
            .and(query_param("paginate", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": items,
                "total": 5
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let stream = client.stream_pages("articles", EntryQuery::new().per_page(2));
    pin_mut!(stream);

    let mut fetched = Vec::new();
    while let Some(page) = stream.next().await {
        fetched.push(page.unwrap());
    }

    assert_eq!(fetched.len(), 3);
    assert_eq!(fetched[0].page, 1);
    assert_eq!(fetched[2].page, 3);

    let total_entries: usize = fetched.iter().map(|page| page.items.len()).sum();
    assert_eq!(total_entries, 5);
}

#[tokio::test]
async fn stream_slices_stops_on_short_slice() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            entry_json("a-1", "First", None),
            entry_json("a-2", "Second", None),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([entry_json("a-3", "Third", None)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stream = client.stream_slices("articles", 2, 0, None);
    pin_mut!(stream);

    let mut slices = Vec::new();
    while let Some(slice) = stream.next().await {
        slices.push(slice.unwrap());
    }

    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].offset, 0);
    assert_eq!(slices[1].offset, 2);
    assert_eq!(slices[1].items.len(), 1);
}

#[tokio::test]
async fn categories_are_distinct_and_sorted() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("locale", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            entry_json("a-1", "First", Some("tech")),
            entry_json("a-2", "Second", Some("news")),
            entry_json("a-3", "Third", Some("tech")),
            entry_json("a-4", "Fourth", None),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let categories = client.categories("articles", None).await.unwrap();

    assert_eq!(categories, vec!["news".to_string(), "tech".to_string()]);
}
