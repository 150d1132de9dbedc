//! End-to-end request order scenarios over real HTTP.

use axum::http::StatusCode;
use testmux::config::parse_config;
use testmux::{CollectingReporter, Router, TestServer};

mod common;

#[tokio::test]
async fn test_requests_in_order() {
    let mut router = Router::new();
    router.register_resp("GET", "/foo", StatusCode::OK, "");
    router.register_resp("GET", "/bar", StatusCode::CREATED, "");
    router.register_resp("PUT", "/foo", StatusCode::ACCEPTED, "");

    let server = TestServer::start(router).await.unwrap();
    let client = common::client();

    assert_eq!(common::send(&client, &server, "GET", "/foo").await.0, 200);
    assert_eq!(common::send(&client, &server, "GET", "/bar").await.0, 201);
    assert_eq!(common::send(&client, &server, "PUT", "/foo").await.0, 202);

    let mut reporter = CollectingReporter::new();
    assert!(server.finish(&mut reporter).await.unwrap());
    assert!(reporter.messages().is_empty());
}

#[tokio::test]
async fn test_unexpected_request() {
    let mut router = Router::new();
    router.register_resp("GET", "/foo", StatusCode::OK, "");
    router.register_resp("GET", "/bar", StatusCode::CREATED, "");

    let server = TestServer::start(router).await.unwrap();
    let client = common::client();

    common::send(&client, &server, "GET", "/foo").await;
    common::send(&client, &server, "GET", "/bar").await;
    let (status, body) = common::send(&client, &server, "PUT", "/foo").await;
    assert_eq!(status, 404);
    assert_eq!(body, "404 page not found\n");

    let mut reporter = CollectingReporter::new();
    assert!(!server.finish(&mut reporter).await.unwrap());
    assert_eq!(reporter.messages(), ["Unexpected request: PUT /foo"]);
}

#[tokio::test]
async fn test_out_of_order_requests() {
    let mut router = Router::new();
    router.register_resp("GET", "/foo", StatusCode::OK, "");
    router.register_resp("PUT", "/foo", StatusCode::ACCEPTED, "");
    router.register_resp("GET", "/bar", StatusCode::CREATED, "");

    let server = TestServer::start(router).await.unwrap();
    let client = common::client();

    assert_eq!(common::send(&client, &server, "GET", "/foo").await.0, 200);
    assert_eq!(common::send(&client, &server, "GET", "/bar").await.0, 201);
    assert_eq!(common::send(&client, &server, "PUT", "/foo").await.0, 202);

    let mut reporter = CollectingReporter::new();
    assert!(!server.finish(&mut reporter).await.unwrap());
    assert_eq!(
        reporter.messages(),
        ["Request out of order: GET /bar", "Request out of order: PUT /foo"]
    );
}

#[tokio::test]
async fn test_unvisited_route() {
    let mut router = Router::new();
    router.register_resp("GET", "/foo", StatusCode::OK, "Hello");
    router.register_resp("GET", "/bar", StatusCode::OK, "Bonjour");

    let server = TestServer::start(router).await.unwrap();
    let client = common::client();

    let (status, body) = common::send(&client, &server, "GET", "/foo").await;
    assert_eq!(status, 200);
    assert_eq!(body, "Hello\n");

    let mut reporter = CollectingReporter::new();
    assert!(!server.finish(&mut reporter).await.unwrap());
    assert_eq!(reporter.messages(), ["Unvisited route: GET /bar"]);
}

#[tokio::test]
async fn test_custom_handler_and_query() {
    let mut router = Router::new();
    router.register_fn("GET", "/search", |w, req| {
        w.set_status(StatusCode::OK);
        w.write_body(req.query().unwrap_or("").as_bytes());
    });

    let server = TestServer::start(router).await.unwrap();
    let client = common::client();

    let (status, body) = common::send(&client, &server, "GET", "/search?q=rust").await;
    assert_eq!(status, 200);
    assert_eq!(body, "q=rust");

    let shared = server.router();
    assert_eq!(testmux::http::server::lock(&shared).cursor(), 1);

    let mut reporter = CollectingReporter::new();
    assert!(server.finish(&mut reporter).await.unwrap());
}

#[tokio::test]
async fn test_scenario_from_config() {
    let config = parse_config(
        r#"
[[routes]]
method = "POST"
path = "/jobs"
status = 202
body = "queued"

[[routes]]
method = "GET"
path = "/jobs/1"
body = "done"
"#,
    )
    .unwrap();

    let router = Router::from_config(&config.routes);
    let server = TestServer::start_with(router, &config.listener).await.unwrap();
    let client = common::client();

    assert_eq!(
        common::send(&client, &server, "POST", "/jobs").await,
        (202, "queued\n".to_string())
    );
    assert_eq!(
        common::send(&client, &server, "GET", "/jobs/1").await,
        (200, "done\n".to_string())
    );

    let mut reporter = CollectingReporter::new();
    assert!(server.finish(&mut reporter).await.unwrap());
}

#[tokio::test]
async fn test_percent_encoded_path_matches_decoded_route() {
    let mut router = Router::new();
    router.register_resp("GET", "/a b", StatusCode::OK, "spaced");
    router.register_fn("GET", "/files/café", |w, req| {
        w.set_status(StatusCode::OK);
        w.write_body(req.raw_path().as_bytes());
    });

    let server = TestServer::start(router).await.unwrap();
    let client = common::client();

    assert_eq!(
        common::send(&client, &server, "GET", "/a%20b").await,
        (200, "spaced\n".to_string())
    );
    assert_eq!(
        common::send(&client, &server, "GET", "/files/caf%C3%A9").await,
        (200, "/files/caf%C3%A9".to_string())
    );

    let mut reporter = CollectingReporter::new();
    assert!(
        server.finish(&mut reporter).await.unwrap(),
        "{:?}",
        reporter.messages()
    );
}
