// tests/pagination.rs
//! Cursor pagination against a scripted transport and a mock HTTP server.

mod common;

use common::{page_envelope, ScriptedTransport};
use gh_project_report::api::queries::{PROJECTS_PATH, PROJECTS_QUERY};
use gh_project_report::{
    fetch_all, ApiEndpoint, ApiToken, AppError, GitHubHttpClient, ServiceFailure,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Three pages keyed by the incoming cursor.
fn three_pages() -> ScriptedTransport {
    ScriptedTransport::new(|_, variables| {
        let page = match variables["after"].as_str() {
            None => page_envelope(PROJECTS_PATH, vec![json!(1), json!(2)], Some("c1")),
            Some("c1") => page_envelope(PROJECTS_PATH, vec![json!(3)], Some("c2")),
            Some("c2") => page_envelope(PROJECTS_PATH, vec![json!(4), json!(5)], None),
            Some(other) => panic!("unexpected cursor {}", other),
        };
        Ok(page)
    })
}

#[tokio::test]
async fn pages_are_concatenated_in_order_with_one_request_each() {
    let transport = three_pages();
    let variables = json!({ "org": "acme" });

    let nodes = fetch_all(&transport, PROJECTS_QUERY, &variables, PROJECTS_PATH, 2)
        .await
        .unwrap();

    assert_eq!(nodes, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    let cursors: Vec<&Value> = requests.iter().map(|vars| &vars["after"]).collect();
    assert_eq!(cursors, vec![&Value::Null, &json!("c1"), &json!("c2")]);
    for vars in &requests {
        assert_eq!(vars["org"], "acme");
        assert_eq!(vars["first"], 2);
    }
}

#[tokio::test]
async fn repeated_fetch_of_unchanged_data_is_identical() {
    let transport = three_pages();
    let variables = json!({ "org": "acme" });

    let first = fetch_all(&transport, PROJECTS_QUERY, &variables, PROJECTS_PATH, 100)
        .await
        .unwrap();
    let second = fetch_all(&transport, PROJECTS_QUERY, &variables, PROJECTS_PATH, 100)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.requests().len(), 6);
}

#[tokio::test]
async fn missing_connection_reads_as_empty() {
    let transport = ScriptedTransport::new(|_, _| Ok(json!({ "data": { "organization": null } })));

    let nodes = fetch_all(&transport, PROJECTS_QUERY, &json!({}), PROJECTS_PATH, 100)
        .await
        .unwrap();

    assert!(nodes.is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn failure_on_a_later_page_discards_earlier_pages() {
    let transport = ScriptedTransport::new(|_, variables| match variables["after"].as_str() {
        None => Ok(page_envelope(PROJECTS_PATH, vec![json!(1)], Some("c1"))),
        Some(_) => Err(AppError::MalformedResponse("truncated".to_string())),
    });

    let result = fetch_all(&transport, PROJECTS_QUERY, &json!({}), PROJECTS_PATH, 100).await;

    assert!(matches!(result, Err(AppError::MalformedResponse(_))));
    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn non_object_variables_are_rejected() {
    let transport = three_pages();

    let result = fetch_all(&transport, PROJECTS_QUERY, &json!([1]), PROJECTS_PATH, 100).await;

    assert!(matches!(result, Err(AppError::InternalError { .. })));
    assert!(transport.requests().is_empty());
}

async fn http_client(server: &MockServer) -> GitHubHttpClient {
    let token = ApiToken::new("ghp_test_token").unwrap();
    let endpoint = ApiEndpoint::parse(&format!("{}/graphql", server.uri())).unwrap();
    GitHubHttpClient::with_endpoint(&token, endpoint, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn http_client_walks_pages_with_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer ghp_test_token"))
        .and(body_string_contains("\"after\":null"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(
            PROJECTS_PATH,
            vec![json!({ "number": 1 })],
            Some("cursor-1"),
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "after": "cursor-1" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_envelope(
            PROJECTS_PATH,
            vec![json!({ "number": 2 })],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server).await;
    let nodes = fetch_all(
        &client,
        PROJECTS_QUERY,
        &json!({ "org": "acme" }),
        PROJECTS_PATH,
        1,
    )
    .await
    .unwrap();

    assert_eq!(nodes, vec![json!({ "number": 1 }), json!({ "number": 2 })]);
}

#[tokio::test]
async fn http_error_status_fails_the_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let client = http_client(&server).await;
    let err = fetch_all(&client, PROJECTS_QUERY, &json!({}), PROJECTS_PATH, 100)
        .await
        .unwrap_err();

    assert!(err.is_transport());
    match err {
        AppError::GraphQlService {
            code,
            status,
            message,
        } => {
            assert_eq!(code, ServiceFailure::ServerError(502));
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected a service error, got {:?}", other),
    }
}

#[tokio::test]
async fn graphql_errors_with_data_still_return_nodes() {
    let server = MockServer::start().await;

    let mut body = page_envelope(PROJECTS_PATH, vec![json!({ "number": 9 })], None);
    body["errors"] = json!([{ "message": "Resource not accessible by integration" }]);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = http_client(&server).await;
    let nodes = fetch_all(&client, PROJECTS_QUERY, &json!({}), PROJECTS_PATH, 100)
        .await
        .unwrap();

    assert_eq!(nodes, vec![json!({ "number": 9 })]);
}
