//! HTTP-level tests against a mock Supabase project.

use serde_json::{json, Value};
use supabase_client::{SupabaseClient, SupabaseError};

#[tokio::test]
async fn test_invoke_posts_json_with_auth_headers() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/functions/v1/submit-contact")
        .match_header("apikey", "anon-key")
        .match_header("authorization", "Bearer anon-key")
        .match_body(mockito::Matcher::Json(json!({
            "name": "Ada",
            "email": "ada@x.com"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"c-1","name":"Ada"}"#)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key");
    let resp = client
        .invoke("submit-contact", &json!({"name": "Ada", "email": "ada@x.com"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.data, json!({"id": "c-1", "name": "Ada"}));
}

#[tokio::test]
async fn test_invoke_uses_access_token_when_set() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/functions/v1/apply-job")
        .match_header("apikey", "anon-key")
        .match_header("authorization", "Bearer user-jwt")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key").with_access_token("user-jwt");
    client.invoke("apply-job", &json!({})).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_invoke_error_carries_function_message() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/functions/v1/subscribe-newsletter")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"Email already subscribed"}"#)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key");
    let err = client
        .invoke("subscribe-newsletter", &json!({"email": "ada@x.com"}))
        .await
        .unwrap_err();

    match err {
        SupabaseError::Http { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message.as_deref(), Some("Email already subscribed"));
        }
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_select_sends_filters_and_order() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/rest/v1/blog_posts")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("select".into(), "*".into()),
            mockito::Matcher::UrlEncoded("published".into(), "eq.true".into()),
            mockito::Matcher::UrlEncoded("order".into(), "created_at.desc".into()),
        ]))
        .match_header("apikey", "anon-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":2,"title":"Newer"},{"id":1,"title":"Older"}]"#)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key");
    let rows: Vec<Value> = client
        .from("blog_posts")
        .select("*")
        .eq("published", true)
        .order("created_at", false)
        .execute()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "Newer");
}

#[tokio::test]
async fn test_select_error_uses_postgrest_message() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":"42P01","details":null,"hint":null,"message":"relation does not exist"}"#)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key");
    let err = client
        .from("projects")
        .execute::<Value>()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message().as_deref(), Some("relation does not exist"));
}

#[tokio::test]
async fn test_select_rejects_non_array_body() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("GET", "/rest/v1/projects")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"not":"rows"}"#)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key");
    let err = client.from("projects").execute::<Value>().await.unwrap_err();

    assert!(matches!(err, SupabaseError::Parse(_)));
}

#[tokio::test]
async fn test_timeout_with_custom_http_client_still_sends() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/functions/v1/submit-contact")
        .match_header("apikey", "anon-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;

    let client = SupabaseClient::new(server.url(), "anon-key")
        .with_http_client(reqwest::Client::builder().build().unwrap())
        .with_timeout(std::time::Duration::from_secs(5));
    let resp = client.invoke("submit-contact", &json!({})).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.data, json!({"ok": true}));
}
