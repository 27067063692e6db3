use super::{story_json, story_services};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;
use story_client::application::services::user_service::UserService;
use story_client::session::interface::{RestoreOutcome, StoredCredentials};

fn stored(token: &str) -> StoredCredentials {
    StoredCredentials {
        username: "alice".to_string(),
        token: token.to_string(),
    }
}

#[tokio::test]
async fn test_login_then_restore_with_saved_credentials() {
    let mut server = Server::new_async().await;
    let user = json!({
        "username": "alice",
        "name": "Alice",
        "createdAt": "2026-01-01T00:00:00.000Z",
        "favorites": [story_json("1")],
        "stories": [story_json("2")]
    });
    let _login = server
        .mock("POST", "/login")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"user": user, "token": "issued"}).to_string())
        .create_async()
        .await;
    let _lookup = server
        .mock("GET", "/users/alice")
        .match_query(Matcher::UrlEncoded("token".into(), "issued".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"user": user}).to_string())
        .create_async()
        .await;

    let (_, users) = story_services(&server);
    let session = users.login("alice", "pw").await.unwrap();
    let saved = session.credentials();
    drop(session);

    let restored = users.restore_session(Some(&saved)).await.session().unwrap();

    assert_eq!(restored.token(), "issued");
    assert!(restored.is_favorite("1"));
    assert!(restored.is_own_story("2"));
}

#[tokio::test]
async fn test_expired_token_degrades_to_logged_out() {
    let mut server = Server::new_async().await;
    let _lookup = server
        .mock("GET", "/users/alice")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error": {"status": 401, "message": "Unauthorized"}}"#)
        .create_async()
        .await;

    let (_, users) = story_services(&server);
    let outcome = users.restore_session(Some(&stored("expired"))).await;

    assert!(matches!(outcome, RestoreOutcome::Rejected(_)));
    assert!(outcome.session().is_none());
}

#[tokio::test]
async fn test_unknown_user_degrades_to_logged_out() {
    let mut server = Server::new_async().await;
    let _lookup = server
        .mock("GET", "/users/alice")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let (_, users) = story_services(&server);
    let outcome = users.restore_session(Some(&stored("tok"))).await;

    assert!(matches!(outcome, RestoreOutcome::Rejected(_)));
}

#[tokio::test]
async fn test_nothing_stored() {
    let server = Server::new_async().await;
    let (_, users) = story_services(&server);

    let outcome = users.restore_session(None).await;

    assert!(matches!(outcome, RestoreOutcome::NoStoredCredentials));
}
