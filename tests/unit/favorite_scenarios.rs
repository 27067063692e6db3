use super::{ids, session, story, story_services};
use mockito::Server;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use story_client::application::services::user_service::{UserService, UserServiceImpl};
use story_client::config::RestApiConfig;
use story_client::error::AppError;
use story_client::session::interface::FavoriteState;
use story_client::transport::http_client::RestClient;

#[tokio::test]
async fn test_add_then_remove_restores_favorites() {
    let mut server = Server::new_async().await;
    let _add = server
        .mock("POST", "/users/alice/favorites/5")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let _remove = server
        .mock("DELETE", "/users/alice/favorites/5")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let (_, users) = story_services(&server);
    let mut session = session(vec![]);

    users.add_favorite(&mut session, &story("5")).await.unwrap();
    assert_eq!(ids(session.favorites()), vec!["5"]);

    users.remove_favorite(&mut session, &story("5")).await.unwrap();
    assert!(ids(session.favorites()).is_empty());
}

#[tokio::test]
async fn test_add_then_remove_keeps_existing_favorites() {
    let mut server = Server::new_async().await;
    let _add = server
        .mock("POST", "/users/alice/favorites/5")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let _remove = server
        .mock("DELETE", "/users/alice/favorites/5")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let (_, users) = story_services(&server);
    let mut session = session(vec![story("1"), story("2")]);
    let before: Vec<String> = ids(session.favorites()).iter().map(|s| s.to_string()).collect();

    users.add_favorite(&mut session, &story("5")).await.unwrap();
    users.remove_favorite(&mut session, &story("5")).await.unwrap();

    assert_eq!(ids(session.favorites()), before);
}

#[tokio::test]
async fn test_failed_add_is_not_partially_applied() {
    let mut server = Server::new_async().await;
    let _add = server
        .mock("POST", "/users/alice/favorites/5")
        .with_status(401)
        .with_body(r#"{"error": {"status": 401, "message": "Invalid token"}}"#)
        .create_async()
        .await;

    let (_, users) = story_services(&server);
    let mut session = session(vec![story("1")]);

    let result = users.add_favorite(&mut session, &story("5")).await;

    assert!(matches!(result, Err(AppError::AuthRequired)));
    assert_eq!(ids(session.favorites()), vec!["1"]);
    assert_eq!(session.favorite_state("5"), FavoriteState::NotFavorited);
}

#[tokio::test]
async fn test_unreachable_service_is_service_unavailable() {
    let users = UserServiceImpl::new(Arc::new(
        RestClient::new(&RestApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: 2,
        })
        .unwrap(),
    ));

    let mut session = session(vec![]);
    let result = users.toggle_favorite(&mut session, &story("5")).await;

    assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    assert!(session.favorites().is_empty());
}
