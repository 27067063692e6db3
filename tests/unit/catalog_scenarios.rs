use super::{ids, session, story_json, story_services};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;
use story_client::application::models::story::StoryDraft;
use story_client::application::services::story_service::StoryService;
use story_client::error::AppError;
use story_client::presentation::listing::StoryView;

#[tokio::test]
async fn test_create_prepends_to_catalog_and_own_stories() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/stories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"stories": [story_json("1"), story_json("2")]}).to_string())
        .create_async()
        .await;
    let create = server
        .mock("POST", "/stories")
        .match_body(Matcher::PartialJson(json!({"token": "tok"})))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(json!({"story": story_json("3")}).to_string())
        .create_async()
        .await;

    let (stories, _) = story_services(&server);
    let mut catalog = stories.fetch_all().await.unwrap();
    assert_eq!(ids(catalog.stories()), vec!["1", "2"]);

    let mut session = session(vec![]);
    let draft = StoryDraft::new("Story 3", "Author", "https://news.example.com/3");
    let created = stories
        .create(&mut catalog, &mut session, &draft)
        .await
        .unwrap();

    assert_eq!(created.story_id(), "3");
    assert_eq!(ids(catalog.stories()), vec!["3", "1", "2"]);
    assert_eq!(ids(session.own_stories()), vec!["3"]);
    assert_eq!(created.hostname().unwrap(), "news.example.com");
    assert_eq!(
        ids(StoryView::OwnStories.select(&catalog, Some(&session)).unwrap()),
        vec!["3"]
    );
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_failure_inserts_nothing() {
    let mut server = Server::new_async().await;
    let _create = server
        .mock("POST", "/stories")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let (stories, _) = story_services(&server);
    let mut catalog = story_client::application::models::story::StoryList::default();
    let mut session = session(vec![]);
    let draft = StoryDraft::new("t", "a", "not even a url");

    let result = stories.create(&mut catalog, &mut session, &draft).await;

    assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    assert!(catalog.is_empty());
    assert!(session.own_stories().is_empty());
}

#[tokio::test]
async fn test_fetch_all_is_not_retried() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/stories")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let (stories, _) = story_services(&server);
    assert!(stories.fetch_all().await.is_err());
    list.assert_async().await;
}
