/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 14/10/26
 ******************************************************************************/
use anyhow::Result;
use std::sync::Arc;
use story_client::application::services::story_service::{StoryService, StoryServiceImpl};
use story_client::application::services::user_service::{UserService, UserServiceImpl};
use story_client::config::Config;
use story_client::presentation::listing::{render_story_line, StoryView};
use story_client::session::interface::RestoreOutcome;
use story_client::transport::http_client::RestClient;
use story_client::utils::logger::setup_logger;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger();

    // STORY_USERNAME / STORY_TOKEN restore a previous login
    let config = Config::new();
    info!("Using configuration: {}", config);

    let client = Arc::new(RestClient::new(&config.rest_api)?);
    let stories = StoryServiceImpl::new(client.clone());
    let users = UserServiceImpl::new(client);

    let session = match users.restore_session(config.stored_credentials.as_ref()).await {
        RestoreOutcome::Restored(session) => {
            info!("Welcome back, {}", session.name());
            Some(session)
        }
        RestoreOutcome::NoStoredCredentials => None,
        RestoreOutcome::Rejected(e) => {
            warn!("Stored login no longer valid: {}", e);
            None
        }
    };

    let catalog = stories.fetch_all().await?;

    for view in [StoryView::All, StoryView::Favorites, StoryView::OwnStories] {
        match view.select(&catalog, session.as_ref()) {
            Ok(selected) => {
                println!("== {:?} ({})", view, selected.len());
                for story in selected {
                    println!("  {}", render_story_line(story, session.as_ref()));
                }
            }
            Err(e) => println!("== {:?}: {}", view, e),
        }
    }

    Ok(())
}
