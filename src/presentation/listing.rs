use crate::application::models::story::{Story, StoryList};
use crate::error::AppError;
use crate::session::session::Session;

/// Which list of stories the UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryView {
    All,
    Favorites,
    OwnStories,
}

impl StoryView {
    /// Returns the stories to render for this view.
    ///
    /// `All` works logged out; the other views need a session.
    pub fn select<'a>(
        self,
        catalog: &'a StoryList,
        session: Option<&'a Session>,
    ) -> Result<&'a [Story], AppError> {
        match (self, session) {
            (StoryView::All, _) => Ok(catalog.stories()),
            (StoryView::Favorites, Some(session)) => Ok(session.favorites()),
            (StoryView::OwnStories, Some(session)) => Ok(session.own_stories()),
            (_, None) => Err(AppError::AuthRequired),
        }
    }
}

/// One display line for a story.
///
/// A star marks favorites when someone is logged in; a story whose URL has no
/// parsable host still renders.
pub fn render_story_line(story: &Story, session: Option<&Session>) -> String {
    let hostname = story
        .hostname()
        .unwrap_or_else(|_| "invalid url".to_string());
    let line = format!(
        "{} ({}) by {} posted by {}",
        story.title(),
        hostname,
        story.author(),
        story.username()
    );
    match session {
        Some(session) if session.is_favorite(story.story_id()) => format!("★ {line}"),
        Some(_) => format!("☆ {line}"),
        None => line,
    }
}
