pub mod story_service;
pub mod user_service;
