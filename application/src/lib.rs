pub mod catalog_service;
pub mod chat_service;
pub mod notifier;
pub mod story_service;
