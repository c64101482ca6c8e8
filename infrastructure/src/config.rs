use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub struct Config {
    pub base_url: String,
    pub chat_path: String,
    pub story_path: String,
    pub catalog_path: PathBuf,
    pub export_dir: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        Self {
            base_url: get("MARKETPLACE_BASE_URL", "http://localhost:5000"),
            chat_path: get("MARKETPLACE_CHAT_PATH", "/api/chat"),
            story_path: get("MARKETPLACE_STORY_PATH", "/generate_story"),
            catalog_path: PathBuf::from(get("MARKETPLACE_CATALOG", "products.json")),
            export_dir: PathBuf::from(get("MARKETPLACE_EXPORT_DIR", ".")),
        }
    }
}
