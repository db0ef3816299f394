use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single title in the catalog. `likes` is the seed value shipped with
/// the dataset; the live per-session count lives in `LikeCounts` and wins
/// whenever present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub backdrop: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub likes: Option<u32>,
}

/// Named, ordered grouping of movies for horizontal browsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    NewEpisode,
    Recommendation,
    Reminder,
    NewSeason,
}

/// One entry in the bell feed. Seeded in-process; only the read-state id
/// set is persisted, so nothing here needs to serialize.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The signed-in demo account shown in the profile dropdown. There is no
/// auth backend; this is static session data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub plan: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Demo User".to_string(),
            email: "demo@rustflix.local".to_string(),
            avatar: "https://i.pravatar.cc/96?u=rustflix".to_string(),
            plan: "Premium".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" | "english" => Some(Language::English),
            "it" | "italian" => Some(Language::Italian),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Italian => "it",
        }
    }
}

/// App configuration persisted as a key=value text file (see config.rs).
/// Fields mirror the settings surface: account, notifications, language,
/// appearance, playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub profile_name: String,
    pub email: String,
    pub language: Language,
    pub region: String,
    pub theme: String, // "dark" | "light"
    pub autoplay_trailers: bool,
    pub playback_quality: String, // "auto" | "high" | "data_saver"
    pub notify_new_episodes: bool,
    pub notify_recommendations: bool,
    pub notify_reminders: bool,
    pub notify_marketing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_name: "Demo User".to_string(),
            email: "demo@rustflix.local".to_string(),
            language: Language::English,
            region: "US".to_string(),
            theme: "dark".to_string(),
            autoplay_trailers: true,
            playback_quality: "auto".to_string(),
            notify_new_episodes: true,
            notify_recommendations: true,
            notify_reminders: true,
            notify_marketing: false,
        }
    }
}
