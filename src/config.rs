use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::models::{Config, Language};
use crate::storage::data_dir;

fn config_file_path() -> PathBuf {
    data_dir().join("rustflix_config.txt")
}

pub fn parse_config(content: &str) -> Config {
    let mut cfg = Config::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        let v = v.trim();
        match k.trim() {
            "profile_name" => cfg.profile_name = v.to_string(),
            "email" => cfg.email = v.to_string(),
            "language" => cfg.language = Language::parse(v).unwrap_or_default(),
            "region" => cfg.region = v.to_string(),
            "theme" => cfg.theme = v.to_string(),
            "autoplay_trailers" => {
                cfg.autoplay_trailers = v.parse::<u8>().map(|n| n != 0).unwrap_or(true)
            }
            "playback_quality" => cfg.playback_quality = v.to_string(),
            "notify_new_episodes" => {
                cfg.notify_new_episodes = v.parse::<u8>().map(|n| n != 0).unwrap_or(true)
            }
            "notify_recommendations" => {
                cfg.notify_recommendations = v.parse::<u8>().map(|n| n != 0).unwrap_or(true)
            }
            "notify_reminders" => {
                cfg.notify_reminders = v.parse::<u8>().map(|n| n != 0).unwrap_or(true)
            }
            "notify_marketing" => {
                cfg.notify_marketing = v.parse::<u8>().map(|n| n != 0).unwrap_or(false)
            }
            _ => {}
        }
    }
    cfg
}

pub fn render_config(cfg: &Config) -> String {
    format!(
        "# rustflix settings\n\
         profile_name={}\n\
         email={}\n\
         language={}\n\
         region={}\n\
         theme={}\n\
         autoplay_trailers={}\n\
         playback_quality={}\n\
         notify_new_episodes={}\n\
         notify_recommendations={}\n\
         notify_reminders={}\n\
         notify_marketing={}\n",
        cfg.profile_name,
        cfg.email,
        cfg.language.as_str(),
        cfg.region,
        cfg.theme,
        u8::from(cfg.autoplay_trailers),
        cfg.playback_quality,
        u8::from(cfg.notify_new_episodes),
        u8::from(cfg.notify_recommendations),
        u8::from(cfg.notify_reminders),
        u8::from(cfg.notify_marketing),
    )
}

/// Read the settings file, falling back to defaults when it is missing
/// or unreadable.
pub fn load_config() -> Config {
    match fs::read_to_string(config_file_path()) {
        Ok(s) => parse_config(&s),
        Err(_) => Config::default(),
    }
}

pub fn save_config(cfg: &Config) -> Result<(), io::Error> {
    let path = config_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_config(cfg))
}

/// Save, logging instead of failing; settings then live in memory only
/// for the rest of the session.
pub fn save_config_best_effort(cfg: &Config) {
    if let Err(e) = save_config(cfg) {
        warn!("could not save settings: {}", e);
    }
}
