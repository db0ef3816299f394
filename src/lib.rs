pub mod app_state;
pub mod catalog;
pub mod config;
pub mod helpers;
pub mod i18n;
pub mod likes;
pub mod logger;
pub mod models;
pub mod notifications;
pub mod rows;
pub mod search;
pub mod storage;

pub use app_state::{AppState, DerivedViews, Intent};
pub use models::*;
