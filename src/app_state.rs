use tracing::{debug, info};

use crate::catalog::{self, Catalog};
use crate::config;
use crate::likes::{self, LikeCounts};
use crate::models::{Config, ContentRow, Movie, UserProfile};
use crate::notifications;
use crate::rows;
use crate::search;
use crate::storage::{
    KEY_LIKES, KEY_MY_LIST, KEY_NOTIFICATIONS_READ, KEY_USER_LIKES, Storage,
};

/// Everything the presentation layer can ask the core to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Play(String),
    ClosePlayer,
    SelectMovie(String),
    CloseModal,
    ToggleList(String),
    ToggleLike(String),
    Search(String),
    LogoClicked,
    ProfileClicked,
    NotificationsClicked,
    OpenSettings,
    CloseSettings,
    OpenHelp,
    CloseHelp,
    SignOut,
    ConfirmLogout,
    CancelLogout,
    MarkNotificationRead(String),
    MarkAllNotificationsRead,
    SaveSettings(Config),
}

/// What one render pass consumes. Recomputed from scratch on every
/// `derive()`; nothing here is cached or persisted.
#[derive(Debug, Clone)]
pub struct DerivedViews {
    /// Base catalog with effective like counts overlaid.
    pub catalog: Vec<Movie>,
    /// Final row list: optional leading My List row, Most Liked filled in.
    pub rows: Vec<ContentRow>,
    pub search_results: Vec<Movie>,
    pub suggestions: Vec<Movie>,
}

/// Central session state: the three persisted sets, the search query and
/// the overlay surfaces. All mutation goes through `handle`, which
/// mirrors persisted state in the same turn.
pub struct AppState {
    pub config: Config,
    pub profile: UserProfile,
    pub storage: Storage,

    pub my_list: Vec<String>,
    pub like_counts: LikeCounts,
    pub user_likes: Vec<String>,
    pub notifications_read: Vec<String>,

    pub search_query: String,
    pub now_playing: Option<Movie>,
    pub selected: Option<Movie>,
    pub show_profile_dropdown: bool,
    pub show_notification_dropdown: bool,
    pub show_settings: bool,
    pub show_help: bool,
    pub show_logout_confirm: bool,
}

impl AppState {
    pub fn new(mut storage: Storage, config: Config) -> Self {
        let my_list: Vec<String> = storage.get(KEY_MY_LIST);
        let like_counts: LikeCounts = storage.get(KEY_LIKES);
        let user_likes: Vec<String> = storage.get(KEY_USER_LIKES);
        let notifications_read: Vec<String> = storage.get(KEY_NOTIFICATIONS_READ);
        debug!(
            "session state loaded: {} listed, {} liked",
            my_list.len(),
            user_likes.len()
        );
        Self {
            config,
            profile: UserProfile::default(),
            storage,
            my_list,
            like_counts,
            user_likes,
            notifications_read,
            search_query: String::new(),
            now_playing: None,
            selected: None,
            show_profile_dropdown: false,
            show_notification_dropdown: false,
            show_settings: false,
            show_help: false,
            show_logout_confirm: false,
        }
    }

    pub fn open_default() -> Self {
        Self::new(Storage::open_default(), config::load_config())
    }

    pub fn catalog(&self) -> &'static Catalog {
        catalog::catalog()
    }

    pub fn in_my_list(&self, id: &str) -> bool {
        likes::contains(&self.my_list, id)
    }

    /// Drives the Like/Unlike button label.
    pub fn is_liked(&self, id: &str) -> bool {
        likes::contains(&self.user_likes, id)
    }

    pub fn unread_notifications(&self) -> usize {
        notifications::unread_count(notifications::notifications(), &self.notifications_read)
    }

    /// Apply one user intent. Synchronous: state mutation and the storage
    /// mirror write complete before this returns, so a derive() in the
    /// same turn already sees the new values.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Play(id) => {
                if let Some(movie) = self.catalog().find_movie(&id) {
                    info!("playing '{}'", movie.title);
                    self.now_playing = Some(movie.clone());
                } else {
                    debug!("play intent for unknown id '{}'", id);
                }
            }
            Intent::ClosePlayer => self.now_playing = None,
            Intent::SelectMovie(id) => {
                self.selected = self.catalog().find_movie(&id).cloned();
            }
            Intent::CloseModal => self.selected = None,
            Intent::ToggleList(id) => {
                self.my_list = likes::toggle_list(&id, &self.my_list);
                self.storage.set(KEY_MY_LIST, &self.my_list);
            }
            Intent::ToggleLike(id) => {
                let seed = self.catalog().seed_likes(&id);
                let (user_likes, like_counts) =
                    likes::toggle_like(&id, &self.user_likes, &self.like_counts, seed);
                self.user_likes = user_likes;
                self.like_counts = like_counts;
                // both halves mirrored in the same turn: a reader never
                // sees the count updated without the membership
                self.storage.set(KEY_LIKES, &self.like_counts);
                self.storage.set(KEY_USER_LIKES, &self.user_likes);
            }
            Intent::Search(query) => self.search_query = query,
            Intent::LogoClicked => self.search_query.clear(),
            Intent::ProfileClicked => {
                self.show_profile_dropdown = !self.show_profile_dropdown;
                self.show_notification_dropdown = false;
            }
            Intent::NotificationsClicked => {
                self.show_notification_dropdown = !self.show_notification_dropdown;
                self.show_profile_dropdown = false;
            }
            Intent::OpenSettings => {
                self.show_settings = true;
                self.show_profile_dropdown = false;
            }
            Intent::CloseSettings => self.show_settings = false,
            Intent::OpenHelp => {
                self.show_help = true;
                self.show_profile_dropdown = false;
            }
            Intent::CloseHelp => self.show_help = false,
            Intent::SignOut => {
                self.show_logout_confirm = true;
                self.show_profile_dropdown = false;
            }
            Intent::ConfirmLogout => {
                // no auth backend to clear; the overlay just closes
                info!("signing out");
                self.show_logout_confirm = false;
            }
            Intent::CancelLogout => self.show_logout_confirm = false,
            Intent::MarkNotificationRead(id) => {
                self.notifications_read = notifications::mark_read(&self.notifications_read, &id);
                self.storage
                    .set(KEY_NOTIFICATIONS_READ, &self.notifications_read);
            }
            Intent::MarkAllNotificationsRead => {
                self.notifications_read =
                    notifications::mark_all_read(notifications::notifications());
                self.storage
                    .set(KEY_NOTIFICATIONS_READ, &self.notifications_read);
            }
            Intent::SaveSettings(cfg) => {
                config::save_config_best_effort(&cfg);
                self.config = cfg;
                self.show_settings = false;
            }
        }
    }

    /// Recompute every derived surface from the static catalog plus the
    /// three state sets. Cheap at this dataset size; correctness must not
    /// depend on any memoization.
    pub fn derive(&self) -> DerivedViews {
        let catalog = self.catalog();
        let overlaid = rows::overlay_likes(&catalog.movies, &self.like_counts);
        let rows = rows::compose_rows(catalog, &self.my_list, &self.like_counts);
        let search_results = search::search_movies(&catalog.movies, &self.search_query);
        let suggestions = search::search_suggestions(&catalog.movies, &self.search_query);
        DerivedViews {
            catalog: overlaid,
            rows,
            search_results,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::MY_LIST_ROW_ID;

    fn fresh() -> AppState {
        AppState::new(Storage::in_memory(), Config::default())
    }

    #[test]
    fn like_unlike_round_trip_restores_seed() {
        // m2 ships with 87 seed likes
        let mut app = fresh();
        app.handle(Intent::ToggleLike("m2".to_string()));
        assert!(app.is_liked("m2"));
        assert_eq!(app.like_counts["m2"], 88);

        app.handle(Intent::ToggleLike("m2".to_string()));
        assert!(!app.is_liked("m2"));
        assert_eq!(app.like_counts["m2"], 87);
    }

    #[test]
    fn liking_a_seedless_movie_starts_at_one() {
        // m4 has no seed likes in the dataset
        let mut app = fresh();
        app.handle(Intent::ToggleLike("m4".to_string()));
        assert_eq!(app.like_counts["m4"], 1);
    }

    #[test]
    fn toggle_like_mirrors_both_keys_in_the_same_turn() {
        let mut app = fresh();
        app.handle(Intent::ToggleLike("m2".to_string()));
        let counts: LikeCounts = app.storage.get(KEY_LIKES);
        let members: Vec<String> = app.storage.get(KEY_USER_LIKES);
        assert_eq!(counts.get("m2"), Some(&88));
        assert_eq!(members, vec!["m2"]);
    }

    #[test]
    fn liked_count_shows_up_in_derived_views() {
        let mut app = fresh();
        app.handle(Intent::ToggleLike("m2".to_string()));
        let views = app.derive();
        let m2 = views.catalog.iter().find(|m| m.id == "m2").unwrap();
        assert_eq!(m2.likes, Some(88));
    }

    #[test]
    fn my_list_row_appears_and_disappears() {
        let mut app = fresh();
        assert!(app.derive().rows.iter().all(|r| r.id != MY_LIST_ROW_ID));

        app.handle(Intent::ToggleList("m6".to_string()));
        let views = app.derive();
        assert_eq!(views.rows[0].id, MY_LIST_ROW_ID);
        assert_eq!(views.rows[0].movies[0].id, "m6");

        app.handle(Intent::ToggleList("m6".to_string()));
        assert!(app.derive().rows.iter().all(|r| r.id != MY_LIST_ROW_ID));
    }

    #[test]
    fn row_only_movie_can_be_listed_and_liked() {
        let mut app = fresh();
        app.handle(Intent::ToggleList("c3".to_string()));
        app.handle(Intent::ToggleLike("c3".to_string()));
        let views = app.derive();
        let my_list_row = &views.rows[0];
        assert_eq!(my_list_row.movies[0].id, "c3");
        // c3 has no seed value; one like materialises as 1
        assert_eq!(my_list_row.movies[0].likes, Some(1));
    }

    #[test]
    fn search_intent_drives_results_and_suggestions() {
        let mut app = fresh();
        app.handle(Intent::Search("thriller".to_string()));
        let views = app.derive();
        assert!(!views.search_results.is_empty());
        assert!(views.suggestions.len() <= crate::search::SUGGESTION_LIMIT);

        app.handle(Intent::LogoClicked);
        assert!(app.search_query.is_empty());
        assert!(app.derive().search_results.is_empty());
    }

    #[test]
    fn play_and_select_resolve_across_catalog_and_rows() {
        let mut app = fresh();
        app.handle(Intent::Play("c1".to_string()));
        assert_eq!(app.now_playing.as_ref().unwrap().title, "Velvet Shadows");
        app.handle(Intent::Play("nope".to_string()));
        // unknown id leaves the player untouched
        assert!(app.now_playing.is_some());
        app.handle(Intent::ClosePlayer);
        assert!(app.now_playing.is_none());

        app.handle(Intent::SelectMovie("m1".to_string()));
        assert!(app.selected.as_ref().unwrap().is_featured);
    }

    #[test]
    fn dropdowns_are_mutually_exclusive() {
        let mut app = fresh();
        app.handle(Intent::ProfileClicked);
        assert!(app.show_profile_dropdown);
        app.handle(Intent::NotificationsClicked);
        assert!(app.show_notification_dropdown);
        assert!(!app.show_profile_dropdown);
        app.handle(Intent::NotificationsClicked);
        assert!(!app.show_notification_dropdown);
    }

    #[test]
    fn logout_flow_confirms_or_cancels() {
        let mut app = fresh();
        app.handle(Intent::ProfileClicked);
        app.handle(Intent::SignOut);
        assert!(app.show_logout_confirm);
        assert!(!app.show_profile_dropdown);
        app.handle(Intent::CancelLogout);
        assert!(!app.show_logout_confirm);

        app.handle(Intent::SignOut);
        app.handle(Intent::ConfirmLogout);
        assert!(!app.show_logout_confirm);
    }

    #[test]
    fn notification_read_state_updates_the_badge() {
        let mut app = fresh();
        let total = app.unread_notifications();
        assert!(total > 0);
        app.handle(Intent::MarkNotificationRead("n1".to_string()));
        assert_eq!(app.unread_notifications(), total - 1);
        app.handle(Intent::MarkAllNotificationsRead);
        assert_eq!(app.unread_notifications(), 0);
    }

    #[test]
    fn state_survives_reopening_the_storage() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let storage = Storage::open(tmp.path().to_path_buf());
            let mut app = AppState::new(storage, Config::default());
            app.handle(Intent::ToggleList("m3".to_string()));
            app.handle(Intent::ToggleLike("m3".to_string()));
        }
        let storage = Storage::open(tmp.path().to_path_buf());
        let app = AppState::new(storage, Config::default());
        assert!(app.in_my_list("m3"));
        assert!(app.is_liked("m3"));
        assert_eq!(app.like_counts["m3"], 204);
    }
}
