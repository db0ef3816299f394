use chrono::{Duration, Utc};
use once_cell::sync::Lazy;

use crate::likes::contains;
use crate::models::{Notification, NotificationKind};

// Seeded once per session; ages are relative to startup, which is close
// enough for a backend-less demo feed.
static NOTIFICATIONS: Lazy<Vec<Notification>> = Lazy::new(|| {
    let now = Utc::now();
    vec![
        Notification {
            id: "n1".to_string(),
            kind: NotificationKind::NewEpisode,
            title: "New Episode Available".to_string(),
            description: "Zero Day Protocol: the crew is back for another job.".to_string(),
            thumbnail: Some("https://picsum.photos/seed/m8/300/169".to_string()),
            created_at: now - Duration::hours(2),
        },
        Notification {
            id: "n2".to_string(),
            kind: NotificationKind::Recommendation,
            title: "Recommended for You".to_string(),
            description: "Because you watched Neon Horizon: Echoes of Tomorrow.".to_string(),
            thumbnail: Some("https://picsum.photos/seed/m10/300/169".to_string()),
            created_at: now - Duration::days(1),
        },
        Notification {
            id: "n3".to_string(),
            kind: NotificationKind::Reminder,
            title: "Continue Watching".to_string(),
            description: "Pick up The Last Lighthouse where you left off.".to_string(),
            thumbnail: Some("https://picsum.photos/seed/m2/300/169".to_string()),
            created_at: now - Duration::days(2),
        },
        Notification {
            id: "n4".to_string(),
            kind: NotificationKind::NewSeason,
            title: "New Season Added".to_string(),
            description: "Paper Planets returns with a new batch of worlds.".to_string(),
            thumbnail: Some("https://picsum.photos/seed/m6/300/169".to_string()),
            created_at: now - Duration::days(3),
        },
    ]
});

pub fn notifications() -> &'static [Notification] {
    &NOTIFICATIONS
}

/// Bell-badge count.
pub fn unread_count(all: &[Notification], read: &[String]) -> usize {
    all.iter().filter(|n| !contains(read, &n.id)).count()
}

/// Add one id to the persisted read set (idempotent).
pub fn mark_read(read: &[String], id: &str) -> Vec<String> {
    if contains(read, id) {
        read.to_vec()
    } else {
        let mut out = read.to_vec();
        out.push(id.to_string());
        out
    }
}

pub fn mark_all_read(all: &[Notification]) -> Vec<String> {
    all.iter().map(|n| n.id.clone()).collect()
}
