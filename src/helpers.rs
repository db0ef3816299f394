use chrono::{DateTime, Utc};

use crate::models::Movie;

/// Thousands-separated like count for card badges ("12,345").
pub fn format_like_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// First `n` genre tags joined for one-line summaries, e.g. the header
/// suggestion "2023 • Sci-Fi, Thriller".
pub fn genre_summary(movie: &Movie, n: usize) -> String {
    movie
        .genre
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Coarse "2 hours ago" style age for the notification feed.
pub fn relative_time(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - ts).num_seconds().max(0);
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    if days >= 2 {
        format!("{} days ago", days)
    } else if days == 1 {
        "1 day ago".to_string()
    } else if hours >= 2 {
        format!("{} hours ago", hours)
    } else if hours == 1 {
        "1 hour ago".to_string()
    } else if mins >= 2 {
        format!("{} minutes ago", mins)
    } else {
        "just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn like_counts_get_separators() {
        assert_eq!(format_like_count(0), "0");
        assert_eq!(format_like_count(301), "301");
        assert_eq!(format_like_count(1234), "1,234");
        assert_eq!(format_like_count(1234567), "1,234,567");
    }

    #[test]
    fn genre_summary_takes_first_n() {
        let m = Movie {
            genre: vec!["Animation".into(), "Family".into(), "Fantasy".into()],
            ..Movie::default()
        };
        assert_eq!(genre_summary(&m, 2), "Animation, Family");
        assert_eq!(genre_summary(&m, 5), "Animation, Family, Fantasy");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
    }
}
