use std::collections::HashMap;

/// Live like counts, movie id -> count. Absent entries fall back to the
/// movie's seed value, then to zero.
pub type LikeCounts = HashMap<String, u32>;

/// The count used for display and sorting: live value if present, else
/// the catalog seed, else 0.
pub fn effective_likes(id: &str, seed: Option<u32>, counts: &LikeCounts) -> u32 {
    counts
        .get(id)
        .copied()
        .or(seed)
        .unwrap_or(0)
}

/// Presence test on a Vec-backed id set.
pub fn contains(set: &[String], id: &str) -> bool {
    set.iter().any(|x| x == id)
}

/// Flip one movie's like. Returns the new (user-like set, like counts)
/// pair; inputs are untouched. Liking bumps the effective count by one,
/// unliking drops it with a floor at zero.
pub fn toggle_like(
    id: &str,
    user_likes: &[String],
    counts: &LikeCounts,
    seed: Option<u32>,
) -> (Vec<String>, LikeCounts) {
    let current = effective_likes(id, seed, counts);
    let mut new_counts = counts.clone();
    if contains(user_likes, id) {
        let new_likes: Vec<String> = user_likes.iter().filter(|x| *x != id).cloned().collect();
        new_counts.insert(id.to_string(), current.saturating_sub(1));
        (new_likes, new_counts)
    } else {
        let mut new_likes = user_likes.to_vec();
        new_likes.push(id.to_string());
        new_counts.insert(id.to_string(), current + 1);
        (new_likes, new_counts)
    }
}

/// Flip my-list membership: add if absent, remove if present. No
/// interaction with like state.
pub fn toggle_list(id: &str, my_list: &[String]) -> Vec<String> {
    if contains(my_list, id) {
        my_list.iter().filter(|x| *x != id).cloned().collect()
    } else {
        let mut out = my_list.to_vec();
        out.push(id.to_string());
        out
    }
}
