use crate::models::Language;

/// Localized UI label lookup; unknown keys fall through unchanged.
pub fn t(key: &str, lang: Language) -> String {
    match (key, lang) {
        // Browse surfaces
        ("my_list", Language::English) => "My List",
        ("my_list", Language::Italian) => "La mia lista",
        ("most_liked", Language::English) => "Most Liked",
        ("most_liked", Language::Italian) => "I più apprezzati",
        ("search", Language::English) => "Search",
        ("search", Language::Italian) => "Cerca",
        ("play", Language::English) => "Play",
        ("play", Language::Italian) => "Riproduci",
        ("more_info", Language::English) => "More Info",
        ("more_info", Language::Italian) => "Altre info",
        ("like", Language::English) => "Like",
        ("like", Language::Italian) => "Mi piace",
        ("unlike", Language::English) => "Unlike",
        ("unlike", Language::Italian) => "Non mi piace più",

        // Account menu
        ("notifications", Language::English) => "Notifications",
        ("notifications", Language::Italian) => "Notifiche",
        ("settings", Language::English) => "Settings",
        ("settings", Language::Italian) => "Impostazioni",
        ("help_center", Language::English) => "Help Center",
        ("help_center", Language::Italian) => "Centro assistenza",
        ("sign_out", Language::English) => "Sign out",
        ("sign_out", Language::Italian) => "Esci",

        // Settings tabs
        ("account", Language::English) => "Account",
        ("account", Language::Italian) => "Account",
        ("privacy", Language::English) => "Privacy",
        ("privacy", Language::Italian) => "Privacy",
        ("language", Language::English) => "Language",
        ("language", Language::Italian) => "Lingua",
        ("appearance", Language::English) => "Appearance",
        ("appearance", Language::Italian) => "Aspetto",
        ("playback", Language::English) => "Playback",
        ("playback", Language::Italian) => "Riproduzione",

        // Notification toggles
        ("new_episodes", Language::English) => "New episodes",
        ("new_episodes", Language::Italian) => "Nuovi episodi",
        ("recommendations", Language::English) => "Recommendations",
        ("recommendations", Language::Italian) => "Raccomandazioni",
        ("reminders", Language::English) => "Reminders",
        ("reminders", Language::Italian) => "Promemoria",
        ("marketing_email", Language::English) => "Marketing email",
        ("marketing_email", Language::Italian) => "Email marketing",

        _ => key,
    }
    .to_string()
}
