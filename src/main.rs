// Headless shell for the rustflix core: renders the derived views as text
// and feeds typed commands back in as intents. Stands in for the real
// presentation layer, which is replaceable by design.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use rustflix::app_state::{AppState, Intent};
use rustflix::helpers::{format_like_count, genre_summary, relative_time};
use rustflix::i18n::t;
use rustflix::{logger, notifications};

fn print_movie_line(m: &rustflix::models::Movie, app: &AppState) {
    let mut flags = String::new();
    if app.in_my_list(&m.id) {
        flags.push('+');
    }
    if app.is_liked(&m.id) {
        flags.push('*');
    }
    println!(
        "    [{:>3}] {:<28} {} {}  ♥{}  {}",
        m.id,
        m.title,
        m.year,
        m.rating,
        format_like_count(m.likes.unwrap_or(0)),
        flags
    );
}

fn print_home(app: &AppState) {
    let views = app.derive();
    let lang = app.config.language;

    if !app.search_query.is_empty() {
        println!("Results for \"{}\":", app.search_query);
        if views.search_results.is_empty() {
            println!("    (no matches)");
        }
        for m in &views.search_results {
            print_movie_line(m, app);
        }
        return;
    }

    if let Some(featured) = app.catalog().featured() {
        println!(
            "== {} ({}) — {}",
            featured.title,
            featured.year,
            genre_summary(featured, 3)
        );
        println!("   {}", featured.description);
    }
    for row in &views.rows {
        println!("\n-- {}", row.title);
        for m in &row.movies {
            print_movie_line(m, app);
        }
    }
    if let Some(playing) = &app.now_playing {
        println!("\n[{}] {} — {}", t("play", lang), playing.title, playing.video_url);
    }
    if let Some(selected) = &app.selected {
        let like_label = if app.is_liked(&selected.id) {
            t("unlike", lang)
        } else {
            t("like", lang)
        };
        println!(
            "\n## {} — {} — ♥{} [{}]",
            selected.title,
            selected.duration,
            format_like_count(selected.likes.unwrap_or(0)),
            like_label
        );
    }
}

fn print_notifications(app: &AppState) {
    let now = Utc::now();
    let lang = app.config.language;
    println!("{} ({} unread)", t("notifications", lang), app.unread_notifications());
    for n in notifications::notifications() {
        let marker = if rustflix::likes::contains(&app.notifications_read, &n.id) {
            ' '
        } else {
            '•'
        };
        println!(
            "  {} [{}] {} — {} ({})",
            marker,
            n.id,
            n.title,
            n.description,
            relative_time(n.created_at, now)
        );
    }
}

const HELP: &str = "commands: home | search <text> | clear | like <id> | list <id> | \
play <id> | stop | info <id> | close | bell | read <id> | readall | quit";

fn main() {
    logger::init();
    let mut app = AppState::open_default();
    println!("rustflix — {}", HELP);
    print_home(&app);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let line = line.trim();
        let (cmd, arg) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };
        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "home" => app.handle(Intent::LogoClicked),
            "search" => app.handle(Intent::Search(arg.to_string())),
            "clear" => app.handle(Intent::LogoClicked),
            "like" => app.handle(Intent::ToggleLike(arg.to_string())),
            "list" => app.handle(Intent::ToggleList(arg.to_string())),
            "play" => app.handle(Intent::Play(arg.to_string())),
            "stop" => app.handle(Intent::ClosePlayer),
            "info" => app.handle(Intent::SelectMovie(arg.to_string())),
            "close" => app.handle(Intent::CloseModal),
            "bell" => {
                app.handle(Intent::NotificationsClicked);
                print_notifications(&app);
                continue;
            }
            "read" => app.handle(Intent::MarkNotificationRead(arg.to_string())),
            "readall" => app.handle(Intent::MarkAllNotificationsRead),
            other => {
                println!("unknown command '{}' — {}", other, HELP);
                continue;
            }
        }
        print_home(&app);
    }
}
