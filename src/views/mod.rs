// Minimal server-rendered HTML. Styling and charts are the front end's job.

use axum::response::Html;

use crate::auth::User;
use crate::database::{Activity, JournalEntry};

const NAV: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/journal", "Journal"),
    ("/chat", "Chat"),
    ("/activities", "Activities"),
    ("/insights", "Insights"),
];

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Page shell. `user` controls whether the app navigation is shown.
pub fn layout(title: &str, user: Option<&User>, body: &str) -> Html<String> {
    let nav = match user {
        Some(user) => {
            let links: String = NAV
                .iter()
                .map(|(href, label)| format!(r#"<a href="{}">{}</a>"#, href, label))
                .collect();
            format!(
                r#"<nav>{}<span class="user">{}</span><form method="post" action="/auth/signout"><button type="submit">Sign out</button></form></nav>"#,
                links,
                escape(user.display_name())
            )
        }
        None => String::new(),
    };

    Html(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{} | Mindwell</title></head><body>{}<main>{}</main></body></html>",
        escape(title),
        nav,
        body
    ))
}

/// Rendered by protected pages when no session is present
pub fn sign_in_prompt(login_path: &str) -> Html<String> {
    layout(
        "Sign in required",
        None,
        &format!(
            r#"<section class="auth-prompt"><h1>Please sign in</h1><p>You need to be signed in to view this page.</p><a href="{}">Sign in</a></section>"#,
            escape(login_path)
        ),
    )
}

pub fn not_found(what: &str) -> Html<String> {
    layout(
        "Not found",
        None,
        &format!(
            r#"<section class="not-found"><h1>Not found</h1><p>{} could not be found.</p><a href="/dashboard">Back to dashboard</a></section>"#,
            escape(what)
        ),
    )
}

pub fn error_page(user: Option<&User>, message: &str) -> Html<String> {
    layout(
        "Something went wrong",
        user,
        &format!(r#"<section class="error"><h1>Something went wrong</h1><p>{}</p></section>"#, escape(message)),
    )
}

pub fn login_form(error: Option<&str>) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    layout(
        "Sign in",
        None,
        &format!(
            r#"<h1>Sign in</h1>{}<form method="post" action="/login"><label>Email <input type="email" name="email" required></label><label>Password <input type="password" name="password" required></label><button type="submit">Sign in</button></form>"#,
            error
        ),
    )
}

pub fn journal_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "<p>No journal entries yet.</p>".to_string();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<li><a href="/journal/{}">{}</a> <time>{}</time></li>"#,
                e.id,
                escape(&e.title),
                e.created_at.format("%Y-%m-%d")
            )
        })
        .collect();
    format!("<ul class=\"journal\">{}</ul>", items)
}

pub fn journal_entry(entry: &JournalEntry) -> String {
    let mood = entry
        .mood
        .as_deref()
        .map(|m| format!(r#"<p class="mood">Mood: {}</p>"#, escape(m)))
        .unwrap_or_default();
    format!(
        "<article><h1>{}</h1><time>{}</time>{}<p>{}</p></article>",
        escape(&entry.title),
        entry.created_at.format("%Y-%m-%d %H:%M"),
        mood,
        escape(&entry.content)
    )
}

pub fn activity_list(activities: &[Activity]) -> String {
    if activities.is_empty() {
        return "<p>No activities found.</p>".to_string();
    }
    let items: String = activities
        .iter()
        .map(|a| {
            let minutes = a
                .duration_minutes
                .map(|m| format!(" ({} min)", m))
                .unwrap_or_default();
            format!(
                r#"<li><strong>{}</strong>{} <span class="category">{}</span><p>{}</p></li>"#,
                escape(&a.title),
                minutes,
                escape(&a.category),
                escape(a.description.as_deref().unwrap_or(""))
            )
        })
        .collect();
    format!("<ul class=\"activities\">{}</ul>", items)
}
