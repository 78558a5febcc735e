//! Renderers turning the post list into text or HTML, plus the fixed
//! user-facing messages.

use std::fmt::{Display, Write};

use chrono::{DateTime, TimeZone, Utc};

use postboard_core::domain::Post;

pub const EMPTY_LIST_MESSAGE: &str = "You have no posts yet. Create one using the form.";
pub const UPDATE_NOT_FOUND: &str = "Failed to update: post not found.";
pub const DELETE_NOT_FOUND: &str = "Failed to delete: post not found.";
pub const POST_NOT_FOUND: &str = "Post not found.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Confirmation question shown before a delete.
pub fn delete_prompt(title: Option<&str>) -> String {
    let subject = match title {
        Some(t) if !t.is_empty() => format!("\"{t}\""),
        _ => "this post".to_string(),
    };
    format!("Delete {subject}? This action cannot be undone.")
}

/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// The "Created: … • Updated: …" line. The update part only appears for
/// edited posts.
pub fn meta_line<Tz>(post: &Post, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut line = format!("Created: {}", local_time(&post.created_at, tz));
    if post.is_edited() {
        line.push_str(" • Updated: ");
        line.push_str(&local_time(&post.updated_at, tz));
    }
    line
}

fn local_time<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

/// Render one post as a plain-text card.
pub fn render_post_text<Tz>(post: &Post, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut card = String::new();
    let _ = writeln!(card, "[{}] {}", post.id, post.title);
    let _ = writeln!(card, "{}", meta_line(post, tz));
    let _ = writeln!(card);
    for line in post.content.lines() {
        let _ = writeln!(card, "    {line}");
    }
    card
}

/// Render the list as plain-text cards separated by blank lines.
pub fn render_text<Tz>(posts: &[&Post], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if posts.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    posts
        .iter()
        .map(|post| render_post_text(post, tz))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one post as an `<article>` card with edit and delete buttons.
pub fn render_post_html<Tz>(post: &Post, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let id = escape_html(post.id.as_str());
    format!(
        concat!(
            "<article class=\"post\" data-id=\"{id}\">\n",
            "  <div class=\"meta\">{meta}</div>\n",
            "  <h3>{title}</h3>\n",
            "  <p class=\"content\">{content}</p>\n",
            "  <div class=\"post-buttons\">\n",
            "    <button class=\"edit-btn\" data-action=\"edit\" data-id=\"{id}\">Edit</button>\n",
            "    <button class=\"delete-btn\" data-action=\"delete\" data-id=\"{id}\">Delete</button>\n",
            "  </div>\n",
            "</article>\n",
        ),
        id = id,
        meta = escape_html(&meta_line(post, tz)),
        title = escape_html(&post.title),
        content = escape_html(&post.content),
    )
}

/// Render the list as the contents of the posts container.
pub fn render_html<Tz>(posts: &[&Post], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if posts.is_empty() {
        return format!("<div class=\"muted\">{EMPTY_LIST_MESSAGE}</div>\n");
    }

    posts.iter().map(|post| render_post_html(post, tz)).collect()
}
