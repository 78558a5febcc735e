//! Post handlers.

use std::io::{BufRead, Write};

use chrono::Local;

use postboard_core::PostStore;
use postboard_core::domain::{Draft, Post, PostId};
use postboard_shared::render::{
    self, DELETE_NOT_FOUND, POST_NOT_FOUND, render_html, render_post_html, render_post_text,
    render_text,
};
use postboard_shared::{ApiResponse, PostView};

use super::Console;
use crate::cli::OutputFormat;
use crate::error::{AppError, AppResult};

/// submit(title, content, none)
pub fn add(
    store: &mut PostStore,
    title: &str,
    content: &str,
    format: OutputFormat,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let post = store.submit(&Draft::new(title, content), None)?;
    write_outcome(&post, "Post created", format, console)
}

/// editRequested(id) followed by submit(title, content, Some(id)).
///
/// Fields left out keep the value the form was prefilled with.
pub fn edit(
    store: &mut PostStore,
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
    format: OutputFormat,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let id = PostId::new(id);

    let current = store
        .get(&id)
        .ok_or_else(|| AppError::not_found(POST_NOT_FOUND, id.to_string()))?;
    let draft = Draft::new(
        title.unwrap_or(&current.title),
        content.unwrap_or(&current.content),
    );

    let post = store.submit(&draft, Some(&id))?;
    write_outcome(&post, "Post updated", format, console)
}

/// deleteRequested(id): confirm, then delete.
pub fn delete(
    store: &mut PostStore,
    id: &str,
    assume_yes: bool,
    format: OutputFormat,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let id = PostId::new(id);
    let title = store.get(&id).map(|p| p.title.clone());

    if !assume_yes && !confirm(&render::delete_prompt(title.as_deref()), console)? {
        tracing::debug!(post_id = %id, "Delete cancelled");
        match format {
            OutputFormat::Json => {
                let body = ApiResponse::ok_with_message(id.to_string(), "Delete cancelled");
                writeln!(console.out, "{}", serde_json::to_string_pretty(&body)?)?;
            }
            OutputFormat::Text | OutputFormat::Html => writeln!(console.err, "Cancelled.")?,
        }
        return Ok(());
    }

    if !store.delete(&id) {
        return Err(AppError::not_found(DELETE_NOT_FOUND, id.to_string()));
    }

    match format {
        OutputFormat::Json => {
            let body = ApiResponse::ok_with_message(id.to_string(), "Post deleted");
            writeln!(console.out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        OutputFormat::Text | OutputFormat::Html => {
            writeln!(console.out, "Deleted post {id}")?;
        }
    }
    Ok(())
}

/// Render the whole list, newest first.
pub fn list(store: &PostStore, format: OutputFormat, console: &mut Console<'_>) -> AppResult<()> {
    let posts = store.list();

    match format {
        OutputFormat::Text => write!(console.out, "{}", render_text(&posts, &Local))?,
        OutputFormat::Html => write!(console.out, "{}", render_html(&posts, &Local))?,
        OutputFormat::Json => {
            let views: Vec<PostView> = posts.into_iter().map(PostView::from).collect();
            writeln!(
                console.out,
                "{}",
                serde_json::to_string_pretty(&ApiResponse::ok(views))?
            )?;
        }
    }
    Ok(())
}

pub fn show(
    store: &PostStore,
    id: &str,
    format: OutputFormat,
    console: &mut Console<'_>,
) -> AppResult<()> {
    let id = PostId::new(id);
    let post = store
        .get(&id)
        .ok_or_else(|| AppError::not_found(POST_NOT_FOUND, id.to_string()))?;

    write_post(post, format, console)
}

fn write_outcome(
    post: &Post,
    message: &str,
    format: OutputFormat,
    console: &mut Console<'_>,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => {
            let body = ApiResponse::ok_with_message(PostView::from(post), message);
            writeln!(console.out, "{}", serde_json::to_string_pretty(&body)?)?;
            Ok(())
        }
        OutputFormat::Text | OutputFormat::Html => {
            writeln!(console.err, "{message}.")?;
            write_post(post, format, console)
        }
    }
}

fn write_post(post: &Post, format: OutputFormat, console: &mut Console<'_>) -> AppResult<()> {
    match format {
        OutputFormat::Text => write!(console.out, "{}", render_post_text(post, &Local))?,
        OutputFormat::Html => write!(console.out, "{}", render_post_html(post, &Local))?,
        OutputFormat::Json => writeln!(
            console.out,
            "{}",
            serde_json::to_string_pretty(&ApiResponse::ok(PostView::from(post)))?
        )?,
    }
    Ok(())
}

/// Ask a yes/no question on stderr. Anything but "y"/"yes" is a no.
fn confirm(question: &str, console: &mut Console<'_>) -> AppResult<bool> {
    write!(console.err, "{question} [y/N] ")?;
    console.err.flush()?;

    let mut answer = String::new();
    console.input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
