//! Command handlers - translate user intents into store calls and store
//! state into rendered output.

mod posts;

use std::io::{BufRead, Write};

use postboard_core::PostStore;

use crate::cli::{Command, OutputFormat};
use crate::error::AppResult;

/// Where a handler writes results and prompts, and reads answers from.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub input: &'a mut dyn BufRead,
}

/// Run one command to completion.
pub fn dispatch(
    command: Command,
    store: &mut PostStore,
    format: OutputFormat,
    console: &mut Console<'_>,
) -> AppResult<()> {
    match command {
        Command::Add { title, content } => posts::add(store, &title, &content, format, console),
        Command::Edit { id, title, content } => posts::edit(
            store,
            &id,
            title.as_deref(),
            content.as_deref(),
            format,
            console,
        ),
        Command::Delete { id, yes } => posts::delete(store, &id, yes, format, console),
        Command::List => posts::list(store, format, console),
        Command::Show { id } => posts::show(store, &id, format, console),
    }
}
