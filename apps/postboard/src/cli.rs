//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "postboard")]
#[command(about = "Keep short notes in a local store", long_about = None)]
pub struct Cli {
    /// Directory holding the post slot (overrides POSTBOARD_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage slot name (overrides POSTBOARD_SLOT)
    #[arg(long, global = true)]
    pub slot: Option<String>,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log store activity to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a post
    Add {
        #[arg(long, short)]
        title: String,
        #[arg(long, short)]
        content: String,
    },
    /// Edit a post; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long, short)]
        title: Option<String>,
        #[arg(long, short)]
        content: Option<String>,
    },
    /// Delete a post
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List posts, newest first
    List,
    /// Show a single post
    Show { id: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_with_partial_fields() {
        let cli = Cli::parse_from(["postboard", "edit", "abc", "--title", "New"]);
        assert_eq!(
            cli.command,
            Command::Edit {
                id: "abc".to_string(),
                title: Some("New".to_string()),
                content: None,
            }
        );
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["postboard", "list", "--format", "json", "--slot", "drafts"]);
        assert_eq!(cli.command, Command::List);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.slot.as_deref(), Some("drafts"));
    }
}
