use super::app_config::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ainote",
    version,
    about = "Note pad helpers: validation, drafts, AI summaries and regeneration quotas",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Directory holding drafts and usage records.
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// AI model name.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Regenerations allowed per user per day.
    #[arg(long, global = true)]
    pub daily_limit: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether an email address is well formed.
    CheckEmail { email: String },

    /// Score a password from 0 to 5.
    PasswordStrength {
        /// Password to score; read from the environment to keep it out of shell history.
        #[arg(env = "AINOTE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show a timestamp relative to now.
    FormatDate {
        /// RFC 3339 timestamp, epoch milliseconds or YYYY-MM-DD.
        timestamp: String,
    },

    /// Shorten text to a number of characters.
    Truncate {
        text: String,
        #[arg(long, default_value_t = 100)]
        max_len: usize,
    },

    /// Classify an authentication error.
    ClassifyError {
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        status: Option<u16>,
    },

    /// Manage the unsaved note draft.
    #[command(subcommand)]
    Draft(DraftCommand),

    /// Summarize and tag a note.
    Summarize(NoteArgs),

    /// Regenerate insights for a note, counted against the daily limit.
    Regenerate {
        #[arg(long)]
        user: String,
        #[command(flatten)]
        note: NoteArgs,
        /// Confirm without prompting.
        #[arg(long)]
        yes: bool,
    },

    /// Show today's regeneration usage.
    Usage {
        #[arg(long)]
        user: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum DraftCommand {
    /// Save a draft, replacing the previous one.
    Save {
        #[arg(long)]
        user: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Print the saved draft.
    Show {
        #[arg(long)]
        user: String,
    },
    /// Delete the saved draft.
    Clear {
        #[arg(long)]
        user: String,
    },
}

#[derive(Debug, Args)]
pub struct NoteArgs {
    /// Note title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Note body.
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the note body from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}
