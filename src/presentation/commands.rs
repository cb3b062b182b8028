//! Command dispatch for the `ainote` binary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{debug, info};

use crate::application::services::{DraftService, format_date_str, truncate_text};
use crate::application::use_cases::NoteInsightsUseCase;
use crate::domain::entities::{
    NoteContent, UserId, calculate_password_strength, get_password_strength_level,
    is_valid_email,
};
use crate::domain::errors::{AuthFailure, handle_auth_error};
use crate::domain::ports::{KeyValueStore, UsagePort};
use crate::domain::services::RegenerationGate;
use crate::infrastructure::ai::GeminiClient;
use crate::infrastructure::config::{AppConfig, Command, DraftCommand, NoteArgs};
use crate::infrastructure::storage::FileKeyValueStore;
use crate::infrastructure::usage::StoreUsageTracker;

use super::render;

/// Runs parsed commands against the configured stores and AI backend.
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Executes one command and prints its result.
    ///
    /// # Errors
    /// Returns error if storage cannot be opened, input cannot be read, or an
    /// AI request fails.
    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::CheckEmail { email } => {
                println!("{}", render::email_check(&email, is_valid_email(&email)));
            }
            Command::PasswordStrength { password } => {
                let score = calculate_password_strength(&password);
                println!(
                    "{}",
                    render::password_strength(score, get_password_strength_level(score))
                );
            }
            Command::FormatDate { timestamp } => {
                let formatted = format_date_str(&timestamp)
                    .ok_or_else(|| eyre!("unrecognized timestamp: {timestamp}"))?;
                println!("{formatted}");
            }
            Command::Truncate { text, max_len } => {
                println!("{}", truncate_text(&text, max_len));
            }
            Command::ClassifyError { message, status } => {
                let failure = AuthFailure { message, status };
                println!("{}", render::classified_error(&handle_auth_error(&failure)));
            }
            Command::Draft(draft) => self.run_draft(draft)?,
            Command::Summarize(note) => {
                let note = read_note(note).await?;
                let insights = self.insights_use_case()?.summarize(&note).await?;
                println!("{}", render::insights(&insights));
            }
            Command::Regenerate { user, note, yes } => {
                let user_id = parse_user(&user)?;
                let note = read_note(note).await?;
                self.run_regenerate(&user_id, &note, yes).await?;
            }
            Command::Usage { user } => {
                let user_id = parse_user(&user)?;
                let quota = self.usage_tracker()?.regeneration_quota(&user_id).await?;
                println!("{}", render::usage(quota));
            }
        }
        Ok(())
    }

    fn run_draft(&self, command: DraftCommand) -> Result<()> {
        let drafts = DraftService::new(self.open_store()?);

        match command {
            DraftCommand::Save {
                user,
                title,
                content,
            } => {
                let user_id = parse_user(&user)?;
                if drafts.save_draft(&user_id, &title, &content) {
                    println!("Draft saved.");
                } else {
                    println!("Draft not saved.");
                }
            }
            DraftCommand::Show { user } => {
                let user_id = parse_user(&user)?;
                match drafts.get_draft(&user_id) {
                    Some(draft) => println!("{}", render::draft(&draft, Utc::now())),
                    None => println!("No draft."),
                }
            }
            DraftCommand::Clear { user } => {
                let user_id = parse_user(&user)?;
                drafts.clear_draft(&user_id);
                println!("Draft cleared.");
            }
        }
        Ok(())
    }

    async fn run_regenerate(&self, user_id: &UserId, note: &NoteContent, yes: bool) -> Result<()> {
        let use_case = self.insights_use_case()?;
        let mut gate = RegenerationGate::new();

        let quota = use_case.prepare_regeneration(user_id, &mut gate).await?;
        let prompt = render::regeneration_prompt(quota);

        let confirmed = if yes {
            println!("{prompt}");
            true
        } else {
            ask_confirmation(&prompt)?
        };

        if !confirmed {
            gate.close()?;
            info!(user_id = %user_id, "Regeneration cancelled");
            println!("Cancelled.");
            return Ok(());
        }

        let insights = use_case
            .confirm_regeneration(user_id, note, &mut gate)
            .await?;
        println!("{}", render::insights(&insights));
        Ok(())
    }

    fn data_dir(&self) -> Result<PathBuf> {
        self.config
            .effective_data_dir()
            .ok_or_else(|| eyre!("could not determine a data directory; pass --data-dir"))
    }

    fn open_store(&self) -> Result<Arc<dyn KeyValueStore>> {
        let dir = self.data_dir()?;
        debug!(path = %dir.display(), "Opening data store");
        let store = FileKeyValueStore::open(&dir)
            .wrap_err_with(|| format!("failed to open data store at {}", dir.display()))?;
        Ok(Arc::new(store))
    }

    fn usage_tracker(&self) -> Result<Arc<StoreUsageTracker>> {
        Ok(Arc::new(StoreUsageTracker::new(
            self.open_store()?,
            self.config.regeneration.daily_limit,
        )))
    }

    fn insights_use_case(&self) -> Result<NoteInsightsUseCase> {
        let client = GeminiClient::from_env(&self.config.ai)?;
        Ok(NoteInsightsUseCase::new(
            Arc::new(client),
            self.usage_tracker()?,
        ))
    }
}

fn parse_user(raw: &str) -> Result<UserId> {
    UserId::new(raw).ok_or_else(|| eyre!("user id must not be blank"))
}

async fn read_note(args: NoteArgs) -> Result<NoteContent> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .wrap_err_with(|| format!("failed to read note from {}", path.display()))?,
        (None, None) => String::new(),
    };
    Ok(NoteContent::new(args.title, content))
}

fn ask_confirmation(prompt: &str) -> Result<bool> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{prompt} [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
