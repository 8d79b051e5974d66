//! Command line interface.
//!
//! Every management command follows the same shape: issue the call through
//! its service, render the result as a table or a ✅ summary, and let errors
//! propagate to `main`, which prints one ❌ banner and exits non-zero.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use dialoguer::{Confirm, Input};
use linguaboard_core::FilePart;

use crate::state::AppState;

pub mod auth;
pub mod domains;
pub mod languages;
pub mod lessons;
pub mod paragraphs;
pub mod parents;
pub mod sentences;
pub mod settings;
pub mod stats;
pub mod words;

#[derive(Debug, Parser)]
#[command(name = "linguaboard")]
#[command(about = "Linguaboard - Admin dashboard for the language-learning platform", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend origin, e.g. https://api.example.com
    #[arg(long, global = true, env = "LINGUABOARD_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Session file holding the sign-in token
    #[arg(long, global = true, env = "LINGUABOARD_SESSION_FILE")]
    pub session_file: Option<PathBuf>,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in as an administrator
    Signin {
        /// Email address (prompted if not provided)
        #[arg(short, long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session
    Signout,
    /// Show the signed-in administrator and account statistics
    Whoami,
    /// Headline statistics with the latest parents, languages and domains
    Overview,
    /// Platform statistics
    #[command(subcommand)]
    Stats(stats::StatsCommand),
    /// Manage parent accounts
    #[command(subcommand)]
    Parents(parents::ParentsCommand),
    /// Manage languages
    #[command(subcommand)]
    Languages(languages::LanguagesCommand),
    /// Manage domains
    #[command(subcommand)]
    Domains(domains::DomainsCommand),
    /// Manage lessons
    #[command(subcommand)]
    Lessons(lessons::LessonsCommand),
    /// Manage words
    #[command(subcommand)]
    Words(words::WordsCommand),
    /// Manage sentences
    #[command(subcommand)]
    Sentences(sentences::SentencesCommand),
    /// Manage fill-in-the-blank paragraphs
    #[command(subcommand)]
    Paragraphs(paragraphs::ParagraphsCommand),
    /// Show the effective configuration
    Settings,
}

/// Output options shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

pub async fn run(state: &AppState, command: Commands, output: Output) -> anyhow::Result<()> {
    match command {
        Commands::Signin { email, password } => auth::signin(state, email, password).await,
        Commands::Signout => auth::signout(state).await,
        Commands::Settings => settings::show(state, output),
        command => {
            state.require_auth().await?;
            run_authenticated(state, command, output).await
        }
    }
}

async fn run_authenticated(
    state: &AppState,
    command: Commands,
    output: Output,
) -> anyhow::Result<()> {
    match command {
        Commands::Whoami => auth::whoami(state, output).await,
        Commands::Overview => stats::overview(state, output).await,
        Commands::Stats(cmd) => stats::run(state, cmd, output).await,
        Commands::Parents(cmd) => parents::run(state, cmd, output).await,
        Commands::Languages(cmd) => languages::run(state, cmd, output).await,
        Commands::Domains(cmd) => domains::run(state, cmd, output).await,
        Commands::Lessons(cmd) => lessons::run(state, cmd, output).await,
        Commands::Words(cmd) => words::run(state, cmd, output).await,
        Commands::Sentences(cmd) => sentences::run(state, cmd, output).await,
        Commands::Paragraphs(cmd) => paragraphs::run(state, cmd, output).await,
        Commands::Signin { .. } | Commands::Signout | Commands::Settings => Ok(()),
    }
}

/// Returns `value`, prompting for it when absent.
pub(crate) fn text_or_prompt(value: Option<String>, prompt: &str) -> anyhow::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("Failed to read {}", prompt.to_lowercase())),
    }
}

/// Asks before a destructive action unless `--yes` was given.
pub(crate) fn confirm(assume_yes: bool, prompt: &str) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

/// Reads an image from disk and checks it against the upload limits.
pub(crate) async fn read_image(path: &Path) -> anyhow::Result<FilePart> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let part = FilePart::from_path_bytes(path, bytes);
    part.check_image()?;
    Ok(part)
}

pub(crate) async fn read_images(paths: &[PathBuf]) -> anyhow::Result<Vec<FilePart>> {
    let mut parts = Vec::with_capacity(paths.len());
    for path in paths {
        parts.push(read_image(path).await?);
    }
    Ok(parts)
}

/// 1-indexed page number from the command line to the 0-indexed page used
/// for slicing.
pub(crate) fn page_index(page: usize) -> usize {
    page.saturating_sub(1)
}

/// Prints the "Showing a-b of n" footer of a locally paginated listing.
pub(crate) fn print_page_footer<T>(page: &linguaboard_core::LocalPage<'_, T>) {
    println!("\n{}", page_footer(page));
}

fn page_footer<T>(page: &linguaboard_core::LocalPage<'_, T>) -> String {
    if page.total == 0 {
        return "No results.".to_string();
    }
    if page.items.is_empty() {
        return format!(
            "Page {} is past the end ({} results, {} pages).",
            page.page + 1,
            page.total,
            page.total_pages()
        );
    }
    let first = page.first_position();
    let mut footer = format!(
        "Showing {}-{} of {} (page {}/{})",
        first,
        first + page.items.len() - 1,
        page.total,
        page.page + 1,
        page.total_pages()
    );
    if page.has_previous() {
        footer.push_str(&format!("  prev: --page {}", page.page));
    }
    if page.has_more() {
        footer.push_str(&format!("  next: --page {}", page.page + 2));
    }
    footer
}
