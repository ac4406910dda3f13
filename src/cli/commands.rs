use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use tokio::runtime::{Builder, Runtime};

use crate::fetch::{DEFAULT_FETCH_DELAY, FetchConfig};
use crate::models::Story;
use crate::session::Session;
use crate::storage::{
    DEFAULT_SEARCH_TERM, JsonFileStore, KeyValueStore, MemoryStore, STORAGE_FILENAME, SearchTerm,
};
use crate::tui::{ERROR_TEXT, run_interactive};
use crate::utils::logging::LOG_FILENAME;
use crate::utils::{LogTarget, format_path_with_tilde, init_logging, resolve_data_dir, sanitize_line};

#[derive(Parser)]
#[command(name = "story-search")]
#[command(version = "0.1.0")]
#[command(about = "Search and prune a list of stories", long_about = None)]
pub struct Cli {
    /// Directory holding the remembered search term and the log file
    #[arg(long, global = true, env = "STORY_SEARCH_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// How long the simulated fetch takes
    #[arg(
        long,
        global = true,
        env = "STORY_SEARCH_DELAY_MS",
        value_name = "MS",
        default_value_t = DEFAULT_FETCH_DELAY.as_millis() as u64
    )]
    pub delay_ms: u64,

    /// Make the simulated fetch fail
    #[arg(
        long,
        global = true,
        env = "STORY_SEARCH_FAIL",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub fail: bool,

    /// Keep the search term in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the stories and print the ones matching the search term
    List {
        /// Search with this term (it is remembered for next time)
        #[arg(long)]
        term: Option<String>,
        /// Remove the story with this id before printing (repeatable)
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<u64>,
    },
    /// Show or change the remembered search term
    Term {
        #[command(subcommand)]
        action: Option<TermCommand>,
    },
}

#[derive(Subcommand)]
pub enum TermCommand {
    /// Remember a new search term
    Set { value: String },
    /// Forget the remembered term so the default applies again
    Reset,
}

impl Cli {
    fn fetch_config(&self) -> FetchConfig {
        FetchConfig { delay: Duration::from_millis(self.delay_ms), fail: self.fail }
    }

    fn open_storage(&self, data_dir: &Path) -> Result<Box<dyn KeyValueStore>> {
        if self.ephemeral {
            return Ok(Box::new(MemoryStore::new()));
        }
        Ok(Box::new(JsonFileStore::open(data_dir)?))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    match &cli.command {
        None => {
            init_file_logging(data_dir.join(LOG_FILENAME));
            run_tui(&cli, &data_dir)?;
        }
        Some(Commands::List { term, remove }) => {
            init_logging(LogTarget::Stderr)?;
            list_stories(&cli, &data_dir, term.as_deref(), remove)?;
        }
        Some(Commands::Term { action }) => {
            init_logging(LogTarget::Stderr)?;
            manage_term(&cli, &data_dir, action.as_ref())?;
        }
    }

    Ok(())
}

/// Log to `path` if possible; the interactive view still starts without a log file
fn init_file_logging(path: PathBuf) -> bool {
    match init_logging(LogTarget::File(path)) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            false
        }
    }
}

fn build_runtime() -> Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start async runtime")
}

fn run_tui(cli: &Cli, data_dir: &Path) -> Result<()> {
    let runtime = build_runtime()?;
    let mut session = Session::new(cli.open_storage(data_dir)?, cli.fetch_config());
    session.activate(runtime.handle());

    tracing::info!(data_dir = %data_dir.display(), "starting interactive session");
    run_interactive(session)
}

fn list_stories(cli: &Cli, data_dir: &Path, term: Option<&str>, remove: &[u64]) -> Result<()> {
    let runtime = build_runtime()?;
    let mut session = Session::new(cli.open_storage(data_dir)?, cli.fetch_config());
    if let Some(term) = term {
        session.set_search_term(term);
    }

    session.activate(runtime.handle());
    runtime.block_on(session.wait_for_fetch());

    if session.state().is_error {
        bail!(ERROR_TEXT);
    }

    for &object_id in remove {
        session.remove_story(object_id);
    }

    let visible = session.visible_stories();
    if visible.is_empty() {
        println!("No stories match \"{}\"", sanitize_line(session.search_term()));
        return Ok(());
    }

    for story in visible {
        println!("{}", format_story(story));
    }

    Ok(())
}

/// One-line rendering used by `list`
pub fn format_story(story: &Story) -> String {
    format!(
        "[{}] {} ({}) by {} | {} comments | {} points",
        story.object_id,
        sanitize_line(&story.title),
        sanitize_line(&story.url),
        sanitize_line(&story.author),
        story.num_comments,
        story.points
    )
}

fn manage_term(cli: &Cli, data_dir: &Path, action: Option<&TermCommand>) -> Result<()> {
    let mut term = SearchTerm::load_default(cli.open_storage(data_dir)?);

    match action {
        None => {
            println!("Search term: \"{}\"", sanitize_line(term.value()));
            if cli.ephemeral {
                println!("Stored in: memory");
            } else {
                println!("Stored in: {}", format_path_with_tilde(&data_dir.join(STORAGE_FILENAME)));
            }
        }
        Some(TermCommand::Set { value }) => {
            term.set(value.as_str()).context("Failed to save search term")?;
            println!("Search term set to \"{}\"", sanitize_line(term.value()));
        }
        Some(TermCommand::Reset) => {
            term.reset(DEFAULT_SEARCH_TERM).context("Failed to reset search term")?;
            println!("Search term reset to \"{}\"", DEFAULT_SEARCH_TERM);
        }
    }

    Ok(())
}
