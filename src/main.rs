//! # Critique CLI Entry Point
//!
//! Opens a code-review document in a full-screen terminal viewer.
//!
//! ## Usage
//!
//! ```bash
//! # Read a review from a file
//! critique review.json
//!
//! # Pipe a review in on stdin
//! generate-review | critique
//!
//! # Start on the third section with a different theme
//! critique review.json --section 3 --theme nord
//!
//! # Debug mode - print the review outline and exit
//! critique review.json --debug
//! ```
//!
//! ## Key Bindings
//!
//! ### Overview
//! - `j` / `Down` - Select next section
//! - `k` / `Up` - Select previous section
//! - `Enter` - Open the selected section
//! - `Esc` / `q` - Quit
//!
//! ### Section detail
//! - `j` / `k` - Scroll down/up by line
//! - `h` / `l` - Scroll code left/right
//! - `Esc` - Back to the overview
//! - `q` - Quit

use critique::logging;
use critique::review::{load_review, ReviewSource};
use critique::ui::app::SessionSettings;
use critique::ui::config::Config;
use critique::ui::runner::{run_app, CrosstermEventReader};
use critique::ui::theme::{PlainStyler, Styler, Theme};
use critique::ui::App;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;

/// Critique - browse a structured code review in the terminal
#[derive(Parser, Debug)]
#[command(name = "critique")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal viewer for structured code reviews", long_about = None)]
struct Args {
    /// Review JSON file to open ("-" or omitted reads standard input)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Section selected when the overview opens (1-based)
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    section: usize,

    /// Color theme, overriding the config file
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Disable colors
    // a non-empty NO_COLOR in the environment does the same
    #[arg(long)]
    no_color: bool,

    /// Write logs to this file instead of the cache directory
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the review outline and exit
    #[arg(long)]
    debug: bool,

    /// List built-in themes and exit
    #[arg(long)]
    list_themes: bool,
}

impl Args {
    fn colors_disabled(&self) -> bool {
        self.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }

    /// CLI theme wins over the config file.
    fn styler(&self, config: &Config) -> Box<dyn Styler> {
        if self.colors_disabled() {
            return Box::new(PlainStyler);
        }
        let config = match &self.theme {
            Some(name) => Config {
                theme: name.clone(),
                ..config.clone()
            },
            None => config.clone(),
        };
        Box::new(config.resolve_theme().clone())
    }

    fn session_settings(&self, config: &Config) -> SessionSettings {
        SessionSettings {
            initial_section: self.section.saturating_sub(1),
            tick: config.scroll_interval(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    let log_path = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_path) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let config = Config::load();

    let source = ReviewSource::from_arg(args.file.as_deref());
    let review = load_review(&source)
        .await
        .with_context(|| format!("Failed to load review from {source}"))?;

    if args.debug {
        print!("{}", review.outline());
        return Ok(());
    }

    let mut app = App::new(review, args.styler(&config), args.session_settings(&config));

    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}
