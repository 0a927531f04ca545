//! confdiff - review configuration changes before publishing them.

use std::io::{self, IsTerminal, Write};
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use confdiff::cli::{write_json, write_listing, Labels};
use confdiff::core::{Algorithm, Config, DiffResult, DocumentSource, TieBreak};
use confdiff::logging::{self, LogTarget};
use confdiff::theme::Theme;
use confdiff::ui::{handle_input, render, App};

/// Review configuration changes before publishing them.
#[derive(Parser, Debug)]
#[command(name = "confdiff", version, about)]
struct Cli {
    /// Currently published document (`-` for stdin)
    #[arg(value_name = "BEFORE")]
    before: String,

    /// Pending document (`-` for stdin)
    #[arg(value_name = "AFTER")]
    after: String,

    /// Print the diff instead of opening the viewer
    #[arg(long)]
    print: bool,

    /// Print the diff as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in print mode
    #[arg(long = "no-color")]
    no_color: bool,

    /// Lines searched ahead when resynchronizing (lookahead algorithm)
    #[arg(short = 'w', long = "window", value_name = "N")]
    window: Option<usize>,

    /// Alignment algorithm (lookahead, myers)
    #[arg(long, value_name = "ALGORITHM")]
    algorithm: Option<Algorithm>,

    /// Side that wins when both could resynchronize (insertion, deletion)
    #[arg(long, value_name = "SIDE")]
    prefer: Option<TieBreak>,

    /// Color theme (default, everforest, or a user theme)
    #[arg(short = 't', long = "theme", value_name = "THEME")]
    theme: Option<String>,

    /// Reload when either file changes (viewer only)
    #[arg(long, conflicts_with_all = ["print", "json"])]
    watch: bool,

    /// Label for the before document in print mode
    #[arg(long = "label-before", value_name = "LABEL")]
    label_before: Option<String>,

    /// Label for the after document in print mode
    #[arg(long = "label-after", value_name = "LABEL")]
    label_after: Option<String>,
}

impl Cli {
    /// Config file values overridden by explicit flags.
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(window) = self.window {
            config.lookahead_window = window;
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(prefer) = self.prefer {
            config.tie_break = prefer;
        }
        if let Some(ref theme) = self.theme {
            config.theme = theme.clone();
        }
        if self.no_color {
            config.color = false;
        }
        config
    }

    fn interactive(&self) -> bool {
        let uses_stdin = self.before == "-" || self.after == "-";
        !(self.print || self.json || uses_stdin) && io::stdout().is_terminal()
    }
}

/// RAII guard for terminal state. Restores terminal on drop (including panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Disable mouse capture first (while still in raw mode)
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = io::stdout().flush();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    confdiff::metrics::init();

    let interactive = cli.interactive();
    let target = if interactive {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = logging::init(target) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            warn!(error = %e, "config ignored");
            Config::default()
        }
    };
    let config = cli.apply_to(config);

    if cli.watch && !interactive {
        eprintln!("Warning: --watch needs the interactive viewer; ignoring it");
        warn!("--watch ignored outside the viewer");
    }

    let result = if interactive {
        run_tui(&cli, &config).map(|()| ExitCode::SUCCESS)
    } else {
        run_print(&cli, &config)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Print mode. Exit code 0 when identical, 1 when the documents differ.
fn run_print(cli: &Cli, config: &Config) -> Result<ExitCode> {
    let before_source = DocumentSource::from_arg(&cli.before);
    let after_source = DocumentSource::from_arg(&cli.after);
    if before_source == DocumentSource::Stdin && after_source == DocumentSource::Stdin {
        anyhow::bail!("only one document can be read from stdin");
    }

    let before = before_source.load()?;
    let after = after_source.load()?;
    let result = DiffResult::compute_with(&before, &after, &config.diff_options());

    let before_label = cli
        .label_before
        .clone()
        .unwrap_or_else(|| before_source.label());
    let after_label = cli
        .label_after
        .clone()
        .unwrap_or_else(|| after_source.label());
    let labels = Labels {
        before: &before_label,
        after: &after_label,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        write_json(&mut out, labels, &result)?;
    } else {
        let color = config.color && stdout.is_terminal();
        write_listing(&mut out, labels, &result, color)?;
    }
    out.flush()?;

    info!(stats = %result.stats(), "printed diff");
    Ok(if result.has_changes() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

/// Run the TUI application.
fn run_tui(cli: &Cli, config: &Config) -> Result<()> {
    // Set panic hook to ensure terminal cleanup
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = io::stdout().flush();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
        default_hook(info);
    }));

    let before_source = DocumentSource::from_arg(&cli.before);
    let after_source = DocumentSource::from_arg(&cli.after);
    let mut app = App::load(
        before_source,
        after_source,
        config.diff_options(),
        Theme::load(&config.theme),
    )
    .context("Failed to load documents")?;

    if cli.watch {
        app.enable_watch().context("Failed to watch documents")?;
    }
    info!(
        before = %app.before_label(),
        after = %app.after_label(),
        stats = %app.stats,
        "viewer started"
    );

    let _guard = TerminalGuard::new()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_loop(&mut terminal, &mut app)
}

fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_watcher();

        if app.is_dirty() {
            terminal.draw(|frame| render(frame, app))?;
            app.clear_dirty();
        }

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            handle_input(app, event);
        }

        if app.should_quit {
            let _ = execute!(io::stdout(), DisableMouseCapture);
            let _ = io::stdout().flush();
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn watch_conflicts_with_print_modes() {
        assert!(Cli::try_parse_from(["confdiff", "a", "b", "--watch", "--print"]).is_err());
        assert!(Cli::try_parse_from(["confdiff", "a", "b", "--watch", "--json"]).is_err());
        assert!(Cli::try_parse_from(["confdiff", "a", "b", "--watch"]).is_ok());
    }

    #[test]
    fn stdin_is_never_interactive() {
        let cli = Cli::try_parse_from(["confdiff", "-", "b", "--watch"]).unwrap();
        assert!(!cli.interactive());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "confdiff",
            "a",
            "b",
            "-w",
            "9",
            "--algorithm",
            "myers",
            "--prefer",
            "deletion",
            "--no-color",
        ])
        .unwrap();
        let config = cli.apply_to(Config::default());
        assert_eq!(config.lookahead_window, 9);
        assert_eq!(config.algorithm, Algorithm::Myers);
        assert_eq!(config.tie_break, TieBreak::PreferDeletion);
        assert!(!config.color);
        assert_eq!(config.theme, "default");
    }
}
