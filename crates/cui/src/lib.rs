mod actions;
mod app;
mod art;
mod input;
mod pacing;
mod view;
mod viewport;

use anyhow::{Context, Result};
use app::{App, TableSetup, DEFAULT_PACK};
use cardtable_cache::{CacheConfig, DEFAULT_CACHE_DIR};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use pacing::FramePacer;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io::{self, stdout, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub pack: Option<String>,
    pub seed: Option<u64>,
    pub assets_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl LaunchOptions {
    fn into_setup(self) -> TableSetup {
        TableSetup {
            pack: self.pack.unwrap_or_else(|| DEFAULT_PACK.to_string()),
            seed: self.seed.unwrap_or_else(rand_seed),
            assets_dir: self.assets_dir.unwrap_or_else(|| PathBuf::from("assets")),
            cache: CacheConfig {
                dir: self
                    .cache_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
                ..CacheConfig::default()
            },
        }
    }
}

pub fn run(options: LaunchOptions) -> Result<()> {
    if let Some(path) = options.log_file.as_ref() {
        init_logging(path)?;
    }
    let setup = options.into_setup();
    let mut app = App::bootstrap(&setup)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    if let Err(err) = run_result.as_ref() {
        tracing::error!("table stopped: {err:#}");
    }
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args);
    run(options)
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut options = LaunchOptions {
        pack: std::env::var("CARDTABLE_PACK").ok(),
        ..LaunchOptions::default()
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        let consumed = match (args[idx].as_str(), value) {
            ("--pack" | "-p", Some(value)) => {
                options.pack = Some(value.clone());
                true
            }
            ("--seed", Some(value)) => {
                options.seed = value.parse::<u64>().ok();
                true
            }
            ("--assets", Some(value)) => {
                options.assets_dir = Some(PathBuf::from(value));
                true
            }
            ("--cache-dir", Some(value)) => {
                options.cache_dir = Some(PathBuf::from(value));
                true
            }
            ("--log", Some(value)) => {
                options.log_file = Some(PathBuf::from(value));
                true
            }
            _ => false,
        };
        idx += if consumed { 2 } else { 1 };
    }
    options
}

fn rand_seed() -> u64 {
    rand::random()
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!("install log subscriber: {err}"))
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.table.config().frame_millis());
    let mut pacer = FramePacer::new(tick_rate, Instant::now());
    while !app.should_quit {
        let size = terminal.size().context("query terminal size")?;
        app.resize(size.width, size.height);
        app.on_tick()?;
        terminal.draw(|frame| view::draw(frame, app))?;

        // collect input until the frame deadline, then apply it in arrival order
        let mut pending = Vec::new();
        while let Some(left) = pacer.remaining(Instant::now()) {
            if !event::poll(left)? {
                break;
            }
            pending.push(input::map_event(&event::read()?));
        }
        for action in pending {
            actions::dispatch(app, action);
            if app.should_quit {
                break;
            }
        }
        pacer.advance(Instant::now());
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "cardtable-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}
