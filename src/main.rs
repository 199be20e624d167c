use arcade::input::map_key;
use arcade::scheduler::FrameClock;
use arcade::{paths, ui, App, ArcadeConfig, FileStorage};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{error, info};
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("arcade {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arcade - Snake and Flappy Bird in your terminal\n");
                println!("Usage: arcade [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Settings are read from ~/.arcade/config.json if present.");
                println!("Set RUST_LOG=debug to log to ~/.arcade/arcade.log.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let config = ArcadeConfig::load();
    let storage = FileStorage::with_fallback(paths::data_dir());
    let mut app = App::new(config, storage);
    info!("arcade {} starting", env!("CARGO_PKG_VERSION"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("terminal loop failed: {}", e);
    }
    result
}

/// Route `log` output to ~/.arcade/arcade.log; the terminal belongs to the UI.
fn init_logging() {
    let Ok(path) = paths::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// Draw, read input, and tick the app once per frame until it asks to quit.
fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let frame_interval = Duration::from_millis(app.config.frame_interval_ms);
    let mut clock = FrameClock::new();
    let mut next_frame = Instant::now() + frame_interval;

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key) {
                    app.handle_input(input);
                }
            }
        }

        // Engines advance once per frame, never once per key press
        let now = Instant::now();
        if now >= next_frame {
            app.tick(clock.tick());
            next_frame += frame_interval;
            if next_frame < now {
                next_frame = now + frame_interval;
            }
        }
    }

    Ok(())
}
