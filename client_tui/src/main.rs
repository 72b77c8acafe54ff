use std::io;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use fern::FormatCallback;
use game_core::{Config, Control, Game, GameRng};
use glam::IVec2;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use time::format_description::well_known::Iso8601;

use crate::error::ClientError;
use crate::input::TerminalInput;
use crate::menu::ListMenu;
use crate::sound::Bell;
use crate::surface::{glyph_for, TerminalSurface};
use crate::timing::{FrameLimiter, SleepClock};

mod error;
mod input;
mod menu;
mod sound;
mod surface;
mod timing;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Frames (and game ticks) per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for the ball's random serve and deflection angles.
    ///
    /// A random seed is picked when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// File the log is appended to. The terminal itself is used for the game.
    #[arg(long, default_value = "pong.log", value_name = "PATH")]
    log_file: String,

    /// Most verbose level written to the log file.
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Do not ring the terminal bell on paddle hits.
    #[arg(long)]
    mute: bool,

    /// How long a held key counts as pressed after its last repeat, in
    /// milliseconds. Only used when the terminal cannot report key releases.
    #[arg(long, default_value_t = 500)]
    key_release_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logger(&cli.log_file, cli.log_level) {
        eprintln!("Error while configuring logging : {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => {
            log::info!("Bye.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Take over the terminal, play until quit, and always hand it back.
fn run(cli: &Cli) -> Result<(), ClientError> {
    let limiter = FrameLimiter::new(cli.fps)?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("Starting at {} fps with seed {seed}", cli.fps);

    install_panic_hook();
    let enhanced = match enter_terminal() {
        Ok(enhanced) => enhanced,
        Err(e) => {
            restore_terminal(false);
            return Err(e.into());
        }
    };

    let result = play(cli, seed, enhanced, limiter);
    restore_terminal(enhanced);
    result
}

/// The frame loop: events, logic, drawing, then sleep out the frame.
fn play(cli: &Cli, seed: u64, enhanced: bool, mut limiter: FrameLimiter) -> Result<(), ClientError> {
    let config = Config::new();
    let screen = IVec2::new(config.screen_width, config.screen_height);

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let size = terminal.size()?;
    let mut surface = TerminalSurface::new(terminal, screen, glyph_for(screen, size.width, size.height));
    let mut menu = ListMenu::new(screen, config.foreground, config.about_color);
    let mut input = TerminalInput::new(enhanced, Duration::from_millis(cli.key_release_ms));
    let mut bell = Bell::stdout(cli.mute);
    let mut clock = SleepClock;
    let mut game = Game::new(config, GameRng::new(seed));

    loop {
        let events = input.poll()?;
        if game.process_events(events, &mut menu) == Control::Quit {
            return Ok(());
        }
        game.run_logic(&mut bell);
        game.display_frame(&mut surface, &menu, &mut clock);
        if let Some(e) = surface.take_error() {
            return Err(e.into());
        }
        limiter.wait_for_next_frame(&mut clock);
    }
}

/// Raw mode, alternate screen, hidden cursor. Returns whether the terminal
/// agreed to report key releases.
fn enter_terminal() -> io::Result<bool> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::debug!("Key release events reported: {enhanced}");
    Ok(enhanced)
}

fn restore_terminal(enhanced: bool) {
    let mut stdout = io::stdout();
    if enhanced {
        if let Err(e) = execute!(stdout, PopKeyboardEnhancementFlags) {
            log::warn!("Could not pop keyboard flags : {e}");
        }
    }
    if let Err(e) = execute!(stdout, Show, LeaveAlternateScreen) {
        log::warn!("Could not leave the alternate screen : {e}");
    }
    if let Err(e) = disable_raw_mode() {
        log::warn!("Could not disable raw mode : {e}");
    }
}

/// Put the terminal back before the panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(true);
        default_hook(info);
    }));
}

/// Set up the global logger to append to the given file.
fn setup_logger(path: &str, level: log::LevelFilter) -> Result<(), ClientError> {
    let file = fern::log_file(path).map_err(|source| ClientError::LogFile {
        path: path.to_string(),
        source,
    })?;
    fern::Dispatch::new()
        .level(level)
        .format(format_log)
        .chain(file)
        .apply()?;
    Ok(())
}

/// The function given to the logging crate [`fern`] to format messages.
fn format_log(out: FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        utc_now_wrapper(),
        record.level(),
        record.target(),
        message
    ))
}

/// Create a [`String`] of the current time in the UTC timezone, with a default in case of error.
fn utc_now_wrapper() -> String {
    time::OffsetDateTime::now_utc()
        .format(&Iso8601::DATE_TIME)
        .unwrap_or(String::from("invalid date"))
}
