mod config;
mod food;
mod game;
mod input;
mod scores;
mod snake;
mod ui;

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use config::Args;
use game::{Game, GameState};

fn main() -> Result<(), io::Error> {
    let args = Args::parse();

    // Set up logging before anything else; the terminal belongs to the game
    WriteLogger::init(args.log_level, Config::default(), File::create(&args.log_file)?)
        .map_err(io::Error::other)?;

    info!(
        "Starting snekterm: {}x{} board, speed {}, {}ms ticks",
        args.width, args.height, args.speed, args.tick_ms
    );

    // Setup terminal; from here on every exit goes through the restore
    enable_raw_mode()?;
    let mut game = Game::new(args.board_size(), args.speed);
    let result = play(&mut game, args.tick_rate());
    let restored = restore_terminal(&mut io::stdout());

    match (&result, &restored) {
        (Err(e), _) => error!("Terminal error: {}", e),
        (Ok(()), Err(e)) => error!("Failed to restore terminal: {}", e),
        (Ok(()), Ok(())) => info!("Exiting, best score {:?}", game.high_scores().best()),
    }
    result.and(restored)
}

fn play(game: &mut Game, tick_rate: Duration) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    run(&mut terminal, game, tick_rate)
}

// Every step runs even if an earlier one failed; the first error wins
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, cursor::Show);
    let raw = disable_raw_mode();
    screen.and(raw)
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    // One key per tick; the rest wait in the event queue
    let mut ignore_input = false;
    loop {
        terminal.draw(|f| game.render(f))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if !ignore_input {
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    game.handle_input(key);
                    ignore_input = key.kind != KeyEventKind::Release;
                }
            }
        } else {
            thread::sleep(timeout);
        }

        if last_tick.elapsed() >= tick_rate {
            let was_playing = game.state == GameState::Playing;
            game.update();
            last_tick = Instant::now();
            ignore_input = false;

            // Keys mashed before the crash must not answer the prompt
            if was_playing && game.state != GameState::Playing {
                drain_events()?;
            }
        }

        if game.state == GameState::Exit {
            break;
        }
    }

    Ok(())
}

fn drain_events() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}
