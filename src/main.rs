//! monoglyph spinner demo.
//!
//! Draws a rotating scene every frame and flushes it with delta rendering.
//! Quit with `q`, `Esc` or `Ctrl+C`.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use monoglyph::core::Canvas;
use monoglyph::spin::{draw_spin_frame, parse_spin_args, SpinConfig};
use monoglyph::term::TerminalRenderer;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_spin_args(&args)?;
    let mut canvas = Canvas::from_config(&config.canvas)?;
    info!(?config, "starting spinner");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut canvas, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, canvas: &mut Canvas, config: &SpinConfig) -> Result<()> {
    let frame_duration = Duration::from_secs(1) / config.fps;
    let mut frame: u64 = 0;

    loop {
        if config.frames.is_some_and(|n| frame >= n) {
            return Ok(());
        }
        let started = Instant::now();

        draw_spin_frame(canvas, frame as f64 * config.degrees_per_frame);
        term.draw(canvas)?;
        frame += 1;

        let timeout = frame_duration
            .checked_sub(started.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    return Ok(());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
