use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::{Controller, View};
use crate::audio::RodioEngine;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, problem) = settings::load_settings();
    let log_problem = logging::start_logging(&settings.logging);
    settings::report_fallback(problem);
    settings::report_fallback(log_problem);

    let args: Vec<String> = env::args().skip(1).collect();

    // The engine is opened once, before the terminal is taken over, so a
    // missing output device is reported on a normal screen.
    let engine = RodioEngine::new()?;
    let mut controller = Controller::new(engine);
    let mut view = View::new(settings.audio.initial_volume);
    startup::apply_startup(&mut controller, &mut view, &settings, &args);
    info!(tracks = controller.playlist().len(), "starting");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new();
        event_loop::run(&mut terminal, &settings, &mut controller, &mut view, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    controller.stop();
    info!("exiting");
    run_result
}

#[cfg(test)]
mod tests;
