use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Controller, Notice, PlayerError, View};
use crate::audio::AudioEngine;
use crate::config;
use crate::library::resolve_selection;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

impl EventLoopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main terminal event loop: draws, waits for a key, dispatches it.
/// Returns `Ok(())` when the user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut Controller<E>,
    view: &mut View,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, controller, view, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, controller, view, state) {
                    return Ok(());
                }
            }
        }
    }
}

/// Turn a command outcome into a notice; errors never leave the loop.
fn report<T>(view: &mut View, result: Result<T, PlayerError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(err) => {
            view.notify(Notice::from(&err));
            None
        }
    }
}

fn add_from_input<E: AudioEngine>(
    input: &str,
    settings: &config::Settings,
    controller: &mut Controller<E>,
    view: &mut View,
) {
    let paths = resolve_selection(input, &settings.library);
    if let Some(added) = report(view, controller.add_tracks(paths)) {
        view.notify(Notice::success(format!("{added} song(s) added to playlist.")));
    }
}

fn handle_prompt_key<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    controller: &mut Controller<E>,
    view: &mut View,
) {
    match key.code {
        KeyCode::Esc => {
            view.take_prompt();
            add_from_input("", settings, controller, view);
        }
        KeyCode::Enter => {
            let input = view.take_prompt().unwrap_or_default();
            add_from_input(&input, settings, controller, view);
        }
        KeyCode::Backspace => view.pop_prompt_char(),
        KeyCode::Char(c) if !c.is_control() => view.push_prompt_char(c),
        _ => {}
    }
}

/// Dispatch one key press. Returns true when the user asked to quit.
pub fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    controller: &mut Controller<E>,
    view: &mut View,
    state: &mut EventLoopState,
) -> bool {
    if view.prompt_open() {
        handle_prompt_key(key, settings, controller, view);
        return false;
    }

    let len = controller.playlist().len();
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,

        // Row navigation only moves the highlight.
        KeyCode::Char('j') | KeyCode::Down => view.select_next(len),
        KeyCode::Char('k') | KeyCode::Up => view.select_prev(len),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                view.select_first(len);
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => view.select_last(len),

        KeyCode::Enter => {
            view.notice = None;
            match view.selected {
                Some(row) => {
                    report(view, controller.select_track(row));
                    view.selected = controller.cursor();
                }
                None => view.notify(Notice::from(&PlayerError::NoTrackSelected)),
            }
        }
        KeyCode::Char('p') => {
            view.notice = None;
            report(view, controller.play());
        }
        KeyCode::Char(' ') => {
            view.notice = None;
            controller.pause();
        }
        KeyCode::Char('s') => {
            view.notice = None;
            controller.stop();
        }
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => {
            view.notice = None;
            report(view, controller.next());
            if controller.cursor().is_some() {
                view.selected = controller.cursor();
            }
        }
        KeyCode::Char('h') | KeyCode::Char('b') | KeyCode::Left => {
            view.notice = None;
            report(view, controller.previous());
            if controller.cursor().is_some() {
                view.selected = controller.cursor();
            }
        }

        KeyCode::Char('a') => {
            view.notice = None;
            view.open_prompt();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            view.notice = None;
            let selection = view.selected;
            if report(view, controller.remove_track(selection)).is_some() {
                view.clear_selection();
                view.notify(Notice::success("Song removed from playlist."));
            }
        }

        KeyCode::Char('+') | KeyCode::Char('=') => {
            let volume = view.volume_up(settings.audio.volume_step);
            controller.set_volume(volume);
        }
        KeyCode::Char('-') => {
            let volume = view.volume_down(settings.audio.volume_step);
            controller.set_volume(volume);
        }
        _ => {}
    }

    false
}
