use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::{EventLoopState, handle_key_event};
use super::logging::start_logging;
use super::startup::apply_startup;
use crate::app::{Controller, NoticeKind, NowPlaying, PlaybackState, View};
use crate::audio::fake::FakeEngine;
use crate::config::{LoggingSettings, Settings};

struct Harness {
    settings: Settings,
    controller: Controller<FakeEngine>,
    view: View,
    state: EventLoopState,
}

impl Harness {
    fn new() -> Self {
        Self {
            settings: Settings::default(),
            controller: Controller::new(FakeEngine::default()),
            view: View::new(50),
            state: EventLoopState::new(),
        }
    }

    fn press(&mut self, code: KeyCode) -> bool {
        handle_key_event(
            KeyEvent::new(code, KeyModifiers::NONE),
            &self.settings,
            &mut self.controller,
            &mut self.view,
            &mut self.state,
        )
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn add(&mut self, path: &str) {
        self.press(KeyCode::Char('a'));
        self.type_text(path);
        self.press(KeyCode::Enter);
    }

    fn notice(&self) -> (NoticeKind, String) {
        let n = self.view.notice.as_ref().expect("a notice");
        (n.kind, n.message.clone())
    }
}

fn music_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), b"not real audio").unwrap();
    }
    dir
}

#[test]
fn add_prompt_adds_a_directory_and_reports_count() {
    let dir = music_dir(&["b.mp3", "a.wav", "notes.txt"]);
    let mut h = Harness::new();

    h.add(dir.path().to_str().unwrap());

    assert!(!h.view.prompt_open());
    let names: Vec<&str> = h
        .controller
        .playlist()
        .iter()
        .map(|t| t.display.as_str())
        .collect();
    assert_eq!(names, vec!["a.wav", "b.mp3"]);
    assert_eq!(
        h.notice(),
        (NoticeKind::Success, "2 song(s) added to playlist.".to_string())
    );
    assert_eq!(h.controller.now_playing(), &NowPlaying::Ready);
    assert_eq!(h.view.selected, None);
}

#[test]
fn cancelling_the_prompt_reports_no_songs_selected() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('a'));
    h.type_text("half typed");
    h.press(KeyCode::Esc);

    assert!(!h.view.prompt_open());
    assert!(h.controller.playlist().is_empty());
    assert_eq!(h.notice(), (NoticeKind::Info, "No songs selected.".to_string()));
}

#[test]
fn quit_keys_are_plain_text_inside_the_prompt() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('a'));
    assert!(!h.press(KeyCode::Char('q')));
    assert_eq!(h.view.prompt.as_deref(), Some("q"));
    h.press(KeyCode::Backspace);
    assert_eq!(h.view.prompt.as_deref(), Some(""));
}

#[test]
fn enter_plays_highlighted_row_and_transport_keys_drive_controller() {
    let mut h = Harness::new();
    h.add("/music/one.mp3");
    h.add("/music/two.mp3");

    h.press(KeyCode::Char('j'));
    h.press(KeyCode::Char('j'));
    assert_eq!(h.view.selected, Some(1));

    h.press(KeyCode::Enter);
    assert_eq!(h.controller.cursor(), Some(1));
    assert_eq!(h.controller.state(), PlaybackState::Playing);
    assert_eq!(h.controller.now_playing(), &NowPlaying::Track("two.mp3".into()));
    assert!(h.view.notice.is_none());

    h.press(KeyCode::Char(' '));
    assert_eq!(h.controller.state(), PlaybackState::Paused);
    h.press(KeyCode::Char('p'));
    assert_eq!(h.controller.state(), PlaybackState::Playing);

    h.press(KeyCode::Char('l'));
    assert_eq!(h.controller.cursor(), Some(0));
    assert_eq!(h.view.selected, Some(0));

    h.press(KeyCode::Char('h'));
    assert_eq!(h.controller.cursor(), Some(1));
    assert_eq!(h.view.selected, Some(1));

    h.press(KeyCode::Char('s'));
    assert_eq!(h.controller.state(), PlaybackState::Stopped);
    assert_eq!(h.controller.now_playing(), &NowPlaying::Idle);
}

#[test]
fn play_and_next_on_empty_playlist_show_info() {
    let mut h = Harness::new();
    h.press(KeyCode::Char('p'));
    assert_eq!(
        h.notice(),
        (NoticeKind::Info, "Please add songs to the playlist.".to_string())
    );

    h.press(KeyCode::Char('n'));
    assert_eq!(h.notice(), (NoticeKind::Info, "Playlist is empty.".to_string()));
    assert_eq!(h.view.selected, None);
}

#[test]
fn enter_without_highlight_does_not_play() {
    let mut h = Harness::new();
    h.add("/music/one.mp3");
    h.press(KeyCode::Enter);
    assert_eq!(h.controller.state(), PlaybackState::Stopped);
    assert_eq!(h.notice().0, NoticeKind::Info);
}

#[test]
fn delete_removes_highlighted_row_and_clears_highlight() {
    let mut h = Harness::new();
    h.add("/music/one.mp3");
    h.add("/music/two.mp3");

    h.press(KeyCode::Char('d'));
    assert_eq!(
        h.notice(),
        (NoticeKind::Info, "Please select a song to remove.".to_string())
    );

    h.press(KeyCode::Char('G'));
    h.press(KeyCode::Enter);
    h.press(KeyCode::Char('d'));

    assert_eq!(h.controller.playlist().len(), 1);
    assert_eq!(h.controller.cursor(), None);
    assert_eq!(h.controller.state(), PlaybackState::Stopped);
    assert_eq!(h.view.selected, None);
    assert_eq!(
        h.notice(),
        (NoticeKind::Success, "Song removed from playlist.".to_string())
    );
}

#[test]
fn gg_jumps_to_first_row_only_when_doubled() {
    let mut h = Harness::new();
    h.add("/music/one.mp3");
    h.add("/music/two.mp3");
    h.press(KeyCode::Char('G'));

    h.press(KeyCode::Char('g'));
    assert_eq!(h.view.selected, Some(1));
    h.press(KeyCode::Char('j'));
    h.press(KeyCode::Char('g'));
    assert_eq!(h.view.selected, Some(0));

    h.press(KeyCode::Char('G'));
    h.press(KeyCode::Char('g'));
    h.press(KeyCode::Char('g'));
    assert_eq!(h.view.selected, Some(0));
}

#[test]
fn volume_keys_move_slider_and_engine_within_bounds() {
    let mut h = Harness::new();
    h.settings.audio.volume_step = 30;

    h.press(KeyCode::Char('+'));
    assert_eq!(h.view.volume, 80);
    h.press(KeyCode::Char('='));
    assert_eq!(h.view.volume, 100);
    assert_eq!(h.controller.engine().last_volume(), Some(1.0));

    for _ in 0..4 {
        h.press(KeyCode::Char('-'));
    }
    assert_eq!(h.view.volume, 0);
    assert_eq!(h.controller.engine().last_volume(), Some(0.0));
}

#[test]
fn quit_keys_end_the_loop() {
    let mut h = Harness::new();
    assert!(h.press(KeyCode::Char('q')));
    assert!(h.press(KeyCode::Esc));
    assert!(!h.press(KeyCode::Char('x')));
}

#[test]
fn startup_applies_volume_and_command_line_paths() {
    let dir = music_dir(&["x.mp3"]);
    let mut controller = Controller::new(FakeEngine::default());
    let mut view = View::new(40);
    let args = vec![
        dir.path().to_string_lossy().into_owned(),
        "/elsewhere/y.wav".to_string(),
    ];

    apply_startup(&mut controller, &mut view, &Settings::default(), &args);

    assert_eq!(controller.engine().last_volume(), Some(0.4));
    let names: Vec<&str> = controller.playlist().iter().map(|t| t.display.as_str()).collect();
    assert_eq!(names, vec!["x.mp3", "y.wav"]);
    assert_eq!(view.notice.as_ref().unwrap().kind, NoticeKind::Success);
}

#[test]
fn startup_without_arguments_adds_nothing() {
    let mut controller = Controller::new(FakeEngine::default());
    let mut view = View::new(50);
    apply_startup(&mut controller, &mut view, &Settings::default(), &[]);
    assert!(controller.playlist().is_empty());
    assert!(view.notice.is_none());
}

#[test]
fn unwritable_log_file_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file").unwrap();

    let settings = LoggingSettings {
        file: Some(blocker.join("rhythmflow.log")),
        ..LoggingSettings::default()
    };
    let problem = start_logging(&settings).expect("a reported problem");
    assert!(problem.starts_with("logging disabled:"));
}

#[test]
fn disabled_logging_reports_nothing() {
    let settings = LoggingSettings {
        enabled: false,
        ..LoggingSettings::default()
    };
    assert_eq!(start_logging(&settings), None);
}
