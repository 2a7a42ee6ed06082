//! UI rendering helpers for the terminal user interface.
//!
//! Everything here reads controller and view state; nothing is mutated.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{Controller, NoticeKind, NowPlaying, PlaybackState, View};
use crate::audio::AudioEngine;
use crate::config::UiSettings;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "play selected song"),
    ("a", "add songs"),
    ("d", "remove song"),
    ("+/-", "volume"),
    ("q", "quit"),
];

const TRANSPORT: &[(&str, &str)] = &[
    ("h", "prev"),
    ("p", "play"),
    ("space", "pause"),
    ("s", "stop"),
    ("l", "next"),
];

fn hint_text(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Title and secondary line of the now-playing box.
pub(crate) fn now_playing_lines<'a>(now: &'a NowPlaying, ui: &'a UiSettings) -> (&'a str, &'a str) {
    match now {
        NowPlaying::Idle => (ui.idle_title.as_str(), ui.idle_subtitle.as_str()),
        NowPlaying::Ready => (ui.idle_title.as_str(), ui.ready_subtitle.as_str()),
        NowPlaying::Track(name) => (name.as_str(), ui.track_subtitle.as_str()),
        NowPlaying::Error => (ui.error_title.as_str(), ui.error_subtitle.as_str()),
    }
}

fn state_label(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Stopped => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    }
}

/// Marker drawn in front of the cursor row.
fn cursor_glyph(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Playing => "▶ ",
        PlaybackState::Paused => "‖ ",
        PlaybackState::Stopped => "■ ",
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    controller: &Controller<E>,
    view: &View,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" rhythmflow ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Now playing
    let (title, subtitle) = now_playing_lines(controller.now_playing(), ui_settings);
    let title_style = match controller.now_playing() {
        NowPlaying::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    };
    let now_playing = Paragraph::new(vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(subtitle).italic(),
    ])
    .block(
        Block::bordered()
            .padding(left_pad())
            .title(format!(" now playing • {} ", state_label(controller.state()))),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(now_playing, chunks[1]);

    // Playlist
    let cursor = controller.cursor();
    let items: Vec<ListItem> = controller
        .playlist()
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let marker = if cursor == Some(i) {
                cursor_glyph(controller.state())
            } else {
                "  "
            };
            ListItem::new(format!("{marker}{}", track.display))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" playlist ({}) ", controller.playlist().len())),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(view.selected);
    frame.render_stateful_widget(list, chunks[2], &mut state);

    // Transport hints and volume
    let transport = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(chunks[3]);
    let hints = Paragraph::new(hint_text(TRANSPORT)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" transport ")
            .padding(left_pad()),
    );
    frame.render_widget(hints, transport[0]);
    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" volume "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(view.volume.min(100)));
    frame.render_widget(volume, transport[1]);

    // Notice line
    if let Some(notice) = &view.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Yellow,
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        let line = Line::from(vec![
            Span::styled(format!(" {}: ", notice.title), Style::default().fg(color).bold()),
            Span::raw(notice.message.as_str()),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[4]);
    }

    let footer = Paragraph::new(hint_text(CONTROLS))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);

    // Add prompt overlays the playlist
    if let Some(input) = &view.prompt {
        let popup_area = centered_rect_sized(64, 3, chunks[2]);
        frame.render_widget(Clear, popup_area);
        let prompt = Paragraph::new(format!("{input}_")).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" add file or folder (enter adds, esc cancels) ")
                .padding(left_pad()),
        );
        frame.render_widget(prompt, popup_area);
    }
}
