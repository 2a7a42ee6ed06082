//! Presentation-only state: highlighted row, volume slider, add prompt and
//! the last notice. None of it is visible to the controller.

use super::notice::Notice;

#[derive(Clone, Debug, Default)]
pub struct View {
    /// Highlighted playlist row, independent of the playback cursor.
    pub selected: Option<usize>,
    /// Volume slider position, 0-100.
    pub volume: u8,
    /// Text typed into the add-path prompt while it is open.
    pub prompt: Option<String>,
    pub notice: Option<Notice>,
}

impl View {
    pub fn new(volume: u8) -> Self {
        Self {
            volume: volume.min(100),
            ..Self::default()
        }
    }

    /// Move the highlight down one row, wrapping to the top.
    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Move the highlight up one row, wrapping to the bottom.
    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(len - 1, |i| (i + len - 1) % len));
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.checked_sub(1);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Raise the slider by `step`, returning the new value.
    pub fn volume_up(&mut self, step: u8) -> u8 {
        self.volume = self.volume.saturating_add(step).min(100);
        self.volume
    }

    /// Lower the slider by `step`, returning the new value.
    pub fn volume_down(&mut self, step: u8) -> u8 {
        self.volume = self.volume.saturating_sub(step);
        self.volume
    }

    pub fn open_prompt(&mut self) {
        self.prompt = Some(String::new());
    }

    pub fn prompt_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn push_prompt_char(&mut self, c: char) {
        if let Some(p) = self.prompt.as_mut() {
            p.push(c);
        }
    }

    pub fn pop_prompt_char(&mut self) {
        if let Some(p) = self.prompt.as_mut() {
            p.pop();
        }
    }

    /// Close the prompt and hand back what was typed.
    pub fn take_prompt(&mut self) -> Option<String> {
        self.prompt.take()
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}
