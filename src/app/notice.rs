use super::error::PlayerError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A message for the user, shown on the notice line until replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: "Info",
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success",
            message: message.into(),
        }
    }

    pub fn error(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title,
            message: message.into(),
        }
    }
}

impl From<&PlayerError> for Notice {
    fn from(err: &PlayerError) -> Self {
        if err.is_user_input() {
            Notice::info(err.to_string())
        } else {
            Notice::error("Playback Error", err.to_string())
        }
    }
}
