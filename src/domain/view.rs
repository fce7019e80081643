use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A message for the user, shown by the view as a dialog or a line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: &str) -> Self {
        Notice {
            level: NoticeLevel::Info,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn warning(title: &str, message: &str) -> Self {
        Notice {
            level: NoticeLevel::Warning,
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        let level = match err {
            AppError::NoMatch(_) => NoticeLevel::Info,
            _ => NoticeLevel::Warning,
        };

        Notice {
            level,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Display surface driven by the controller.
pub trait View {
    /// Replace the visible list with `labels`.
    fn render(&mut self, labels: &[String]);

    fn notify(&mut self, notice: &Notice);
}

/// A view that keeps everything it is shown. Useful for headless sessions.
#[derive(Debug, Default)]
pub struct BufferView {
    pub renders: Vec<Vec<String>>,
    pub notices: Vec<Notice>,
}

impl BufferView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_render(&self) -> Option<&[String]> {
        self.renders.last().map(Vec::as_slice)
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl View for BufferView {
    fn render(&mut self, labels: &[String]) {
        self.renders.push(labels.to_vec());
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

