#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown in the corner of the shell.
#[derive(Clone, Debug)]
pub struct Notice {
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Oldest notices are dropped past this many on screen.
    const MAX_VISIBLE: usize = 4;

    pub fn success(&mut self, message: String) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&mut self, message: String) {
        self.push(NoticeKind::Error, message);
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        self.items.push(Notice {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message,
        });
        if self.items.len() > Self::MAX_VISIBLE {
            let excess = self.items.len() - Self::MAX_VISIBLE;
            self.items.drain(..excess);
        }
    }

    /// Remove a notice by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}
