use crate::foundation::core::Millis;

/// Lifetime of a notice when the caller does not pick one.
pub const DEFAULT_NOTICE_MS: u64 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoticeId(pub u64);

/// Short-lived feedback message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub shown_at: Millis,
    pub duration_ms: u64,
}

impl Notice {
    pub fn expires_at(&self) -> Millis {
        self.shown_at.after(self.duration_ms)
    }
}

/// Stack of independent notices, oldest first. Identical messages are not merged.
#[derive(Debug, Default, Clone)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, now: Millis, message: impl Into<String>, duration_ms: u64) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            message: message.into(),
            shown_at: now,
            duration_ms,
        });
        id
    }

    /// Remove one notice; a notice that is already gone is ignored.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().map(|n| n.message.as_str())
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/notice.rs"]
mod tests;
