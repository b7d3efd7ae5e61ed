//! Transient Notifications
//!
//! Toast-style messages for create/update results and background failures.
//! They never block the rest of the UI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notifications {
    items: Vec<Notice>,
    next_id: u64,
    /// Auto-dismiss delay
    pub ttl_ms: u32,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(4500)
    }
}

impl Notifications {
    pub fn new(ttl_ms: u32) -> Self {
        Self { items: Vec::new(), next_id: 1, ttl_ms }
    }

    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, description: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, title: title.into(), description });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }

    pub fn of_kind(&self, kind: NoticeKind) -> impl Iterator<Item = &Notice> {
        self.items.iter().filter(move |n| n.kind == kind)
    }
}
