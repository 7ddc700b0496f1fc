//! Notices
//!
//! The one channel every operation outcome is reported through.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub tone: Tone,
    pub title: String,
    pub detail: Option<String>,
}

/// Bounded list of notices, newest last
#[derive(Clone, Debug, PartialEq)]
pub struct Notices {
    entries: Vec<Notice>,
    limit: usize,
    next_id: u64,
}

impl Notices {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    /// Add a notice, dropping the oldest past the limit. Returns its id.
    pub fn push(&mut self, tone: Tone, title: impl Into<String>, detail: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            tone,
            title: title.into(),
            detail,
        });
        if self.entries.len() > self.limit {
            let overflow = self.entries.len() - self.limit;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, title: impl Into<String>) -> u64 {
        self.push(Tone::Success, title, None)
    }

    pub fn error(&mut self, title: impl Into<String>, detail: impl Into<String>) -> u64 {
        self.push(Tone::Error, title, Some(detail.into()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}
