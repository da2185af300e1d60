//! # Listing
//!
//! The part both screens share: one remote list, a selection cursor, the
//! delete confirmation, and the blocking "processing" flag.

/// Lifecycle of a fetched list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    /// Screen not mounted yet (e.g. the author list under a deep-linked detail screen).
    Idle,
    Loading,
    Failed(String),
    Loaded(T),
}

#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub remote: Remote<Vec<T>>,
    pub selected: usize,
    /// Row awaiting delete confirmation. `Some` means the confirm modal is open.
    pub pending_delete: Option<T>,
    /// A mutation is in flight (or its re-fetch is). Input is blocked.
    pub processing: bool,
    /// One-line message from the last failed mutation.
    pub notice: Option<String>,
}

impl<T: Clone> Listing<T> {
    pub fn new() -> Self {
        Self {
            remote: Remote::Idle,
            selected: 0,
            pending_delete: None,
            processing: false,
            notice: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            remote: Remote::Loading,
            ..Self::new()
        }
    }

    pub fn items(&self) -> &[T] {
        match &self.remote {
            Remote::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.remote, Remote::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.remote {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Folds a query result into the list. A completed query (initial or
    /// re-fetch) always ends processing.
    pub fn receive(&mut self, result: Result<Vec<T>, String>) {
        self.remote = match result {
            Ok(items) => Remote::Loaded(items),
            Err(message) => Remote::Failed(message),
        };
        self.processing = false;
    }

    /// Keeps the selection inside a list of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Marks a mutation as started: processing on, stale notice gone.
    pub fn begin_mutation(&mut self) {
        self.processing = true;
        self.notice = None;
    }

    pub fn fail_mutation(&mut self, message: &str) {
        self.processing = false;
        self.notice = Some(message.to_string());
    }
}

impl<T: Clone> Default for Listing<T> {
    fn default() -> Self {
        Self::new()
    }
}
