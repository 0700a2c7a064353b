//! Cell edit sessions.
//!
//! At most one session is live at a time. The session owns the pending text
//! buffer; the host's input overlay mirrors keystrokes into it with
//! `set_value` and ends it through `commit` or `cancel`. Confirm/abort keys
//! and focus loss belong to whatever input layer owns keyboard capture —
//! this controller only exposes the entry points they call.

use tracing::debug;

use crate::data::CellStore;

/// A live edit of one cell.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Row being edited.
    pub row: u32,
    /// Column being edited.
    pub col: u32,
    value: String,
}

impl EditSession {
    /// The pending text buffer.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Edit controller owning the single optional session.
#[derive(Debug, Default)]
pub struct EditController {
    session: Option<EditSession>,
}

impl EditController {
    /// Create a controller with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a session is live.
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Begin editing `(row, col)`, seeding the buffer with the store's
    /// current value (empty when unset). Out-of-range coordinates are a
    /// silent no-op. A session already live is committed first —
    /// last-session-wins, the previous value is never dropped.
    ///
    /// Returns true when a session was opened.
    pub fn begin<S: CellStore>(&mut self, store: &mut S, row: u32, col: u32) -> bool {
        if row >= store.row_count() || col >= store.col_count() {
            return false;
        }
        if self.session.is_some() {
            self.commit(store);
        }
        let value = store.get(row, col).unwrap_or_default();
        debug!(row, col, "edit session opened");
        self.session = Some(EditSession { row, col, value });
        true
    }

    /// Mirror the overlay's text buffer into the session. No-op while idle.
    pub fn set_value(&mut self, text: &str) {
        if let Some(session) = self.session.as_mut() {
            session.value.clear();
            session.value.push_str(text);
        }
    }

    /// Write the pending value through to the store and close the session.
    /// Returns true when a session was actually committed.
    pub fn commit<S: CellStore>(&mut self, store: &mut S) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        debug!(row = session.row, col = session.col, "edit committed");
        store.set(session.row, session.col, &session.value);
        true
    }

    /// Discard the pending value and close the session. The store is not
    /// touched. Returns true when a session was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        if let Some(session) = self.session.take() {
            debug!(row = session.row, col = session.col, "edit cancelled");
            return true;
        }
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;

    #[test]
    fn test_begin_out_of_range_is_noop() {
        let mut store = MemoryStore::new(10, 10);
        let mut ctl = EditController::new();
        assert!(!ctl.begin(&mut store, 10, 0));
        assert!(!ctl.begin(&mut store, 0, 10));
        assert!(!ctl.is_editing());
    }

    #[test]
    fn test_commit_writes_through() {
        let mut store = MemoryStore::new(10, 10);
        let mut ctl = EditController::new();
        assert!(ctl.begin(&mut store, 2, 3));
        ctl.set_value("X");
        assert!(ctl.commit(&mut store));
        assert_eq!(store.get(2, 3).as_deref(), Some("X"));
        assert!(!ctl.is_editing());
    }

    #[test]
    fn test_cancel_leaves_store_unchanged() {
        let mut store = MemoryStore::new(10, 10);
        store.set(2, 3, "before");
        let mut ctl = EditController::new();
        ctl.begin(&mut store, 2, 3);
        assert_eq!(ctl.session().unwrap().value(), "before");
        ctl.set_value("after");
        assert!(ctl.cancel());
        assert_eq!(store.get(2, 3).as_deref(), Some("before"));
    }

    #[test]
    fn test_begin_commits_previous_session() {
        let mut store = MemoryStore::new(10, 10);
        let mut ctl = EditController::new();
        ctl.begin(&mut store, 0, 0);
        ctl.set_value("first");
        // Second begin lands the first session's value before switching.
        ctl.begin(&mut store, 1, 1);
        assert_eq!(store.get(0, 0).as_deref(), Some("first"));
        let session = ctl.session().unwrap();
        assert_eq!((session.row, session.col), (1, 1));
    }

    #[test]
    fn test_commit_idle_is_noop() {
        let mut store = MemoryStore::new(10, 10);
        let mut ctl = EditController::new();
        assert!(!ctl.commit(&mut store));
        assert!(!ctl.cancel());
    }
}
