//! Linear undo/redo history of immutable snapshots.
//!
//! # Invariants
//! - `history` is never empty and `cursor < history.len()`.
//! - `commit` is the only way a new snapshot enters history; it prunes any
//!   redo branch first.
//! - Appended snapshots are never mutated; undo/redo only move the cursor.
//! - The observer runs exactly once per cursor move, after the move.

use crate::store::error::HistoryError;
use crate::store::snapshot::Snapshot;
use log::debug;

/// Receives "current snapshot replaced" notifications.
pub trait SnapshotObserver {
    fn snapshot_replaced(&mut self, previous: &Snapshot, current: &Snapshot);
}

/// No-op observer for callers without views.
impl SnapshotObserver for () {
    fn snapshot_replaced(&mut self, _previous: &Snapshot, _current: &Snapshot) {}
}

/// Append-only snapshot log with a movable read cursor.
#[derive(Debug, Clone)]
pub struct VersionedStore {
    history: Vec<Snapshot>,
    cursor: usize,
}

impl VersionedStore {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            history: vec![initial],
            cursor: 0,
        }
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots retained, including the redo branch.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Truncates the redo branch, appends `snapshot` and moves to it.
    pub fn commit(&mut self, snapshot: Snapshot, observer: &mut dyn SnapshotObserver) {
        let pruned = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(snapshot);
        let previous = self.cursor;
        self.cursor = self.history.len() - 1;
        debug!(
            "event=history_commit module=store status=ok cursor={} pruned={}",
            self.cursor, pruned
        );
        self.notify(previous, observer);
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Moves the cursor one snapshot back.
    ///
    /// # Errors
    /// - `NoMoreUndo` at the oldest snapshot.
    pub fn undo(&mut self, observer: &mut dyn SnapshotObserver) -> Result<(), HistoryError> {
        if !self.can_undo() {
            return Err(HistoryError::NoMoreUndo);
        }
        let previous = self.cursor;
        self.cursor -= 1;
        self.notify(previous, observer);
        Ok(())
    }

    /// Moves the cursor one snapshot forward.
    ///
    /// # Errors
    /// - `NoMoreRedo` at the newest snapshot.
    pub fn redo(&mut self, observer: &mut dyn SnapshotObserver) -> Result<(), HistoryError> {
        if !self.can_redo() {
            return Err(HistoryError::NoMoreRedo);
        }
        let previous = self.cursor;
        self.cursor += 1;
        self.notify(previous, observer);
        Ok(())
    }

    fn notify(&self, previous: usize, observer: &mut dyn SnapshotObserver) {
        observer.snapshot_replaced(&self.history[previous], &self.history[self.cursor]);
    }
}
