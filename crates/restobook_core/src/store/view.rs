//! Filtered, selection-tracking projection of one record list.
//!
//! # Responsibility
//! - Keep the visible subsequence equal to `source.filter(predicate)` for
//!   the latest source handed in.
//! - Keep the selected record valid as the visible list changes.
//! - Notify presentation listeners about item/selection changes.
//!
//! # Invariants
//! - `selected`, when set, is an element of the visible list.
//! - Selection healing runs once per visible-list change, before listeners
//!   are notified:
//!   1. no selection, or the selected record is still visible: keep it;
//!   2. a source edit replaced an equal-sized run containing the selection:
//!      follow it to the new element at the same offset;
//!   3. otherwise select the element before the record's former position
//!      in the new list, or clear at position 0 or on an empty list.
//! - Predicate changes never follow a replaced run; a record that filters
//!   out falls back by position only.

use crate::model::entity::Entity;
use crate::store::change::ListChange;
use crate::store::error::ViewError;
use log::debug;
use std::fmt::{Debug, Formatter};

/// Boxed record predicate.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Change notification delivered to view listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The visible items changed; `revision` is the new view revision.
    ItemsChanged { revision: u64 },
    /// The selected record changed (including being cleared).
    SelectionChanged,
}

/// How a selection reacts to one visible-list change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome<T> {
    Keep,
    Select(T),
    Clear,
}

/// What made the visible list change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshCause {
    /// The underlying list was edited (add, set, remove, replace).
    SourceChanged,
    /// The predicate was replaced or dropped over an unchanged list.
    PredicateChanged,
}

/// Applies the selection healing policy to one change.
///
/// `previous` and `visible` are the visible lists before and after the
/// change; `change` is the replaced run between them.
pub fn heal_selection<T: Entity>(
    selected: &T,
    previous: &[T],
    visible: &[T],
    change: &ListChange<T>,
    cause: RefreshCause,
) -> SelectionOutcome<T> {
    if visible.contains(selected) {
        return SelectionOutcome::Keep;
    }

    if cause == RefreshCause::SourceChanged && change.is_replacement() {
        if let Some(offset) = change.removed.iter().position(|item| item == selected) {
            return SelectionOutcome::Select(change.added[offset].clone());
        }
    }

    let former = previous
        .iter()
        .position(|item| item == selected)
        .unwrap_or(0);
    match former
        .min(visible.len())
        .checked_sub(1)
        .and_then(|index| visible.get(index))
    {
        Some(preceding) => SelectionOutcome::Select(preceding.clone()),
        None => SelectionOutcome::Clear,
    }
}

/// Live filtered projection over one record list.
pub struct FilteredView<T: Entity> {
    predicate: Option<Predicate<T>>,
    visible: Vec<T>,
    selected: Option<T>,
    revision: u64,
    listeners: Vec<Box<dyn FnMut(&ViewEvent)>>,
}

impl<T: Entity> FilteredView<T> {
    /// Unfiltered view over `source` with nothing selected.
    pub fn new(source: &[T]) -> Self {
        Self {
            predicate: None,
            visible: source.to_vec(),
            selected: None,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Visible records in source order.
    pub fn items(&self) -> &[T] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Bumped every time the visible items change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_filtered(&self) -> bool {
        self.predicate.is_some()
    }

    pub fn matches(&self, item: &T) -> bool {
        self.predicate.as_ref().map_or(true, |predicate| predicate(item))
    }

    /// Registers a listener for item and selection changes.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the predicate and recomputes against `source`.
    pub fn set_predicate(&mut self, predicate: Predicate<T>, source: &[T]) {
        self.predicate = Some(predicate);
        self.refresh(source, RefreshCause::PredicateChanged);
    }

    /// Drops the predicate so every record in `source` is visible.
    pub fn show_all(&mut self, source: &[T]) {
        self.predicate = None;
        self.refresh(source, RefreshCause::PredicateChanged);
    }

    /// Selects `item`, or clears the selection with `None`.
    ///
    /// # Errors
    /// - `NotInView` when `item` is not currently visible.
    pub fn set_selected(&mut self, item: Option<T>) -> Result<(), ViewError> {
        if let Some(candidate) = &item {
            if !self.visible.contains(candidate) {
                return Err(ViewError::NotInView(T::KIND));
            }
        }
        if self.selected != item {
            self.selected = item;
            self.emit(ViewEvent::SelectionChanged);
        }
        Ok(())
    }

    /// Recomputes the visible list after the underlying list changed.
    pub fn source_changed(&mut self, source: &[T]) {
        self.refresh(source, RefreshCause::SourceChanged);
    }

    fn refresh(&mut self, source: &[T], cause: RefreshCause) {
        let next: Vec<T> = source
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect();
        let Some(change) = ListChange::between(&self.visible, &next) else {
            return;
        };
        let previous = std::mem::replace(&mut self.visible, next);
        self.revision += 1;

        let outcome = match &self.selected {
            Some(selected) => heal_selection(selected, &previous, &self.visible, &change, cause),
            None => SelectionOutcome::Keep,
        };
        let selection_changed = match outcome {
            SelectionOutcome::Keep => false,
            SelectionOutcome::Select(item) => {
                let changed = self.selected.as_ref() != Some(&item);
                self.selected = Some(item);
                changed
            }
            SelectionOutcome::Clear => {
                self.selected = None;
                true
            }
        };
        if selection_changed {
            debug!(
                "event=selection_healed module=view status=ok kind={} cause={:?} from={} cleared={}",
                T::KIND,
                cause,
                change.from,
                self.selected.is_none()
            );
        }

        self.emit(ViewEvent::ItemsChanged {
            revision: self.revision,
        });
        if selection_changed {
            self.emit(ViewEvent::SelectionChanged);
        }
    }

    fn emit(&mut self, event: ViewEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl<T: Entity> Debug for FilteredView<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredView")
            .field("kind", &T::KIND)
            .field("filtered", &self.predicate.is_some())
            .field("visible", &self.visible.len())
            .field("selected", &self.selected)
            .field("revision", &self.revision)
            .finish()
    }
}
