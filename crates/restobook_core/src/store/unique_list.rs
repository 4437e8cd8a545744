//! Ordered, identity-unique record container.
//!
//! # Invariants
//! - No two elements satisfy `Entity::is_same_identity`.
//! - Insertion order is preserved; list position is display order.
//! - Every operation is all-or-nothing: a failed call leaves the list
//!   unchanged.

use crate::model::entity::Entity;
use crate::store::error::{ListError, ListResult};

/// Duplicate-free sequence of one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueEntityList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueEntityList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> UniqueEntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `items`, rejecting identity duplicates.
    pub fn from_items(items: Vec<T>) -> ListResult<Self> {
        let mut list = Self::new();
        list.replace_all(items)?;
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// True when some element has the same identity as `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same_identity(item))
    }

    /// Position of the element fully equal to `item`.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Appends `item`.
    ///
    /// # Errors
    /// - `DuplicateEntity` when an element with the same identity exists.
    pub fn add(&mut self, item: T) -> ListResult<()> {
        if self.contains(&item) {
            return Err(ListError::DuplicateEntity(T::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` (located by full equality) in place.
    ///
    /// # Errors
    /// - `EntityNotFound` when `target` is absent.
    /// - `DuplicateEntity` when `replacement` shares identity with any
    ///   element other than `target`.
    pub fn set_item(&mut self, target: &T, replacement: T) -> ListResult<()> {
        let index = self
            .position_of(target)
            .ok_or(ListError::EntityNotFound(T::KIND))?;

        let clashes = self
            .items
            .iter()
            .enumerate()
            .any(|(other, existing)| other != index && existing.is_same_identity(&replacement));
        if clashes {
            return Err(ListError::DuplicateEntity(T::KIND));
        }

        self.items[index] = replacement;
        Ok(())
    }

    /// Removes the element fully equal to `item` and returns it.
    ///
    /// # Errors
    /// - `EntityNotFound` when no element equals `item`.
    pub fn remove(&mut self, item: &T) -> ListResult<T> {
        let index = self
            .position_of(item)
            .ok_or(ListError::EntityNotFound(T::KIND))?;
        Ok(self.items.remove(index))
    }

    /// Replaces the whole backing sequence, keeping the input order.
    ///
    /// # Errors
    /// - `DuplicateEntity` when two inputs share identity.
    pub fn replace_all(&mut self, items: Vec<T>) -> ListResult<()> {
        if !all_unique(&items) {
            return Err(ListError::DuplicateEntity(T::KIND));
        }
        self.items = items;
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a UniqueEntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn all_unique<T: Entity>(items: &[T]) -> bool {
    items.iter().enumerate().all(|(index, item)| {
        items[index + 1..]
            .iter()
            .all(|later| !item.is_same_identity(later))
    })
}
