use crate::model::entity::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Uniqueness/lookup failure on a `UniqueEntityList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation would leave two records with the same identity.
    DuplicateEntity(EntityKind),
    /// The target record is not present (by full equality).
    EntityNotFound(EntityKind),
}

impl ListError {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::DuplicateEntity(kind) | Self::EntityNotFound(kind) => kind,
        }
    }
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntity(kind) => {
                write!(f, "this {kind} already exists in the restaurant book")
            }
            Self::EntityNotFound(kind) => {
                write!(f, "the {kind} was not found in the restaurant book")
            }
        }
    }
}

impl Error for ListError {}

/// History cursor is already at a boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    NoMoreUndo,
    NoMoreRedo,
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMoreUndo => write!(f, "no more commands to undo"),
            Self::NoMoreRedo => write!(f, "no more commands to redo"),
        }
    }
}

impl Error for HistoryError {}

/// Selection target is not visible under the current predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    NotInView(EntityKind),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInView(kind) => write!(f, "the {kind} is not in the displayed list"),
        }
    }
}

impl Error for ViewError {}
