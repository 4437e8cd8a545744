//! JSON file storage for restaurant books.
//!
//! # Invariants
//! - A missing file reads as `None`, not as an error.
//! - Duplicate records in a file are rejected, never silently dropped.
//! - Writes create missing parent directories.

use crate::model::booking::Booking;
use crate::model::entity::EntityKind;
use crate::model::fields::Capacity;
use crate::model::ingredient::Ingredient;
use crate::model::member::Member;
use crate::model::staff::Staff;
use crate::store::error::ListError;
use crate::store::snapshot::Snapshot;
use crate::store::unique_list::UniqueEntityList;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage read/write failure.
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The file holds two records with the same identity.
    Duplicate(EntityKind),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io error: {err}"),
            Self::Json(err) => write!(f, "invalid restaurant book file: {err}"),
            Self::Duplicate(kind) => {
                write!(f, "invalid restaurant book file: duplicate {kind} records")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Duplicate(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ListError> for StorageError {
    fn from(value: ListError) -> Self {
        Self::Duplicate(value.kind())
    }
}

/// Persistence contract for whole restaurant books.
pub trait BookStorage {
    fn path(&self) -> &Path;
    /// Reads the stored book; `Ok(None)` when nothing is stored yet.
    fn read_book(&self) -> StorageResult<Option<Snapshot>>;
    fn save_book(&self, book: &Snapshot) -> StorageResult<()>;
}

/// Serialized file shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonBook {
    #[serde(default)]
    members: Vec<Member>,
    #[serde(default)]
    staff: Vec<Staff>,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    bookings: Vec<Booking>,
    #[serde(default)]
    capacity: Capacity,
}

impl JsonBook {
    fn from_snapshot(book: &Snapshot) -> Self {
        Self {
            members: book.members().as_slice().to_vec(),
            staff: book.staff().as_slice().to_vec(),
            ingredients: book.ingredients().as_slice().to_vec(),
            bookings: book.bookings().as_slice().to_vec(),
            capacity: book.capacity(),
        }
    }

    fn into_snapshot(self) -> StorageResult<Snapshot> {
        Ok(Snapshot::from_parts(
            UniqueEntityList::from_items(self.members)?,
            UniqueEntityList::from_items(self.staff)?,
            UniqueEntityList::from_items(self.ingredients)?,
            UniqueEntityList::from_items(self.bookings)?,
            self.capacity,
        ))
    }
}

/// Pretty-printed JSON file storage.
#[derive(Debug, Clone)]
pub struct JsonBookStorage {
    path: PathBuf,
}

impl JsonBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookStorage for JsonBookStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_book(&self) -> StorageResult<Option<Snapshot>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!("event=storage_read module=storage status=ok found=false");
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=storage_read module=storage status=error reason=io kind={:?}",
                    err.kind()
                );
                return Err(err.into());
            }
        };

        let parsed: JsonBook = serde_json::from_str(&text).map_err(|err| {
            error!(
                "event=storage_read module=storage status=error reason=json line={}",
                err.line()
            );
            StorageError::from(err)
        })?;
        let book = parsed.into_snapshot()?;
        info!(
            "event=storage_read module=storage status=ok found=true members={} staff={} ingredients={} bookings={}",
            book.members().len(),
            book.staff().len(),
            book.ingredients().len(),
            book.bookings().len()
        );
        Ok(Some(book))
    }

    fn save_book(&self, book: &Snapshot) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(&JsonBook::from_snapshot(book))?;
        std::fs::write(&self.path, text)?;
        info!("event=storage_write module=storage status=ok");
        Ok(())
    }
}
