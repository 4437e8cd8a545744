//! Core domain logic for the restaurant book.
//! This crate is the single source of truth for record, history and view
//! invariants; parsing and rendering live with its callers.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use config::{load_config, ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::booking::{Booking, TimeWindow};
pub use model::entity::{Entity, EntityKind, Record};
pub use model::fields::{
    Address, BookingSize, BookingTime, Capacity, Email, FieldError, LoyaltyPoints, Name, Phone,
    Quantity, Rating, Unit,
};
pub use model::ingredient::Ingredient;
pub use model::member::Member;
pub use model::predicates::{BookingOnDate, NameContainsKeywords, Named};
pub use model::staff::Staff;
pub use service::restaurant_model::{ModelError, ModelResult, RestaurantModel};
pub use service::sample_data::sample_book;
pub use storage::json_storage::{BookStorage, JsonBookStorage, StorageError, StorageResult};
pub use store::book_views::{BookViews, ViewedEntity};
pub use store::capacity::{CapacityGuard, WindowPolicy};
pub use store::change::ListChange;
pub use store::error::{HistoryError, ListError, ListResult, ViewError};
pub use store::history::{SnapshotObserver, VersionedStore};
pub use store::snapshot::{BookEntity, Snapshot};
pub use store::unique_list::UniqueEntityList;
pub use store::view::{
    heal_selection, FilteredView, Predicate, RefreshCause, SelectionOutcome, ViewEvent,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
