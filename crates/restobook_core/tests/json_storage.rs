use restobook_core::{
    sample_book, BookStorage, Capacity, EntityKind, JsonBookStorage, Snapshot, StorageError,
};
use std::fs;

#[test]
fn saved_book_reads_back_unchanged() {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = JsonBookStorage::new(dir.path().join("nested").join("book.json"));
    let book = sample_book().expect("sample book is valid");

    storage.save_book(&book).expect("save should create parent dirs");
    let loaded = storage
        .read_book()
        .expect("read should succeed")
        .expect("book was saved");

    assert_eq!(loaded, book);
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = JsonBookStorage::new(dir.path().join("absent.json"));

    assert!(storage.read_book().expect("missing file is not an error").is_none());
    assert_eq!(storage.path(), dir.path().join("absent.json"));
}

#[test]
fn omitted_sections_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{ "members": [ { "name": "Alice", "phone": "111", "email": "a@example.com" } ] }"#,
    )
    .expect("write fixture");

    let loaded = JsonBookStorage::new(&path)
        .read_book()
        .expect("read should succeed")
        .expect("file exists");

    assert_eq!(loaded.members().len(), 1);
    assert_eq!(loaded.members().as_slice()[0].loyalty_points.value(), 0);
    assert!(loaded.bookings().is_empty());
    assert_eq!(loaded.capacity(), Capacity::default());
}

#[test]
fn duplicate_records_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book.json");
    fs::write(
        &path,
        r#"{
            "ingredients": [
                { "name": "Flour", "quantity": 1, "unit": "kg" },
                { "name": "flour", "quantity": 9, "unit": "g" }
            ]
        }"#,
    )
    .expect("write fixture");

    let err = JsonBookStorage::new(&path)
        .read_book()
        .expect_err("duplicate ingredients must fail");
    assert!(matches!(err, StorageError::Duplicate(EntityKind::Ingredient)));
}

#[test]
fn invalid_field_values_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book.json");
    fs::write(&path, r#"{ "capacity": 0 }"#).expect("write fixture");

    let err = JsonBookStorage::new(&path)
        .read_book()
        .expect_err("zero capacity must fail");
    assert!(matches!(err, StorageError::Json(_)));
    assert!(err.to_string().contains("invalid restaurant book file"));
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("book.json");
    fs::write(&path, "{ not json").expect("write fixture");

    let err = JsonBookStorage::new(&path)
        .read_book()
        .expect_err("malformed file must fail");
    assert!(matches!(err, StorageError::Json(_)));
}

#[test]
fn empty_book_round_trips() {
    let dir = tempfile::tempdir().expect("temp dir");
    let storage = JsonBookStorage::new(dir.path().join("book.json"));
    let book = Snapshot::with_capacity(Capacity::new(13).expect("valid capacity"));

    storage.save_book(&book).expect("save");
    assert_eq!(storage.read_book().expect("read"), Some(book));
}
