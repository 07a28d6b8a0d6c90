mod common;

use kanban_board::domain::{Board, BoardError, ColumnId};
use kanban_board::persistence::{
    load_board, load_or_seed, save_board, BlobStore, FileBlobStore, MemoryBlobStore,
    PersistToBlob, STORAGE_KEY,
};
use kanban_board::store::BoardStore;

#[test]
fn test_file_blob_roundtrip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blobs = FileBlobStore::new(dir.path());

    let board = Board::seed();
    save_board(&blobs, &board).unwrap();

    let restored = load_board(&blobs).unwrap().expect("snapshot should exist");
    assert_eq!(restored, board);
}

#[test]
fn test_load_missing_blob_returns_none() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blobs = FileBlobStore::new(dir.path());

    assert!(load_board(&blobs).unwrap().is_none());
}

#[test]
fn test_load_or_seed_without_blob_seeds() {
    let blobs = MemoryBlobStore::new();

    let board = load_or_seed(&blobs);

    assert_eq!(board.columns.len(), 3);
    assert_eq!(board.card_count(), 4);
}

#[test]
fn test_version_mismatch_is_rejected_and_falls_back() {
    let blobs = MemoryBlobStore::new();
    blobs
        .write(STORAGE_KEY, r#"{"version":2,"state":{"columns":[],"cards":{}}}"#)
        .unwrap();

    match load_board(&blobs) {
        Err(BoardError::SchemaVersion { found, expected }) => {
            assert_eq!(found, 2);
            assert_eq!(expected, 1);
        }
        other => panic!("expected schema version error, got {other:?}"),
    }

    let board = load_or_seed(&blobs);
    assert_eq!(board.columns.len(), 3);
}

#[test]
fn test_corrupt_blob_falls_back_to_seed() {
    let blobs = MemoryBlobStore::new();
    blobs.write(STORAGE_KEY, "not json at all").unwrap();

    assert!(matches!(
        load_board(&blobs),
        Err(BoardError::Serialization(_))
    ));

    let board = load_or_seed(&blobs);
    board.check_integrity().unwrap();
}

#[test]
fn test_observer_persists_after_each_mutation() {
    let blobs = MemoryBlobStore::new();
    let mut store = common::seeded_store();
    store.subscribe(Box::new(PersistToBlob::new(blobs.clone())));

    // Nothing written until the first committed mutation.
    assert!(blobs.read(STORAGE_KEY).unwrap().is_none());

    let backlog = store.add_column("Backlog");
    let after_column = blobs.read(STORAGE_KEY).unwrap().expect("snapshot written");

    store.add_card(backlog, "Spike", None).unwrap();
    let after_card = blobs.read(STORAGE_KEY).unwrap().expect("snapshot written");
    assert_ne!(after_column, after_card);

    let persisted = load_board(&blobs).unwrap().unwrap();
    assert_eq!(persisted, *store.board());
}

#[test]
fn test_observer_skips_noop_mutations() {
    let blobs = MemoryBlobStore::new();
    let mut store = common::seeded_store();
    store.subscribe(Box::new(PersistToBlob::new(blobs.clone())));

    store.add_column("Backlog");
    let before = blobs.read(STORAGE_KEY).unwrap().unwrap();

    store.rename_column(ColumnId::new(), "Ghost");
    store.delete_column(ColumnId::new());

    assert_eq!(blobs.read(STORAGE_KEY).unwrap().unwrap(), before);
}

#[test]
fn test_board_survives_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blobs = FileBlobStore::new(dir.path());

    let mut store = BoardStore::new(load_or_seed(&blobs));
    store.subscribe(Box::new(PersistToBlob::new(blobs.clone())));
    let todo = common::column_id(&store, "To Do");
    let done = common::column_id(&store, "Done");
    let card = common::card_ids(&store, "To Do")[0];
    store.move_card(card, todo, done, 0);
    store.rename_column(todo, "Up Next");
    let final_board = store.board();

    // A fresh process restores the exact same document.
    let restored = BoardStore::new(load_or_seed(&blobs));
    assert_eq!(*restored.board(), *final_board);
    restored.board().check_integrity().unwrap();
}
