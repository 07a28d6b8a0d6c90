//! Versioned board snapshot blob.
//!
//! The whole board is serialized under one fixed key as
//! `{ "version": N, "state": { "columns": [...], "cards": {...} } }`.
//! A missing blob, a parse failure, or a version mismatch all resolve to
//! the seed board at the call site.

use serde::{Deserialize, Serialize};

use crate::domain::{Board, BoardError};
use crate::store::StoreObserver;

use super::blob::BlobStore;

/// Namespace key the board blob is stored under.
pub const STORAGE_KEY: &str = "kanban-board-v1";

/// Schema version of the persisted envelope.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Envelope {
    version: u32,
    state: Board,
}

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    state: &'a Board,
}

/// Reads the persisted board, if a compatible blob exists.
pub fn load_board(blobs: &dyn BlobStore) -> Result<Option<Board>, BoardError> {
    let Some(raw) = blobs.read(STORAGE_KEY)? else {
        return Ok(None);
    };
    let envelope: Envelope = serde_json::from_str(&raw)?;
    if envelope.version != SCHEMA_VERSION {
        return Err(BoardError::SchemaVersion {
            found: envelope.version,
            expected: SCHEMA_VERSION,
        });
    }
    Ok(Some(envelope.state))
}

/// Writes a full snapshot of the board under the fixed key.
pub fn save_board(blobs: &dyn BlobStore, board: &Board) -> Result<(), BoardError> {
    let raw = serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        state: board,
    })?;
    blobs.write(STORAGE_KEY, &raw)
}

/// The startup path: restored board when the blob is present and
/// compatible, otherwise the seed.
pub fn load_or_seed(blobs: &dyn BlobStore) -> Board {
    match load_board(blobs) {
        Ok(Some(board)) => {
            tracing::info!(
                columns = board.columns.len(),
                cards = board.cards.len(),
                "restored board from persisted snapshot"
            );
            board
        }
        Ok(None) => {
            tracing::info!("no persisted snapshot found, seeding board");
            Board::seed()
        }
        Err(err) => {
            tracing::warn!("discarding persisted snapshot, seeding board: {err}");
            Board::seed()
        }
    }
}

/// Store observer that writes a full snapshot after every committed
/// mutation. Write failures are logged and swallowed; persistence problems
/// must never surface as store failures.
pub struct PersistToBlob<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> PersistToBlob<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }
}

impl<B: BlobStore> StoreObserver for PersistToBlob<B> {
    fn board_changed(&self, board: &Board) {
        if let Err(err) = save_board(&self.blobs, board) {
            tracing::warn!("failed to persist board snapshot: {err}");
        }
    }
}
