pub mod blob;
pub mod snapshot;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use snapshot::{
    load_board, load_or_seed, save_board, PersistToBlob, SCHEMA_VERSION, STORAGE_KEY,
};
