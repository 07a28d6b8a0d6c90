pub mod board_store;
pub mod observer;

pub use board_store::BoardStore;
pub use observer::StoreObserver;
