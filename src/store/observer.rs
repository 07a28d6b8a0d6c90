use crate::domain::Board;

/// Notified after every committed board mutation with the new snapshot.
///
/// No-op mutations (unknown ids, moves that change nothing) do not commit
/// and therefore do not notify. The store itself has no idea what observers
/// do with the snapshot; persistence is just one implementation.
pub trait StoreObserver {
    fn board_changed(&self, board: &Board);
}
