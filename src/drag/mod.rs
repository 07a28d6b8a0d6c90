pub mod resolver;

pub use resolver::{DragItem, DragResolver, DragState, DropTarget};
