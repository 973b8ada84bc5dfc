pub mod drag;

pub use drag::{drop_action, DragSource};
