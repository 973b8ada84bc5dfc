pub mod actions;
pub mod store;

pub use actions::BoardAction;
pub use store::{column_tasks, reduce};
