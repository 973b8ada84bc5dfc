use crate::models::{Task, TaskStatus};

/// Every transition the board state can make. Each user gesture is turned
/// into exactly one of these and fed through `core::store::reduce`.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    /// Append a freshly created task to the end of the flat sequence.
    Add { task: Task },
    /// A drag dropped the task into a different column.
    MoveAcrossColumn {
        task_id: String,
        new_status: TaskStatus,
    },
    /// A drag changed the task's position among the tasks of its own column.
    /// Indices are positions within that column's projection.
    ReorderWithinColumn {
        status: TaskStatus,
        source_index: usize,
        destination_index: usize,
    },
    /// The status picker assigned a new status directly. Same transition as
    /// `MoveAcrossColumn`; kept separate so picker changes and drag moves
    /// stay distinguishable in the console log.
    SetStatus {
        task_id: String,
        new_status: TaskStatus,
    },
}
