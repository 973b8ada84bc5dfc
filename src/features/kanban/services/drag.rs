use crate::core::BoardAction;
use crate::models::TaskStatus;

/// Where the drag gesture currently in flight started: the task, its column,
/// and its position within that column's projection.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSource {
    pub task_id: String,
    pub status: TaskStatus,
    pub index: usize,
}

/// Translates a completed drag gesture into the action it stands for.
/// A drop in the source's own column becomes a reorder to
/// `destination_index`; a drop in any other column becomes a cross-column
/// move (the flat-sequence position is left alone). Dropping a card back
/// onto its own slot emits nothing.
pub fn drop_action(
    source: &DragSource,
    target_status: TaskStatus,
    destination_index: usize,
) -> Option<BoardAction> {
    if source.status == target_status {
        if destination_index == source.index {
            return None;
        }
        Some(BoardAction::ReorderWithinColumn {
            status: source.status,
            source_index: source.index,
            destination_index,
        })
    } else {
        Some(BoardAction::MoveAcrossColumn {
            task_id: source.task_id.clone(),
            new_status: target_status,
        })
    }
}
