use crate::core::actions::BoardAction;
use crate::models::{Task, TaskStatus};

/// Applies one action to the flat task sequence and returns the next
/// sequence. Total over every well-formed action: unknown task ids and
/// out-of-range indices fall through with the state unchanged.
pub fn reduce(state: Vec<Task>, action: BoardAction) -> Vec<Task> {
    match action {
        BoardAction::Add { task } => {
            let mut next = state;
            next.push(task);
            next
        }
        // Both status-changing actions are the same transition.
        BoardAction::MoveAcrossColumn { task_id, new_status }
        | BoardAction::SetStatus { task_id, new_status } => set_status(state, &task_id, new_status),
        BoardAction::ReorderWithinColumn {
            status,
            source_index,
            destination_index,
        } => reorder_within_column(state, status, source_index, destination_index),
    }
}

/// The ordered sub-sequence of tasks sitting in the given column. Relative
/// order is the flat-sequence order; the projection holds no state of its
/// own and is recomputed on every render.
pub fn column_tasks(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == status).cloned().collect()
}

// A status change keeps the task's slot in the flat sequence.
fn set_status(mut state: Vec<Task>, task_id: &str, new_status: TaskStatus) -> Vec<Task> {
    if let Some(task) = state.iter_mut().find(|t| t.id == task_id) {
        task.update_status(new_status);
    }
    state
}

// Moves the task at `source_index` of the column's projection to
// `destination_index`, permuting only the flat slots that column occupies.
// Tasks in every other column keep their exact flat positions.
fn reorder_within_column(
    mut state: Vec<Task>,
    status: TaskStatus,
    source_index: usize,
    destination_index: usize,
) -> Vec<Task> {
    let slots: Vec<usize> = state
        .iter()
        .enumerate()
        .filter(|(_, t)| t.status == status)
        .map(|(i, _)| i)
        .collect();

    if source_index >= slots.len() || destination_index >= slots.len() {
        return state;
    }
    if source_index == destination_index {
        return state;
    }

    let mut column: Vec<Task> = slots.iter().map(|&i| state[i].clone()).collect();
    let dragged = column.remove(source_index);
    column.insert(destination_index, dragged);

    for (slot, task) in slots.into_iter().zip(column) {
        state[slot] = task;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn task(title: &str, status: TaskStatus) -> Task {
        Task::new(title.to_string(), String::new(), status)
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn add_appends_and_keeps_ids_unique() {
        let mut state = Vec::new();
        for i in 0..10 {
            state = reduce(
                state,
                BoardAction::Add {
                    task: task(&format!("task {i}"), TaskStatus::Todo),
                },
            );
        }
        assert_eq!(state.len(), 10);
        let ids: HashSet<&str> = state.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn column_tasks_filters_by_status_in_flat_order() {
        let state = vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::Todo),
            task("d", TaskStatus::InQa),
        ];
        assert_eq!(titles(&column_tasks(&state, TaskStatus::Todo)), vec!["a", "c"]);
        assert_eq!(titles(&column_tasks(&state, TaskStatus::Done)), vec!["b"]);
        assert!(column_tasks(&state, TaskStatus::Deployed).is_empty());
    }

    #[test]
    fn set_status_touches_only_the_matching_task() {
        let state = vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::Todo),
            task("c", TaskStatus::Done),
        ];
        let target = state[1].clone();
        let before = state.clone();

        let next = reduce(
            state,
            BoardAction::SetStatus {
                task_id: target.id.clone(),
                new_status: TaskStatus::InProgress,
            },
        );

        assert_eq!(next.len(), before.len());
        assert_eq!(next[0], before[0]);
        assert_eq!(next[2], before[2]);
        assert_eq!(next[1].status, TaskStatus::InProgress);
        // Everything but the status is untouched.
        assert_eq!(next[1].id, target.id);
        assert_eq!(next[1].title, target.title);
        assert_eq!(next[1].description, target.description);
        assert_eq!(next[1].created_at, target.created_at);
    }

    #[test]
    fn status_change_with_unknown_id_is_a_no_op() {
        let state = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Done)];
        let before = state.clone();
        let next = reduce(
            state,
            BoardAction::MoveAcrossColumn {
                task_id: "no-such-task".to_string(),
                new_status: TaskStatus::Deployed,
            },
        );
        assert_eq!(next, before);
    }

    #[test]
    fn move_across_column_and_set_status_agree() {
        let state = vec![task("a", TaskStatus::Todo)];
        let id = state[0].id.clone();

        let via_move = reduce(
            state.clone(),
            BoardAction::MoveAcrossColumn {
                task_id: id.clone(),
                new_status: TaskStatus::InQa,
            },
        );
        let via_set = reduce(
            state,
            BoardAction::SetStatus {
                task_id: id,
                new_status: TaskStatus::InQa,
            },
        );
        assert_eq!(via_move, via_set);
    }

    #[test]
    fn move_keeps_flat_position() {
        let state = vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::Todo),
            task("c", TaskStatus::Todo),
        ];
        let id = state[1].id.clone();
        let next = reduce(
            state,
            BoardAction::MoveAcrossColumn {
                task_id: id,
                new_status: TaskStatus::Done,
            },
        );
        assert_eq!(titles(&next), vec!["a", "b", "c"]);
    }

    #[test]
    fn reorder_preserves_multiset_and_statuses() {
        let state = vec![
            task("a", TaskStatus::Todo),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::Todo),
            task("d", TaskStatus::Todo),
        ];
        let before = state.clone();

        let next = reduce(
            state,
            BoardAction::ReorderWithinColumn {
                status: TaskStatus::Todo,
                source_index: 2,
                destination_index: 0,
            },
        );

        assert_eq!(next.len(), before.len());
        let ids_before: HashSet<String> = before.iter().map(|t| t.id.clone()).collect();
        let ids_after: HashSet<String> = next.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids_before, ids_after);
        for task in &next {
            let original = before.iter().find(|t| t.id == task.id).unwrap();
            assert_eq!(task.status, original.status);
        }
    }

    #[test]
    fn reorder_leaves_other_columns_in_place() {
        let state = vec![
            task("t1", TaskStatus::Todo),
            task("d1", TaskStatus::Done),
            task("t2", TaskStatus::Todo),
            task("q1", TaskStatus::InQa),
            task("t3", TaskStatus::Todo),
        ];

        let next = reduce(
            state,
            BoardAction::ReorderWithinColumn {
                status: TaskStatus::Todo,
                source_index: 0,
                destination_index: 2,
            },
        );

        // Only the Todo slots were permuted; d1 and q1 sit exactly where
        // they were in the flat sequence.
        assert_eq!(titles(&next), vec!["t2", "d1", "t3", "q1", "t1"]);
    }

    #[test]
    fn reorder_with_out_of_range_indices_is_a_no_op() {
        let state = vec![task("a", TaskStatus::Todo), task("b", TaskStatus::Todo)];
        let before = state.clone();

        let next = reduce(
            state.clone(),
            BoardAction::ReorderWithinColumn {
                status: TaskStatus::Todo,
                source_index: 5,
                destination_index: 0,
            },
        );
        assert_eq!(next, before);

        let next = reduce(
            state,
            BoardAction::ReorderWithinColumn {
                status: TaskStatus::Todo,
                source_index: 0,
                destination_index: 5,
            },
        );
        assert_eq!(next, before);
    }

    #[test]
    fn reorder_in_an_untouched_column_is_a_no_op() {
        let state = vec![task("a", TaskStatus::Todo)];
        let before = state.clone();
        let next = reduce(
            state,
            BoardAction::ReorderWithinColumn {
                status: TaskStatus::Deployed,
                source_index: 0,
                destination_index: 0,
            },
        );
        assert_eq!(next, before);
    }

    #[test]
    fn add_then_move_scenario() {
        let a = task("A", TaskStatus::Todo);
        let b = task("B", TaskStatus::Todo);
        let a_id = a.id.clone();

        let mut state = reduce(Vec::new(), BoardAction::Add { task: a });
        state = reduce(state, BoardAction::Add { task: b });
        assert_eq!(titles(&column_tasks(&state, TaskStatus::Todo)), vec!["A", "B"]);

        state = reduce(
            state,
            BoardAction::MoveAcrossColumn {
                task_id: a_id,
                new_status: TaskStatus::Done,
            },
        );
        assert_eq!(titles(&column_tasks(&state, TaskStatus::Todo)), vec!["B"]);
        assert_eq!(titles(&column_tasks(&state, TaskStatus::Done)), vec!["A"]);
    }

    #[test]
    fn reorder_scenario_moves_first_to_last() {
        let mut state = Vec::new();
        for title in ["A", "B", "C"] {
            state = reduce(state, BoardAction::Add { task: task(title, TaskStatus::Todo) });
        }

        state = reduce(
            state,
            BoardAction::ReorderWithinColumn {
                status: TaskStatus::Todo,
                source_index: 0,
                destination_index: 2,
            },
        );
        assert_eq!(titles(&column_tasks(&state, TaskStatus::Todo)), vec!["B", "C", "A"]);
    }
}
