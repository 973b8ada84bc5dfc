use leptos::ev;
use leptos::prelude::*;
use std::rc::Rc;

use crate::core::{column_tasks, BoardAction};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::services::{drop_action, DragSource};
use crate::models::{Task, TaskStatus};

#[component]
pub fn KanbanColumn(
    status: TaskStatus,
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    dispatch: Rc<dyn Fn(BoardAction) + 'static>,
    #[prop(into)] drag_source: ReadSignal<Option<DragSource>>,
    #[prop(into)] set_drag_source: WriteSignal<Option<DragSource>>,
    #[prop(into)] open_picker: ReadSignal<Option<String>>,
    #[prop(into)] set_open_picker: WriteSignal<Option<String>>,
) -> impl IntoView {
    // Dropping on the column background targets the last slot of this
    // column; card-level drops stop propagation before reaching here.
    let handle_drop = {
        let dispatch = dispatch.clone();
        move |e: ev::DragEvent| {
            e.prevent_default();
            if let Some(source) = drag_source.get_untracked() {
                let len = tasks.with_untracked(|tasks| column_tasks(tasks, status).len());
                if let Some(action) = drop_action(&source, status, len.saturating_sub(1)) {
                    dispatch(action);
                }
            }
            set_drag_source.set(None);
        }
    };

    // The reactive card list below is a view closure, which leptos requires
    // to be `Send`. `Rc` is not `Send`, so the dispatch handle is parked in a
    // thread-local `StoredValue` whose handle is `Send + Copy`; dispatch is
    // still invoked exactly as before.
    let dispatch = StoredValue::new_local(dispatch);

    view! {
        <div
            class="kanban-column"
            on:dragover=move |e: ev::DragEvent| e.prevent_default()
            on:drop=handle_drop
        >
            <div class="column-header">
                <h3>{status.as_str()}</h3>
                // Reactive task count - updates automatically when tasks change
                <span class="task-count">
                    {move || tasks.with(|tasks| column_tasks(tasks, status).len())}
                </span>
            </div>
            <div class="column-content">
                // Reactive card list - re-renders when the tasks signal changes
                {move || {
                    tasks
                        .with(|tasks| column_tasks(tasks, status))
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| {
                            view! {
                                <TaskCard
                                    task=task
                                    index=index
                                    dispatch=dispatch.get_value()
                                    drag_source=drag_source
                                    set_drag_source=set_drag_source
                                    open_picker=open_picker
                                    set_open_picker=set_open_picker
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
