use leptos::ev;
use leptos::prelude::*;
use std::rc::Rc;

use crate::components::StatusPicker;
use crate::core::BoardAction;
use crate::features::kanban::services::{drop_action, DragSource};
use crate::models::{Task, TaskStatus};

/// One draggable card. `index` is the card's position within its column's
/// projection, which is what the reorder action speaks in.
#[component]
pub fn TaskCard(
    task: Task,
    index: usize,
    dispatch: Rc<dyn Fn(BoardAction) + 'static>,
    #[prop(into)] drag_source: ReadSignal<Option<DragSource>>,
    #[prop(into)] set_drag_source: WriteSignal<Option<DragSource>>,
    #[prop(into)] open_picker: ReadSignal<Option<String>>,
    #[prop(into)] set_open_picker: WriteSignal<Option<String>>,
) -> impl IntoView {
    let status = task.status;

    let handle_drag_start = {
        let task_id = task.id.clone();
        move |e: ev::DragEvent| {
            // Firefox will not start a drag without payload data.
            if let Some(data) = e.data_transfer() {
                let _ = data.set_data("text/plain", &task_id);
            }
            set_drag_source.set(Some(DragSource {
                task_id: task_id.clone(),
                status,
                index,
            }));
        }
    };

    // Dropping on a card targets this card's slot in the column.
    let handle_drop = {
        let dispatch = dispatch.clone();
        move |e: ev::DragEvent| {
            e.prevent_default();
            e.stop_propagation();
            if let Some(source) = drag_source.get_untracked() {
                if let Some(action) = drop_action(&source, status, index) {
                    dispatch(action);
                }
            }
            set_drag_source.set(None);
        }
    };

    let pick_status = {
        let dispatch = dispatch.clone();
        let task_id = task.id.clone();
        Rc::new(move |new_status: TaskStatus| {
            dispatch(BoardAction::SetStatus {
                task_id: task_id.clone(),
                new_status,
            });
        }) as Rc<dyn Fn(TaskStatus) + 'static>
    };

    let card_id = task.id.clone();

    view! {
        <div
            class="task-card"
            class:dragging=move || drag_source.get().is_some_and(|s| s.task_id == card_id)
            draggable="true"
            on:dragstart=handle_drag_start
            on:dragend=move |_| set_drag_source.set(None)
            on:dragover=move |e: ev::DragEvent| e.prevent_default()
            on:drop=handle_drop
        >
            <div class="task-content">
                <h4>{task.title.clone()}</h4>
                <p>{task.description.clone()}</p>
            </div>
            <StatusPicker
                picker_id=task.id.clone()
                selected=Signal::derive(move || status)
                open_picker=open_picker
                set_open_picker=set_open_picker
                on_select=pick_status
            />
        </div>
    }
}
