use leptos::html::Dialog;
use leptos::prelude::*;
use std::rc::Rc;

use crate::components::TaskModal;
use crate::core::BoardAction;
use crate::features::kanban::components::{KanbanBoard, KanbanHeader};
use crate::features::kanban::hooks::use_board;
use crate::features::kanban::services::DragSource;
use crate::models::Task;

#[component]
pub fn KanbanPage() -> impl IntoView {
    let board = use_board();
    let tasks = board.tasks;
    let dispatch = board.dispatch;

    // At most one status picker is open at a time, keyed by picker id
    let (open_picker, set_open_picker) = signal::<Option<String>>(None);

    // The drag gesture currently in flight, if any
    let (drag_source, set_drag_source) = signal::<Option<DragSource>>(None);

    // Reference to the HTML dialog element so the page can open it
    // programmatically from the header button
    let dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let open_modal = Rc::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    }) as Rc<dyn Fn() + 'static>;

    // Callback the modal fires when a submission passes the title guard;
    // it emits exactly one create event into the store
    let create_task = {
        let dispatch = dispatch.clone();
        Box::new(move |task: Task| {
            dispatch(BoardAction::Add { task });
        }) as Box<dyn Fn(Task) + 'static>
    };

    view! {
        <div
            class="kanban-page"
            on:click=move |_| {
                // Close any open status picker when clicking outside
                set_open_picker.set(None);
            }
        >
            <KanbanHeader on_open_modal=open_modal />

            <KanbanBoard
                tasks=tasks
                dispatch=dispatch.clone()
                drag_source=drag_source
                set_drag_source=set_drag_source
                open_picker=open_picker
                set_open_picker=set_open_picker
            />

            <TaskModal
                on_create=create_task
                open_picker=open_picker
                set_open_picker=set_open_picker
                dialog_ref=dialog_ref
            />
        </div>
    }
}
