use leptos::prelude::*;
use std::rc::Rc;

use crate::core::BoardAction;
use crate::features::kanban::components::KanbanColumn;
use crate::features::kanban::services::DragSource;
use crate::models::{Task, TaskStatus};

/// The five columns in display order, all projected from the one flat
/// task sequence.
#[component]
pub fn KanbanBoard(
    #[prop(into)] tasks: ReadSignal<Vec<Task>>,
    dispatch: Rc<dyn Fn(BoardAction) + 'static>,
    #[prop(into)] drag_source: ReadSignal<Option<DragSource>>,
    #[prop(into)] set_drag_source: WriteSignal<Option<DragSource>>,
    #[prop(into)] open_picker: ReadSignal<Option<String>>,
    #[prop(into)] set_open_picker: WriteSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="kanban-board">
            {TaskStatus::all().into_iter().map(|status| {
                view! {
                    <KanbanColumn
                        status=status
                        tasks=tasks
                        dispatch=dispatch.clone()
                        drag_source=drag_source
                        set_drag_source=set_drag_source
                        open_picker=open_picker
                        set_open_picker=set_open_picker
                    />
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
