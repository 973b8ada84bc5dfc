use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn KanbanHeader(on_open_modal: Rc<dyn Fn() + 'static>) -> impl IntoView {
    view! {
        <header class="kanban-header">
            <h1>"Task Board"</h1>
            <div class="kanban-actions">
                <button class="btn-primary kanban-header-btn" on:click={
                    let cb = on_open_modal.clone();
                    move |_| (cb.as_ref())()
                }>"+ Add Task"</button>
            </div>
        </header>
    }
}
