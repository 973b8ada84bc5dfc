use leptos::prelude::*;
use leptos::{ev, html::Dialog};
use std::rc::Rc;

use crate::components::StatusPicker;
use crate::models::{Task, TaskStatus};

/// Builds the task a submission would create, or `None` when the trimmed
/// title is empty. An empty title is silently ignored and nothing reaches
/// the store; this is the boundary that enforces the non-empty-title rule.
pub fn candidate_task(title: &str, description: &str, status: TaskStatus) -> Option<Task> {
    if title.trim().is_empty() {
        return None;
    }
    Some(Task::new(title.to_string(), description.to_string(), status))
}

#[component]
pub fn TaskModal(
    #[prop(into)] on_create: Box<dyn Fn(Task) + 'static>,
    #[prop(into)] open_picker: ReadSignal<Option<String>>,
    #[prop(into)] set_open_picker: WriteSignal<Option<String>>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    // New tasks land in the first column unless the form says otherwise.
    let (status, set_status) = signal(TaskStatus::Todo);

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        let Some(task) = candidate_task(
            &title.get_untracked(),
            &description.get_untracked(),
            status.get_untracked(),
        ) else {
            // Empty title: no task, no error, the dialog stays open.
            return;
        };

        // Call the parent's callback function to add the task to the board
        on_create(task);

        // Reset form fields to their initial state after submission
        set_title.set(String::new());
        set_description.set(String::new());
        set_status.set(TaskStatus::Todo);

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    // Handler for closing the modal without submitting (cancel button or close X)
    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let pick_status = Rc::new(move |new_status: TaskStatus| {
        set_status.set(new_status);
    }) as Rc<dyn Fn(TaskStatus) + 'static>;

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"CREATE TASK"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"TITLE"</label>
                        <input
                            type="text"
                            placeholder="Write a title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                        />
                    </div>
                    <div class="form-group">
                        <label>"DESCRIPTION"</label>
                        <textarea
                            placeholder="Write a description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label>"STATUS"</label>
                        <StatusPicker
                            picker_id="create-task"
                            selected=Signal::derive(move || status.get())
                            open_picker=open_picker
                            set_open_picker=set_open_picker
                            on_select=pick_status
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>"CANCEL"</button>
                        <button type="submit" class="btn-primary">"CREATE"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
