use leptos::prelude::*;
use std::rc::Rc;

use crate::models::TaskStatus;

/// Dropdown listing every column. The page keeps at most one picker open at
/// a time through the shared `open_picker` signal, keyed by `picker_id`;
/// clicking anywhere else on the page closes it.
#[component]
pub fn StatusPicker(
    #[prop(into)] picker_id: String,
    #[prop(into)] selected: Signal<TaskStatus>,
    #[prop(into)] open_picker: ReadSignal<Option<String>>,
    #[prop(into)] set_open_picker: WriteSignal<Option<String>>,
    on_select: Rc<dyn Fn(TaskStatus) + 'static>,
) -> impl IntoView {
    let toggle = {
        let picker_id = picker_id.clone();
        move |e: leptos::ev::MouseEvent| {
            e.stop_propagation();
            if open_picker.get() == Some(picker_id.clone()) {
                set_open_picker.set(None);
            } else {
                set_open_picker.set(Some(picker_id.clone()));
            }
        }
    };

    view! {
        <div class="status-picker">
            <button type="button" class="status-picker-btn" on:click=toggle>
                {move || selected.get().as_str()}
                <span class="status-picker-caret">"▼"</span>
            </button>

            <div class="status-picker-menu" class:show=move || open_picker.get() == Some(picker_id.clone())>
                {TaskStatus::all().into_iter().map(|status| {
                    let on_select = on_select.clone();
                    view! {
                        <button type="button" class="status-picker-item" on:click=move |e| {
                            e.stop_propagation();
                            set_open_picker.set(None);
                            on_select(status);
                        }>{status.as_str()}</button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
