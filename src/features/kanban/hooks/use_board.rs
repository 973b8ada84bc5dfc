use leptos::prelude::*;
use std::rc::Rc;

use crate::core::{reduce, BoardAction};
use crate::models::Task;

/// Owns the flat task sequence and hands the view layer its only way in:
/// a read signal for rendering plus a dispatch callback for transitions.
pub struct BoardHook {
    pub tasks: ReadSignal<Vec<Task>>,
    pub dispatch: Rc<dyn Fn(BoardAction) + 'static>,
}

pub fn use_board() -> BoardHook {
    // The board starts empty; state lives for exactly as long as the page.
    let tasks = RwSignal::new(Vec::<Task>::new());

    let dispatch = Rc::new(move |action: BoardAction| {
        web_sys::console::log_1(&format!("dispatch: {:?}", action).into());
        // Applying the reducer inside `update` makes every transition a
        // single atomic signal write, which re-renders the projections.
        tasks.update(|state| {
            let previous = std::mem::take(state);
            *state = reduce(previous, action);
        });
    }) as Rc<dyn Fn(BoardAction) + 'static>;

    BoardHook {
        tasks: tasks.read_only(),
        dispatch,
    }
}
