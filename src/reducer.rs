//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LoadStatus};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init | Action::RecordFetch => start_fetch(state),

        // ===== Dex actions =====
        Action::DexPrev => {
            if !state.decrement() {
                return DispatchResult::unchanged();
            }
            start_fetch(state)
        }

        Action::DexNext => {
            if !state.increment() {
                return DispatchResult::unchanged();
            }
            start_fetch(state)
        }

        // ===== Record results =====
        Action::RecordDidLoad { generation, record } => {
            if !state.is_current(generation) {
                return DispatchResult::unchanged();
            }
            state.record = Some(record);
            state.selected_move = 0;
            state.status = LoadStatus::Idle;
            DispatchResult::changed()
        }

        Action::RecordDidError { generation, error } => {
            if !state.is_current(generation) {
                return DispatchResult::unchanged();
            }
            state.status = LoadStatus::Error(error);
            DispatchResult::changed()
        }

        // ===== View actions =====
        Action::ViewSet(mode) => {
            if state.view == mode {
                return DispatchResult::unchanged();
            }
            state.view = mode;
            DispatchResult::changed()
        }

        Action::ViewToggle => {
            state.view = state.view.toggle();
            DispatchResult::changed()
        }

        // ===== Move actions =====
        Action::MoveSelect(index) => {
            if !state.select_move(index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::Tick => {
            if !state.status.is_loading() {
                return DispatchResult::unchanged();
            }
            state.tick_count = state.tick_count.wrapping_add(1);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn start_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    let generation = state.begin_fetch();
    DispatchResult::changed_with(Effect::FetchRecord {
        id: state.request_id(),
        generation,
    })
}
