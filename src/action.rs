//! Actions - every event the viewer reacts to

use serde::{Deserialize, Serialize};

use crate::state::{PokemonRecord, ViewMode};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    /// Initial mount: fetch the starting record
    Init,

    // ===== Dex category =====
    /// Step to the previous identifier (never below 1)
    DexPrev,

    /// Step to the next identifier
    DexNext,

    // ===== Record category =====
    /// Intent: re-fetch the record for the current identifier
    RecordFetch,

    /// Result: record loaded for the fetch tagged with `generation`
    RecordDidLoad {
        generation: u64,
        record: PokemonRecord,
    },

    /// Result: fetch tagged with `generation` failed
    RecordDidError { generation: u64, error: String },

    // ===== View category =====
    /// Show the given panel
    ViewSet(ViewMode),

    /// Flip between stats and moves
    ViewToggle,

    // ===== Move category =====
    /// Highlight a row of the moves list
    MoveSelect(usize),

    /// Periodic tick for the loading indicator
    Tick,

    /// Exit the application
    Quit,
}
