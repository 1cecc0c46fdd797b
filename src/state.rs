//! Application state - single source of truth

use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

/// Starting identifier when none is given on the command line.
pub const DEFAULT_DEX_ID: u32 = 132;

/// Lowest identifier the Record Source accepts.
pub const MIN_DEX_ID: u32 = 1;

pub const LOADING_TICK_MS: u64 = 120;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub artwork_url: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<PokemonStat>,
    pub moves: Vec<String>,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub value: u32,
}

/// Which panel the info column shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Stats,
    Moves,
}

impl ViewMode {
    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Stats => ViewMode::Moves,
            ViewMode::Moves => ViewMode::Stats,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ViewMode::Stats => 0,
            ViewMode::Moves => 1,
        }
    }
}

/// Lifecycle of the current fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub dex_id: u32,
    /// Most recent successfully fetched record
    pub record: Option<PokemonRecord>,
    pub view: ViewMode,
    /// Highlighted row in the moves list
    pub selected_move: usize,
    pub status: LoadStatus,
    /// Bumped on every fetch; results tagged with an older value are stale
    pub generation: u64,
    pub tick_count: u32,
}

impl AppState {
    pub fn new(dex_id: u32) -> Self {
        Self {
            dex_id: dex_id.max(MIN_DEX_ID),
            record: None,
            view: ViewMode::default(),
            selected_move: 0,
            status: LoadStatus::Idle,
            generation: 0,
            tick_count: 0,
        }
    }

    /// Identifier to request, never below [`MIN_DEX_ID`].
    pub fn request_id(&self) -> u32 {
        self.dex_id.max(MIN_DEX_ID)
    }

    /// Returns true if the identifier changed.
    pub fn decrement(&mut self) -> bool {
        let next = self.dex_id.saturating_sub(1).max(MIN_DEX_ID);
        if next == self.dex_id {
            return false;
        }
        self.dex_id = next;
        true
    }

    /// Returns true if the identifier changed.
    pub fn increment(&mut self) -> bool {
        let next = self.dex_id.saturating_add(1);
        if next == self.dex_id {
            return false;
        }
        self.dex_id = next;
        true
    }

    /// Invalidates every outstanding fetch and returns the new generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.status = LoadStatus::Loading;
        self.tick_count = 0;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn move_count(&self) -> usize {
        self.record.as_ref().map_or(0, |record| record.moves.len())
    }

    /// Clamp `index` to the move list. Returns true if the selection moved.
    pub fn select_move(&mut self, index: usize) -> bool {
        let count = self.move_count();
        if count == 0 {
            return false;
        }
        let bounded = index.min(count - 1);
        if bounded == self.selected_move {
            return false;
        }
        self.selected_move = bounded;
        true
    }

    pub fn record_name(&self) -> Option<&str> {
        self.record.as_ref().map(|record| record.name.as_str())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_DEX_ID)
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Record")
                .entry("dex_id", ron_string(&self.dex_id))
                .entry("name", ron_string(&self.record_name()))
                .entry("generation", ron_string(&self.generation)),
            DebugSection::new("View")
                .entry("view", ron_string(&self.view))
                .entry("selected_move", ron_string(&self.selected_move))
                .entry("status", ron_string(&self.status)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_to_minimum() {
        let state = AppState::new(0);
        assert_eq!(state.dex_id, MIN_DEX_ID);
        assert_eq!(state.request_id(), 1);
    }

    #[test]
    fn test_decrement_never_below_one() {
        for start in [1, 2, 3, 132, u32::MAX] {
            let mut state = AppState::new(start);
            state.decrement();
            assert!(state.dex_id >= MIN_DEX_ID);
        }

        let mut state = AppState::new(1);
        assert!(!state.decrement());
        assert_eq!(state.dex_id, 1);
    }

    #[test]
    fn test_increment_has_no_upper_bound() {
        let mut state = AppState::new(1025);
        assert!(state.increment());
        assert_eq!(state.dex_id, 1026);
    }

    #[test]
    fn test_begin_fetch_invalidates_previous_generation() {
        let mut state = AppState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert_ne!(first, second);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
        assert!(state.status.is_loading());
    }

    #[test]
    fn test_select_move_clamps_to_list() {
        let mut state = AppState {
            record: Some(PokemonRecord {
                moves: vec!["pound".into(), "tackle".into(), "growl".into()],
                ..Default::default()
            }),
            ..Default::default()
        };

        assert!(state.select_move(1));
        assert!(!state.select_move(1));
        assert!(state.select_move(50));
        assert_eq!(state.selected_move, 2);
    }

    #[test]
    fn test_select_move_without_moves() {
        let mut state = AppState::default();
        assert!(!state.select_move(3));
        assert_eq!(state.selected_move, 0);
    }

    #[test]
    fn test_view_toggle() {
        assert_eq!(ViewMode::Stats.toggle(), ViewMode::Moves);
        assert_eq!(ViewMode::Moves.toggle(), ViewMode::Stats);
    }
}
