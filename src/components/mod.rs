pub mod info_panel;
pub mod profile_panel;
pub mod record_viewer;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use info_panel::{InfoPanel, InfoPanelProps};
pub use profile_panel::{ArtworkView, ProfilePanel, ProfilePanelProps};
pub use record_viewer::{RecordViewer, RecordViewerProps};

use ratatui::style::Color;

pub(crate) const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub(crate) const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
pub(crate) const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub(crate) const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub(crate) const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub(crate) const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
