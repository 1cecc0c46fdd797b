use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    Component, InfoPanel, InfoPanelProps, ProfilePanel, ProfilePanelProps, ACCENT_GOLD,
    ACCENT_TEAL,
};
use crate::action::Action;
use crate::state::{AppState, ViewMode};

/// Props for RecordViewer - read-only view of state
pub struct RecordViewerProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole viewer: header, profile column, info column, help bar
#[derive(Default)]
pub struct RecordViewer {
    info: InfoPanel,
}

impl RecordViewer {
    fn info_props<'a>(state: &'a AppState, is_focused: bool) -> InfoPanelProps<'a> {
        InfoPanelProps {
            record: state.record.as_ref(),
            view: state.view,
            selected_move: state.selected_move,
            is_focused,
        }
    }
}

impl Component<Action> for RecordViewer {
    type Props<'a> = RecordViewerProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('h') | KeyCode::Left => Some(Action::DexPrev),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::DexNext),
                KeyCode::Char('i') => Some(Action::ViewSet(ViewMode::Stats)),
                KeyCode::Char('m') => Some(Action::ViewSet(ViewMode::Moves)),
                KeyCode::Tab => Some(Action::ViewToggle),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::RecordFetch),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => self
                    .info
                    .handle_event(event, Self::info_props(props.state, true))
                    .into_iter()
                    .next(),
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: RecordViewerProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let title = Line::from(vec![
            Span::styled(
                "POKEDEX",
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("#{}", props.state.dex_id),
                Style::default().fg(ACCENT_GOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(chunks[1]);

        let mut profile = ProfilePanel;
        profile.render(frame, left, ProfilePanelProps { state: props.state });

        self.info.render(
            frame,
            right,
            Self::info_props(props.state, props.is_focused),
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("h/l", "prev/next"),
                    StatusBarHint::new("i/m", "info/moves"),
                    StatusBarHint::new("j/k", "scroll"),
                    StatusBarHint::new("r", "reload"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
