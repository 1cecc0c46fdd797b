use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, SelectList, SelectListBehavior, SelectListProps, SelectListStyle,
    SelectionStyle,
};

use super::{Component, ACCENT_TEAL, BG_HIGHLIGHT, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::format::{format_height, format_weight, title_case};
use crate::state::{PokemonRecord, ViewMode};

/// Right column: stats or a scrollable moves list, plus the view tabs
#[derive(Default)]
pub struct InfoPanel {
    move_list: SelectList,
}

pub struct InfoPanelProps<'a> {
    pub record: Option<&'a PokemonRecord>,
    pub view: ViewMode,
    pub selected_move: usize,
    pub is_focused: bool,
}

impl InfoPanel {
    fn move_props<'a>(
        items: &'a [Line<'static>],
        props: &InfoPanelProps<'_>,
    ) -> SelectListProps<'a, Line<'static>, Action> {
        SelectListProps {
            items,
            count: items.len(),
            selected: props.selected_move.min(items.len().saturating_sub(1)),
            is_focused: props.is_focused,
            style: move_list_style(),
            behavior: SelectListBehavior {
                show_scrollbar: true,
                wrap_navigation: false,
            },
            on_select: Action::MoveSelect,
            render_item: &render_move,
        }
    }
}

impl Component<Action> for InfoPanel {
    type Props<'a> = InfoPanelProps<'a>;

    /// Only the moves view takes keys: j/k, arrows, g/G scroll the list.
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if props.view != ViewMode::Moves {
            return Vec::new();
        }
        let items = move_items(props.record);
        let list_props = Self::move_props(&items, &props);
        let actions: Vec<_> = self
            .move_list
            .handle_event(event, list_props)
            .into_iter()
            .collect();
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [body, tabs] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        let title = match props.view {
            ViewMode::Stats => "Info".to_string(),
            ViewMode::Moves => {
                let total = props.record.map_or(0, |record| record.moves.len());
                if total == 0 {
                    "Moves".to_string()
                } else {
                    let current = props.selected_move.min(total - 1) + 1;
                    format!("Moves {current}/{total}")
                }
            }
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
            .border_style(Style::default().fg(TEXT_DIM));
        let inner = block.inner(body);
        frame.render_widget(block, body);

        match props.view {
            ViewMode::Stats => {
                let lines = stat_lines(props.record)
                    .into_iter()
                    .map(|(label, value)| {
                        Line::from(vec![
                            Span::styled(format!("{label}:"), Style::default().fg(TEXT_DIM)),
                            Span::raw(" "),
                            Span::styled(value, Style::default().fg(TEXT_MAIN)),
                        ])
                    })
                    .collect::<Vec<_>>();
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
            }
            ViewMode::Moves => {
                let items = move_items(props.record);
                if !items.is_empty() {
                    let list_props = Self::move_props(&items, &props);
                    self.move_list.render(frame, inner, list_props);
                }
            }
        }

        let tab_bar = Tabs::new(vec!["Info", "Moves"])
            .select(props.view.index())
            .style(Style::default().fg(TEXT_DIM))
            .highlight_style(
                Style::default()
                    .fg(ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        frame.render_widget(tab_bar, tabs);
    }
}

fn move_list_style() -> SelectListStyle {
    SelectListStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(BG_PANEL),
            fg: Some(TEXT_MAIN),
        },
        selection: SelectionStyle {
            style: Some(
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEXT_MAIN)
                    .add_modifier(Modifier::BOLD),
            ),
            marker: None,
            disabled: false,
        },
        ..SelectListStyle::default()
    }
}

fn render_move(item: &Line<'static>) -> Line<'static> {
    item.clone()
}

fn move_items(record: Option<&PokemonRecord>) -> Vec<Line<'static>> {
    move_lines(record).into_iter().map(Line::from).collect()
}

/// Label/value pairs for the stats view, height and weight first.
pub fn stat_lines(record: Option<&PokemonRecord>) -> Vec<(String, String)> {
    let (height, weight) = record
        .map(|record| (record.height, record.weight))
        .unwrap_or_default();
    let mut lines = vec![
        ("height".to_string(), format_height(height)),
        ("weight".to_string(), format_weight(weight)),
    ];
    if let Some(record) = record {
        lines.extend(
            record
                .stats
                .iter()
                .map(|stat| (stat.name.clone(), stat.value.to_string())),
        );
    }
    lines
}

pub fn move_lines(record: Option<&PokemonRecord>) -> Vec<String> {
    record
        .map(|record| record.moves.iter().map(|name| title_case(name)).collect())
        .unwrap_or_default()
}
