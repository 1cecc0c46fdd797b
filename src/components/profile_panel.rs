use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{Component, ACCENT_GOLD, ACCENT_TEAL, BG_PANEL, TEXT_DIM, TEXT_MAIN};
use crate::action::Action;
use crate::format::{capitalize, type_badge_color};
use crate::state::{AppState, LoadStatus};

pub const ERROR_ICON: &str = "\u{26a0}";
pub const NAME_PLACEHOLDER: &str = "\u{2014}";

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// What the artwork box shows, derived from load status and cached record
#[derive(Debug, PartialEq)]
pub enum ArtworkView<'a> {
    Loading,
    Error(&'a str),
    Image(&'a str),
    Empty,
}

impl<'a> ArtworkView<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        match &state.status {
            LoadStatus::Loading => ArtworkView::Loading,
            LoadStatus::Error(msg) => ArtworkView::Error(msg),
            LoadStatus::Idle => state
                .record
                .as_ref()
                .and_then(|record| record.artwork_url.as_deref())
                .map(ArtworkView::Image)
                .unwrap_or(ArtworkView::Empty),
        }
    }
}

/// Left column: artwork, name, type badges, prev/next hint
pub struct ProfilePanel;

pub struct ProfilePanelProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for ProfilePanel {
    type Props<'a> = ProfilePanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

        render_artwork(frame, chunks[0], props.state);
        render_name(frame, chunks[1], props.state);
        render_types(frame, chunks[2], props.state);
        render_arrows(frame, chunks[3], props.state);
    }
}

fn render_artwork(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("ARTWORK")
        .style(Style::default().bg(BG_PANEL).fg(TEXT_MAIN))
        .border_style(Style::default().fg(TEXT_DIM));

    let content = match ArtworkView::from_state(state) {
        ArtworkView::Loading => {
            let spinner = SPINNER[state.tick_count as usize % SPINNER.len()];
            Text::from(Line::from(Span::styled(
                format!("{spinner} Loading\u{2026}"),
                Style::default().fg(ACCENT_GOLD),
            )))
        }
        ArtworkView::Error(msg) => Text::from(Line::from(Span::styled(
            format!("{ERROR_ICON} {msg}"),
            Style::default().fg(Color::LightRed),
        ))),
        ArtworkView::Image(url) => Text::from(vec![
            Line::from(Span::styled("[artwork]", Style::default().fg(ACCENT_TEAL))),
            Line::from(Span::styled(url.to_string(), Style::default().fg(TEXT_DIM))),
        ]),
        ArtworkView::Empty => Text::default(),
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);
    // Center vertically, but leave every row below the offset to the text so
    // wrapped lines are never cut.
    let top = inner.height.saturating_sub(wrapped_height(&content, inner.width)) / 2;
    let [_, body] = Layout::vertical([Constraint::Length(top), Constraint::Fill(1)]).areas(inner);
    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        body,
    );
}

/// Rows `text` needs once wrapped to `width` columns.
pub fn wrapped_height(text: &Text, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub fn name_label(state: &AppState) -> String {
    match state.record_name() {
        Some(name) if !name.is_empty() => capitalize(name),
        _ => NAME_PLACEHOLDER.to_string(),
    }
}

fn render_name(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(BG_PANEL))
        .border_style(Style::default().fg(ACCENT_TEAL));
    let name = Paragraph::new(Line::from(Span::styled(
        name_label(state),
        Style::default()
            .fg(TEXT_MAIN)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(name, area);
}

pub fn type_badges(types: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(types.len() * 2);
    for type_name in types {
        spans.push(Span::styled(
            format!(" {type_name} "),
            Style::default()
                .bg(type_badge_color(type_name))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_types(frame: &mut Frame, area: Rect, state: &AppState) {
    let types = state
        .record
        .as_ref()
        .map(|record| record.types.as_slice())
        .unwrap_or_default();
    let text = Text::from(vec![
        Line::from(Span::styled(
            "Types:",
            Style::default().fg(TEXT_MAIN).add_modifier(Modifier::BOLD),
        )),
        type_badges(types),
    ]);
    frame.render_widget(Paragraph::new(text), area);
}

fn render_arrows(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled("\u{2039} h", Style::default().fg(ACCENT_TEAL)),
        Span::raw("   "),
        Span::styled(
            format!("#{:03}", state.dex_id),
            Style::default().fg(ACCENT_GOLD),
        ),
        Span::raw("   "),
        Span::styled("l \u{203a}", Style::default().fg(ACCENT_TEAL)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PokemonRecord;

    fn record(artwork_url: Option<&str>) -> PokemonRecord {
        PokemonRecord {
            name: "ditto".into(),
            artwork_url: artwork_url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_artwork_view_follows_status() {
        let mut state = AppState {
            record: Some(record(Some("https://img/132.png"))),
            ..Default::default()
        };
        assert_eq!(
            ArtworkView::from_state(&state),
            ArtworkView::Image("https://img/132.png")
        );

        state.status = LoadStatus::Loading;
        assert_eq!(ArtworkView::from_state(&state), ArtworkView::Loading);

        state.status = LoadStatus::Error("offline".into());
        assert_eq!(ArtworkView::from_state(&state), ArtworkView::Error("offline"));
    }

    #[test]
    fn test_artwork_view_without_url_is_empty() {
        let state = AppState {
            record: Some(record(None)),
            ..Default::default()
        };
        assert_eq!(ArtworkView::from_state(&state), ArtworkView::Empty);
        assert_eq!(ArtworkView::from_state(&AppState::default()), ArtworkView::Empty);
    }

    #[test]
    fn test_wrapped_height_counts_wrapped_rows() {
        let url = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/132.png";
        let text = Text::from(vec![Line::from("[artwork]"), Line::from(url)]);

        assert_eq!(wrapped_height(&text, 30), 1 + 4);
        assert_eq!(wrapped_height(&text, 200), 2);
        assert_eq!(wrapped_height(&Text::default(), 30), 0);
    }

    #[test]
    fn test_error_message_wraps_inside_artwork_box() {
        let mut render = tui_dispatch::testing::RenderHarness::new(30, 12);
        let mut panel = ProfilePanel;
        let state = AppState {
            status: LoadStatus::Error("No Pokémon found for id=100000".into()),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            panel.render(frame, frame.area(), ProfilePanelProps { state: &state });
        });

        assert!(output.contains("No Pokémon found"), "{output}");
        assert!(output.contains("id=100000"), "{output}");
    }

    #[test]
    fn test_name_label() {
        assert_eq!(name_label(&AppState::default()), NAME_PLACEHOLDER);

        let state = AppState {
            record: Some(record(None)),
            ..Default::default()
        };
        assert_eq!(name_label(&state), "Ditto");
    }

    #[test]
    fn test_type_badges_use_color_table() {
        let line = type_badges(&["fire".to_string(), "???".to_string()]);
        let badges: Vec<_> = line
            .spans
            .iter()
            .filter(|span| !span.content.trim().is_empty())
            .collect();

        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].content, " fire ");
        assert_eq!(badges[0].style.bg, Some(Color::Rgb(0xEE, 0x81, 0x30)));
        assert_eq!(badges[1].style.bg, Some(Color::Rgb(0xbb, 0xbb, 0xbb)));
    }
}
