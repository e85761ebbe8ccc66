use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap,
};

use crate::app::links::{clip_title, embed_url, thumbnail_url};
use crate::app::recent::{RecentHistory, relative_label};

use super::Focus;
use super::actions::Status;

pub(super) struct ViewState<'a> {
    pub(super) history: &'a RecentHistory,
    pub(super) input: &'a str,
    pub(super) focus: Focus,
    pub(super) status: &'a Status,
    pub(super) loading: bool,
}

const ACCENT: Color = Color::Rgb(110, 170, 255);
const MUTED: Color = Color::Rgb(185, 195, 210);

pub(super) fn draw_tui(frame: &mut Frame, view: &ViewState<'_>, table_state: &mut TableState) {
    let bg = Block::default().style(Style::default().bg(Color::Black));
    frame.render_widget(bg, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let history = view.history;
    let busy_span = if view.loading {
        Span::styled("LOADING", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("IDLE", Style::default().fg(MUTED))
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "YTDECK",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ", Style::default()),
        Span::styled(
            format!("{}/{} recent", history.len(), history.capacity()),
            Style::default().fg(MUTED),
        ),
        Span::styled("   ", Style::default()),
        busy_span,
    ]))
    .alignment(Alignment::Center)
    .block(panel_block("Dashboard", false));
    frame.render_widget(header, chunks[0]);

    // Input is disabled while a play is in flight.
    let input_style = if view.loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Rgb(230, 230, 230))
    };
    let cursor = if view.focus == Focus::Input && !view.loading {
        "_"
    } else {
        ""
    };
    let input = Paragraph::new(format!("{}{cursor}", view.input))
        .style(input_style)
        .block(panel_block("YouTube URL or video id", view.focus == Focus::Input));
    frame.render_widget(input, chunks[1]);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[2]);

    let now = Utc::now();
    let rows: Vec<Row> = history
        .list()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(clip_title(&entry.title, 40)),
                Cell::from(entry.id.to_string()),
                Cell::from(relative_label(entry.played_at, now)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Length(13),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec!["Title", "Id", "Played"])
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
    )
    .block(panel_block("Recent", view.focus == Focus::Recent))
    .row_highlight_style(
        Style::default()
            .bg(ACCENT)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▸ ");
    frame.render_stateful_widget(table, body_chunks[0], table_state);

    let details = match table_state.selected().and_then(|idx| history.list().get(idx)) {
        Some(entry) => format!(
            "Title\n{}\n\nPlayed\n{}\n\nEmbed\n{}\n\nThumbnail\n{}",
            clip_title(&entry.title, 40),
            relative_label(entry.played_at, now),
            embed_url(&entry.id),
            thumbnail_url(&entry.id),
        ),
        None if history.is_empty() => "No recent videos".to_string(),
        None => "Select a video in the list.".to_string(),
    };
    let details = Paragraph::new(details)
        .style(Style::default().fg(Color::Rgb(230, 230, 230)))
        .wrap(Wrap { trim: false })
        .block(panel_block("Selected", false));
    frame.render_widget(details, body_chunks[1]);

    let status_widget = Paragraph::new(view.status.to_string())
        .style(status_style(view.status))
        .block(panel_block("Status", false));
    frame.render_widget(status_widget, chunks[3]);

    let hints = Paragraph::new(Line::from(Span::styled(
        "Enter play  Tab switch focus  ↑/↓ move  q quit (list)  Esc quit",
        Style::default().fg(MUTED),
    )))
    .alignment(Alignment::Center)
    .block(panel_block("Controls", false));
    frame.render_widget(hints, chunks[4]);
}

fn panel_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Rgb(125, 135, 150))
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .title(title)
}

fn status_style(status: &Status) -> Style {
    match status {
        Status::Error(_) => Style::default()
            .fg(Color::Rgb(255, 145, 120))
            .add_modifier(Modifier::BOLD),
        Status::Info(_) => Style::default().fg(Color::Rgb(205, 165, 255)),
    }
}
