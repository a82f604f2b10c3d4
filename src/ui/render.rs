use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::models::PresentationRecord;

use super::app::App;
use super::router::Route;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header_area, app);
    match app.route {
        Route::Overview => draw_overview(frame, body_area, app),
        _ => draw_records(frame, body_area, app),
    }
    draw_footer(frame, footer_area, app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled("hwlens", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(app.route.title(), Style::default().fg(Color::Cyan)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_overview(frame: &mut Frame, area: Rect, app: &App) {
    let total = app.camera_count + app.sensor_count;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            total.to_string(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            if total == 1 { "SENSOR FOUND" } else { "SENSORS FOUND" },
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{} cameras", app.camera_count)),
        Line::from(format!("{} other sensors", app.sensor_count)),
        Line::from(""),
        Line::from(Span::styled(
            "c cameras · s sensors",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(paragraph, area);
}

fn draw_records(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.records.is_empty() {
        let placeholder = Paragraph::new("Nothing to show")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, area);
        return;
    }
    let items: Vec<ListItem> = app.records.iter().map(record_item).collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 48)))
        .highlight_symbol("");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn record_item(record: &PresentationRecord) -> ListItem<'_> {
    let mut lines = Vec::with_capacity(record.data_lines.len() + 2);
    let mut headline = Vec::new();
    if let Some(icon) = record.icon {
        headline.push(Span::styled(icon, Style::default().fg(Color::Cyan)));
        headline.push(Span::raw(" "));
    }
    headline.push(Span::styled(
        record.headline.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(headline));
    for data_line in &record.data_lines {
        lines.push(Line::from(Span::styled(
            format!("  {data_line}"),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status_error {
        Some(error) => Line::from(Span::styled(
            format!("error: {error}"),
            Style::default().fg(Color::Red),
        )),
        None => {
            let hints = match app.route {
                Route::Overview => "c cameras · s sensors · q quit",
                Route::SensorDetail => {
                    "↑↓ move · space pause/resume · esc back · q quit"
                }
                _ => "↑↓ move · enter open · esc back · q quit",
            };
            Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
        }
    };
    frame.render_widget(Paragraph::new(text), area);
}
