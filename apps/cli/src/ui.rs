use motd::Source;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, BUTTONS};

pub fn draw(frame: &mut Frame, app: &App) {
    let [label_area, buttons_area, status_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_label(frame, app, label_area);
    draw_buttons(frame, app, buttons_area);
    draw_status_bar(frame, app, status_area);
}

fn draw_label(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![Span::styled(
        " motd ",
        Style::new().add_modifier(Modifier::BOLD),
    )]);

    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Color::DarkGray))
        .title(title)
        .padding(Padding::new(2, 2, 1, 1));

    let paragraph = Paragraph::new(app.motd.trim_end().to_string())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn draw_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for ((key, source), button_area) in BUTTONS.iter().zip(areas.iter()) {
        let style = if app.last_pressed == Some(*source) {
            Style::new().fg(Color::Black).bg(Color::Blue)
        } else {
            Style::new().fg(Color::Blue)
        };

        let block = Block::new()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::Blue));

        let label = Paragraph::new(Line::from(vec![
            Span::styled(format!("[{key}] "), Style::new().fg(Color::DarkGray)),
            Span::styled(source.to_string(), style),
        ]))
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(label, *button_area);
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let source_url = app
        .last_pressed
        .map(|source| match source {
            Source::Json => app.endpoints.json.as_str(),
            Source::Text => app.endpoints.text.as_str(),
            Source::Random => app.endpoints.splash.as_str(),
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" [q]", Style::new().fg(Color::DarkGray)),
        Span::raw(" quit  "),
        Span::styled(
            format!("{} updates", app.updates),
            Style::new().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(source_url, Style::new().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
