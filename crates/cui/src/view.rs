use crate::app::App;
use crate::art::ArtWidget;
use cardtable_core::{Card, DeckIndicator, Face};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const STATUS_EVENT_LINES: usize = 6;

pub fn draw(frame: &mut Frame, app: &App) {
    let table_area = app.viewport.area;
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        table_area,
    );
    draw_deck(frame, app);
    for card in app.table.hand().iter() {
        draw_card(frame, app, card);
    }

    let screen = frame.area();
    let status_area = app.viewport.below(screen.width, screen.height);
    if status_area.height > 0 {
        draw_status(frame, status_area, app);
    }
    if app.show_help {
        draw_help_popup(frame);
    }
}

fn deck_color(indicator: DeckIndicator) -> Color {
    match indicator {
        DeckIndicator::Full => Color::Blue,
        DeckIndicator::Empty => Color::Black,
    }
}

fn draw_deck(frame: &mut Frame, app: &App) {
    let deck = app.table.deck();
    let Some(area) = app.viewport.to_cells(deck.rect()) else {
        return;
    };
    let lines: Vec<Line<'_>> = app.deck_lines().into_iter().map(Line::from).collect();
    let style = Style::default()
        .bg(deck_color(deck.indicator()))
        .fg(Color::White);
    frame.render_widget(
        Paragraph::new(lines).style(style).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_card(frame: &mut Frame, app: &App, card: &Card) {
    let Some(area) = card.rect().and_then(|rect| app.viewport.to_cells(rect)) else {
        return;
    };
    match card.face() {
        Face::Front => match card.loaded_front() {
            Some(image) => frame.render_widget(ArtWidget::new(&image.bytes), area),
            None => frame.render_widget(
                Paragraph::new("...")
                    .alignment(Alignment::Center)
                    .style(Style::default().bg(Color::DarkGray)),
                area,
            ),
        },
        Face::Back => {
            let lines = vec![
                Line::from(card.name().to_string()),
                Line::from(format!("tier {}", card.tier())),
            ];
            let style = Style::default().bg(card.back_color()).fg(Color::White);
            frame.render_widget(
                Paragraph::new(lines).style(style).wrap(Wrap { trim: true }),
                area,
            );
        }
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let deck = app.table.deck();
    let mut lines = vec![
        Line::from(format!(
            "{} | {} left | hand {} | seed {} | cache {}",
            deck.pack_name(),
            deck.remaining(),
            app.table.hand().len(),
            app.seed,
            app.cache_dir.display()
        )),
        Line::from(app.status_line.as_str().bold()),
    ];
    for line in app.recent_events(STATUS_EVENT_LINES) {
        lines.push(Line::from(format!("  {line}")));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Table  (? help, q quit)");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("click the deck      deal one card"),
        Line::from("click a card        flip it"),
        Line::from("? / h               toggle this help"),
        Line::from("esc                 close help, then quit"),
        Line::from("q / ctrl-c          quit"),
    ];
    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
