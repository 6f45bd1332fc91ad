use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use rallyview::action::player_title;
use rallyview::history::OVERALL_CATEGORY;

use crate::ui::charting::{format_delta, percent_bar};
use crate::App;

const BAR_WIDTH: u16 = 20;

pub struct CategoryRowData {
    pub name: String,
    pub total: usize,
    pub win_count: usize,
    pub rate: u8,
    pub delta: Option<f64>,
}

/// Pure presenter for a single category rate row
pub fn present_row(data: &CategoryRowData) -> Row<'static> {
    let rate_color = if data.rate >= 70 {
        Color::Green
    } else if data.rate >= 40 {
        Color::Yellow
    } else {
        Color::Red
    };

    let delta_display = format_delta(data.delta);
    let delta_style = match data.delta {
        Some(d) if d >= 0.5 => Style::default().fg(Color::Green),
        Some(d) if d <= -0.5 => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Gray),
    };

    Row::new(vec![
        Cell::from(data.name.clone()),
        Cell::from(data.total.to_string()),
        Cell::from(data.win_count.to_string()),
        Cell::from(format!("{}%", data.rate)).style(Style::default().fg(rate_color)),
        Cell::from(delta_display).style(delta_style),
        Cell::from(percent_bar(data.rate, BAR_WIDTH)).style(Style::default().fg(rate_color)),
    ])
}

/// Success-rate table for the active player: overall first, then every
/// category present in the timeline.
pub fn render_stats(app: &App, f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(0),    // table
            Constraint::Length(3), // instructions
        ])
        .split(area);

    let Some(report) = app.active_report() else {
        render_no_data(f, chunks[1]);
        return;
    };

    let title = Paragraph::new(format!("{} — success rate by action", player_title(report.player)))
        .block(Block::default().borders(Borders::ALL).title("Stats"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    if report.tally.total == 0 {
        render_no_data(f, chunks[1]);
    } else {
        let mut rows_data = vec![CategoryRowData {
            name: OVERALL_CATEGORY.to_string(),
            total: report.tally.total,
            win_count: report.tally.win,
            rate: report.tally.win_rate(),
            delta: app.delta_for(OVERALL_CATEGORY),
        }];
        rows_data.extend(report.rates.iter().map(|(category, rate)| CategoryRowData {
            name: category.name().to_string(),
            total: rate.total,
            win_count: rate.win_count,
            rate: rate.rate,
            delta: app.delta_for(category.name()),
        }));

        let header = Row::new(vec![
            Cell::from("Action"),
            Cell::from("Total"),
            Cell::from("Wins"),
            Cell::from("Rate"),
            Cell::from("vs. history"),
            Cell::from(""),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = rows_data.iter().map(present_row).collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Length(22),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Length(BAR_WIDTH + 2),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Success rate"),
        );

        f.render_widget(table, chunks[1]);
    }

    let instructions =
        Paragraph::new("↑=above historical mean ↓=below | (p)layer | Tab/1-4 views | (q)uit")
            .block(Block::default().borders(Borders::ALL))
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[2]);
}

fn render_no_data(f: &mut Frame, area: ratatui::layout::Rect) {
    let no_data = Paragraph::new("No actions recorded for this player.")
        .block(Block::default().borders(Borders::ALL).title("No Data"))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(no_data, area);
}
