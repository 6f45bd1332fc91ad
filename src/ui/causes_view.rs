use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use rallyview::action::player_title;
use rallyview::aggregate::CauseShare;

use crate::ui::charting::percent_bar;
use crate::App;

const BAR_WIDTH: u16 = 24;

/// Distribution table shared by the win-cause and loss-cause screens.
pub fn render_causes(app: &App, f: &mut Frame, title: &str, shares: &[CauseShare]) {
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

    let player = app
        .active_report()
        .map(|r| player_title(r.player))
        .unwrap_or_else(|| "no player data".to_string());
    let total: usize = shares.iter().map(|s| s.count).sum();

    let heading = Paragraph::new(format!("{} — {} · total {}", player, title, total))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    if shares.is_empty() {
        let no_data = Paragraph::new("Nothing attributable in this timeline.")
            .block(Block::default().borders(Borders::ALL).title("No Data"))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(no_data, chunks[1]);
    } else {
        let header = Row::new(vec![
            Cell::from("Cause"),
            Cell::from("Count"),
            Cell::from("Share"),
            Cell::from(""),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = shares
            .iter()
            .map(|share| {
                Row::new(vec![
                    Cell::from(share.category.clone()),
                    Cell::from(share.count.to_string()),
                    Cell::from(format!("{}%", share.percentage)),
                    Cell::from(percent_bar(share.percentage, BAR_WIDTH))
                        .style(Style::default().fg(Color::Magenta)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            &[
                Constraint::Length(34),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(BAR_WIDTH + 2),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Distribution"));

        f.render_widget(table, chunks[1]);
    }

    let instructions = Paragraph::new("shares under 5% are folded into その他 | (p)layer | Tab/1-4 views | (q)uit")
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[2]);
}
