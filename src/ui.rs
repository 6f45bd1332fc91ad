pub mod causes_view;
pub mod charting;
pub mod screen;
pub mod stats_view;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use rallyview::action::player_title;
use rallyview::outcome::Outcome;
use rallyview::util::format_time;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 2;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(3), // title
                    Constraint::Min(0),    // event list
                    Constraint::Length(3), // seek banner
                    Constraint::Length(3), // instructions
                ]
                .as_ref(),
            )
            .split(area);

        let title = match self.active_report() {
            Some(report) => {
                let tally = report.tally;
                format!(
                    "{} — {} · {} actions · {}✓ {}✗ {}○ · {}%",
                    player_title(report.player),
                    self.session.source,
                    tally.total,
                    tally.win,
                    tally.loss,
                    tally.unjudged,
                    tally.win_rate(),
                )
            }
            None => "no player data".to_string(),
        };

        Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL).title("Rally actions"))
            .style(Style::default().fg(Color::Cyan).patch(bold_style))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let actions = self.visible_actions();
        if actions.is_empty() {
            Paragraph::new("No actions to show for this player.")
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .render(chunks[1], buf);
        } else {
            let table_height = chunks[1].height.saturating_sub(2) as usize;
            // keep the selection inside the visible window without any
            // stored scroll state
            let window_start = (self.selected + 1).saturating_sub(table_height.max(1));

            let label_width = actions
                .iter()
                .map(|entry| entry.action.label.width())
                .max()
                .unwrap_or(0)
                .max(8) as u16;

            let rows: Vec<Row> = actions
                .iter()
                .enumerate()
                .skip(window_start)
                .take(table_height.max(1))
                .map(|(idx, entry)| {
                    let outcome_style = match entry.outcome {
                        Outcome::Win => Style::default().fg(Color::Green),
                        Outcome::Loss => Style::default().fg(Color::Red),
                        Outcome::Unjudged => Style::default().fg(Color::Gray),
                    };

                    let time_range = format!(
                        "{} - {}",
                        format_time(entry.action.start),
                        format_time(entry.action.end)
                    );

                    let row = Row::new(vec![
                        Cell::from(entry.outcome.icon()).style(outcome_style),
                        Cell::from(entry.action.label.clone()),
                        Cell::from(time_range).style(dim_style),
                    ]);

                    if idx == self.selected {
                        row.style(Style::default().bg(Color::DarkGray))
                    } else {
                        row
                    }
                })
                .collect();

            let position = format!("{}/{}", self.selected + 1, actions.len());
            Table::new(
                rows,
                &[
                    Constraint::Length(3),
                    Constraint::Length(label_width),
                    Constraint::Length(14),
                ],
            )
            .block(Block::default().borders(Borders::ALL).title(position))
            .render(chunks[1], buf);
        }

        let seek_line = match self.seek {
            Some(secs) => {
                let frame = self.seek_frame().unwrap_or(0);
                Line::from(vec![
                    Span::styled("▶ seek ", Style::default().fg(Color::Yellow).patch(bold_style)),
                    Span::styled(
                        format!("{} (frame {})", format_time(secs), frame),
                        bold_style,
                    ),
                ])
            }
            None => Line::from(Span::styled(
                "Enter jumps the video to the selected action",
                dim_style,
            )),
        };
        Paragraph::new(seek_line)
            .block(Block::default().borders(Borders::ALL).title("Seek"))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        Paragraph::new(
            "↑/↓ PgUp/PgDn Home select | Enter seek | (p)layer (u)njudged | Tab/1-4 views | (q)uit",
        )
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[3], buf);
    }
}
