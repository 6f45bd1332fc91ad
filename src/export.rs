//! Result export: the per-analysis summary log and full CSV dumps.

use std::fs::OpenOptions;
use std::path::Path;

use chrono::Local;
use directories::ProjectDirs;

use crate::action::player_title;
use crate::category::Category;
use crate::session::MatchSession;

/// Append one summary row per player to `log.csv` in the config dir,
/// emitting the header when the file is first created.
pub fn append_summary_log(session: &MatchSession) -> csv::Result<()> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "rallyview") {
        let config_dir = proj_dirs.config_dir();
        let log_path = config_dir.join("log.csv");

        std::fs::create_dir_all(config_dir)?;

        let needs_header = !log_path.exists();

        let file = OpenOptions::new().append(true).create(true).open(log_path)?;
        let mut writer = csv::Writer::from_writer(file);

        if needs_header {
            writer.write_record([
                "date", "source", "player", "total", "win", "loss", "unjudged", "win_rate",
            ])?;
        }

        let date = Local::now().format("%c").to_string();
        for report in &session.reports {
            let title = player_title(report.player);
            let total = report.tally.total.to_string();
            let win = report.tally.win.to_string();
            let loss = report.tally.loss.to_string();
            let unjudged = report.tally.unjudged.to_string();
            let rate = report.tally.win_rate().to_string();

            writer.write_record([
                date.as_str(),
                session.source.as_str(),
                title.as_str(),
                total.as_str(),
                win.as_str(),
                loss.as_str(),
                unjudged.as_str(),
                rate.as_str(),
            ])?;
        }

        writer.flush()?;
    }

    Ok(())
}

/// Write every classified action of the session to a CSV file.
pub fn export_actions(session: &MatchSession, path: &Path) -> csv::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["player", "label", "category", "start", "end", "outcome"])?;

    for report in &session.reports {
        let title = player_title(report.player);
        for entry in &report.classified {
            let category = Category::of(&entry.action.label)
                .map(|c| c.name())
                .unwrap_or("");
            let start = format!("{:.2}", entry.action.start);
            let end = format!("{:.2}", entry.action.end);

            writer.write_record([
                title.as_str(),
                entry.action.label.as_str(),
                category,
                start.as_str(),
                end.as_str(),
                entry.outcome.name(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, MatchData, PlayerTimeline};
    use tempfile::tempdir;

    fn sample_session() -> MatchSession {
        let data = MatchData {
            fps: 1.0,
            players: vec![
                PlayerTimeline {
                    actions: vec![
                        Action::new("スマッシュ", 0.0, 2.0),
                        Action::new("サーブ", 3.0, 4.0),
                    ],
                },
                PlayerTimeline {
                    actions: vec![Action::new("クリアー(誤り)", 5.0, 6.0)],
                },
            ],
        };
        MatchSession::analyze("match.json", data)
    }

    #[test]
    fn test_export_actions_row_per_action() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("actions.csv");

        export_actions(&sample_session(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        // header plus one row per classified action
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "player,label,category,start,end,outcome");
        assert!(lines[1].starts_with("Near player,スマッシュ,スマッシュ,0.00,2.00,win"));
        assert!(lines[3].contains("Far player"));
        assert!(lines[3].ends_with("loss"));
    }

    #[test]
    fn test_export_actions_unresolvable_category_left_blank() {
        let data = MatchData {
            fps: 1.0,
            players: vec![PlayerTimeline {
                actions: vec![Action::new("フットワーク", 0.0, 1.0)],
            }],
        };
        let session = MatchSession::analyze("match.json", data);

        let dir = tempdir().unwrap();
        let path = dir.path().join("actions.csv");
        export_actions(&session, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.lines().nth(1).unwrap().contains("フットワーク,,"));
    }
}
