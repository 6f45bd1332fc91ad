mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    collections::BTreeMap,
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use rallyview::{
    action::player_title,
    config::{Config, ConfigStore, FileConfigStore},
    export,
    history::{HistoryDb, OVERALL_CATEGORY},
    ingest,
    outcome::Outcome,
    runtime::{CrosstermEventSource, FixedTicker, Runner, ViewerEvent},
    session::{ClassifiedAction, MatchSession, PlayerReport},
};

use crate::ui::screen::current_screen;

const TICK_RATE_MS: u64 = 100;

/// badminton annotation viewer with rally outcome classification
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal viewer for badminton match annotations: loads a companion JSON file of timestamped actions, classifies every action as a rally win, loss, or unjudged, and shows the event list, per-action success rates, and win/loss cause breakdowns."
)]
pub struct Cli {
    /// annotation JSON file (primary `gts` or legacy `action_results` format)
    file: PathBuf,

    /// override the frame rate recorded in the annotation file
    #[clap(long)]
    fps: Option<f64>,

    /// which player timelines to show
    #[clap(short = 'p', long, value_enum)]
    player: Option<PlayerFilter>,

    /// print per-player summaries to stdout and exit (no TUI)
    #[clap(short = 's', long)]
    summary: bool,

    /// write every classified action to a CSV file
    #[clap(long)]
    export: Option<PathBuf>,

    /// skip recording this analysis to the history database and log
    #[clap(long)]
    no_history: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum PlayerFilter {
    Near,
    Far,
    All,
}

impl PlayerFilter {
    fn from_config(name: &str) -> Option<Self> {
        match name {
            "near" => Some(PlayerFilter::Near),
            "far" => Some(PlayerFilter::Far),
            "all" => Some(PlayerFilter::All),
            _ => None,
        }
    }

    fn indices(self, player_count: usize) -> Vec<usize> {
        match self {
            PlayerFilter::Near => {
                if player_count > 0 {
                    vec![0]
                } else {
                    vec![]
                }
            }
            PlayerFilter::Far => {
                if player_count > 1 {
                    vec![1]
                } else {
                    vec![]
                }
            }
            PlayerFilter::All => (0..player_count).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    EventList,
    Stats,
    WinCauses,
    LossCauses,
}

impl AppState {
    const ORDER: [AppState; 4] = [
        AppState::EventList,
        AppState::Stats,
        AppState::WinCauses,
        AppState::LossCauses,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> AppState {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> AppState {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug)]
pub struct App {
    pub session: MatchSession,
    pub state: AppState,
    /// Player indices admitted by the filter; never empty.
    pub players: Vec<usize>,
    /// Position in `players` of the player currently shown.
    pub active: usize,
    /// Selection in the (filtered) event list.
    pub selected: usize,
    pub show_unjudged: bool,
    /// Timestamp of the last "seeked" action, in seconds.
    pub seek: Option<f64>,
    /// Rate movement vs. the history database, keyed (player, category).
    pub deltas: BTreeMap<(usize, String), f64>,
}

impl App {
    pub fn new(
        cli: &Cli,
        config: &Config,
        session: MatchSession,
        deltas: BTreeMap<(usize, String), f64>,
    ) -> Self {
        let filter = cli
            .player
            .or_else(|| PlayerFilter::from_config(&config.player))
            .unwrap_or(PlayerFilter::All);
        let mut players = filter.indices(session.data.players.len());
        if players.is_empty() {
            // the filter found nothing (e.g. --player far on a single-player
            // file); fall back to the near player slot
            players = vec![0];
        }

        Self {
            session,
            state: AppState::EventList,
            players,
            active: 0,
            selected: 0,
            show_unjudged: config.show_unjudged,
            seek: None,
            deltas,
        }
    }

    pub fn active_player(&self) -> usize {
        self.players[self.active]
    }

    pub fn active_report(&self) -> Option<&PlayerReport> {
        self.session.report(self.active_player())
    }

    /// Event-list rows after the unjudged filter, in file order.
    pub fn visible_actions(&self) -> Vec<&ClassifiedAction> {
        self.active_report()
            .map(|report| {
                report
                    .classified
                    .iter()
                    .filter(|c| self.show_unjudged || c.outcome != Outcome::Unjudged)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected_action(&self) -> Option<&ClassifiedAction> {
        self.visible_actions().get(self.selected).copied()
    }

    pub fn delta_for(&self, category: &str) -> Option<f64> {
        self.deltas
            .get(&(self.active_player(), category.to_string()))
            .copied()
    }

    pub fn next_player(&mut self) {
        self.active = (self.active + 1) % self.players.len();
        self.selected = 0;
        self.seek = None;
    }

    pub fn toggle_unjudged(&mut self) {
        self.show_unjudged = !self.show_unjudged;
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let count = self.visible_actions().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_page_down(&mut self) {
        let count = self.visible_actions().len();
        if count > 0 {
            self.selected = (self.selected + 10).min(count - 1);
        }
    }

    pub fn select_page_up(&mut self) {
        self.selected = self.selected.saturating_sub(10);
    }

    pub fn select_home(&mut self) {
        self.selected = 0;
    }

    /// Surface the selected action's timestamp for the external player.
    pub fn seek_selected(&mut self) {
        self.seek = self.selected_action().map(|c| c.action.start);
    }

    pub fn seek_frame(&self) -> Option<u64> {
        self.seek
            .map(|secs| (secs * self.session.data.fps).round() as u64)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = FileConfigStore::new().load();

    let mut data = ingest::load_match(&cli.file)?;
    if let Some(fps) = cli.fps.or(config.fps_override) {
        data.fps = fps;
    }

    let session = MatchSession::analyze(cli.file.display().to_string(), data);

    if let Some(path) = &cli.export {
        export::export_actions(&session, path)?;
    }

    // Deltas compare this match against history recorded before it, so they
    // are collected before the new rows go in.
    let mut deltas = BTreeMap::new();
    if !cli.no_history && config.record_history {
        if let Ok(mut db) = HistoryDb::new() {
            deltas = collect_deltas(&db, &session);
            for report in &session.reports {
                let _ = db.record_report(&session.source, report);
            }
        }
        let _ = export::append_summary_log(&session);
    }

    if cli.summary {
        let filter = cli
            .player
            .or_else(|| PlayerFilter::from_config(&config.player))
            .unwrap_or(PlayerFilter::All);
        print_summary(&session, filter);
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(
            ErrorKind::Io,
            "stdin must be a tty (use --summary for non-interactive runs)",
        )
        .exit();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&cli, &config, session, deltas);
    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res?;

    // hand the last seek position to whatever drives the video
    if let Some(secs) = app.seek {
        println!("{:.2}", secs);
    }

    Ok(())
}

fn collect_deltas(db: &HistoryDb, session: &MatchSession) -> BTreeMap<(usize, String), f64> {
    let mut deltas = BTreeMap::new();
    for report in &session.reports {
        let overall = report.tally.win_rate() as f64;
        if let Ok(Some(delta)) = db.rate_delta(report.player, OVERALL_CATEGORY, overall) {
            deltas.insert((report.player, OVERALL_CATEGORY.to_string()), delta);
        }
        for (category, rate) in &report.rates {
            if let Ok(Some(delta)) = db.rate_delta(report.player, category.name(), rate.rate as f64)
            {
                deltas.insert((report.player, category.name().to_string()), delta);
            }
        }
    }
    deltas
}

fn print_summary(session: &MatchSession, filter: PlayerFilter) {
    for idx in filter.indices(session.data.players.len()) {
        let Some(report) = session.report(idx) else {
            continue;
        };
        let tally = report.tally;

        println!("{} — {}", player_title(idx), session.source);
        println!(
            "  actions: {}  win: {}  loss: {}  unjudged: {}  win rate: {}%",
            tally.total,
            tally.win,
            tally.loss,
            tally.unjudged,
            tally.win_rate()
        );

        for (category, rate) in &report.rates {
            println!(
                "  {}: {} actions, {} wins, {}%",
                category.name(),
                rate.total,
                rate.win_count,
                rate.rate
            );
        }

        if !report.win_causes.is_empty() {
            println!("  points won by:");
            for share in &report.win_causes {
                println!("    {} ×{} ({}%)", share.category, share.count, share.percentage);
            }
        }
        if !report.loss_causes.is_empty() {
            println!("  points lost by:");
            for share in &report.loss_causes {
                println!("    {} ×{} ({}%)", share.category, share.count, share.percentage);
            }
        }
    }
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            ViewerEvent::Tick => {}
            ViewerEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            ViewerEvent::Key(key) => {
                if handle_key(app, key) {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

/// Returns true when the app should quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.state = app.state.next(),
        KeyCode::BackTab => app.state = app.state.prev(),
        KeyCode::Char('1') => app.state = AppState::EventList,
        KeyCode::Char('2') => app.state = AppState::Stats,
        KeyCode::Char('3') => app.state = AppState::WinCauses,
        KeyCode::Char('4') => app.state = AppState::LossCauses,
        KeyCode::Char('p') => app.next_player(),
        _ => {
            if app.state == AppState::EventList {
                match key.code {
                    KeyCode::Up => app.select_prev(),
                    KeyCode::Down => app.select_next(),
                    KeyCode::PageUp => app.select_page_up(),
                    KeyCode::PageDown => app.select_page_down(),
                    KeyCode::Home => app.select_home(),
                    KeyCode::Enter => app.seek_selected(),
                    KeyCode::Char('u') => app.toggle_unjudged(),
                    _ => {}
                }
            }
        }
    }
    false
}

fn ui(app: &mut App, f: &mut Frame) {
    current_screen(&app.state).render(app, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rallyview::action::{Action, MatchData, PlayerTimeline};

    fn sample_data() -> MatchData {
        MatchData {
            fps: 30.0,
            players: vec![
                PlayerTimeline {
                    actions: vec![
                        Action::new("サーブ", 0.0, 1.0),
                        Action::new("ロブ", 2.0, 3.0),
                        Action::new("スマッシュ", 10.0, 11.0),
                        Action::new("サーブ", 20.0, 21.0),
                    ],
                },
                PlayerTimeline {
                    actions: vec![Action::new("クリアー(誤り)", 5.0, 6.0)],
                },
            ],
        }
    }

    fn sample_app(args: &[&str]) -> App {
        let mut argv = vec!["rallyview", "match.json", "--no-history"];
        argv.extend(args);
        let cli = Cli::parse_from(argv);
        let session = MatchSession::analyze("match.json", sample_data());
        App::new(&cli, &Config::default(), session, BTreeMap::new())
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["rallyview", "match.json"]);

        assert_eq!(cli.file, PathBuf::from("match.json"));
        assert_eq!(cli.fps, None);
        assert_eq!(cli.player, None);
        assert!(!cli.summary);
        assert_eq!(cli.export, None);
        assert!(!cli.no_history);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "rallyview",
            "m.json",
            "--fps",
            "25",
            "-p",
            "far",
            "--summary",
            "--export",
            "out.csv",
            "--no-history",
        ]);

        assert_eq!(cli.fps, Some(25.0));
        assert_eq!(cli.player, Some(PlayerFilter::Far));
        assert!(cli.summary);
        assert_eq!(cli.export, Some(PathBuf::from("out.csv")));
        assert!(cli.no_history);
    }

    #[test]
    fn test_player_filter_from_config() {
        assert_eq!(PlayerFilter::from_config("near"), Some(PlayerFilter::Near));
        assert_eq!(PlayerFilter::from_config("far"), Some(PlayerFilter::Far));
        assert_eq!(PlayerFilter::from_config("all"), Some(PlayerFilter::All));
        assert_eq!(PlayerFilter::from_config("bogus"), None);
    }

    #[test]
    fn test_player_filter_display() {
        assert_eq!(PlayerFilter::Near.to_string(), "Near");
        assert_eq!(PlayerFilter::Far.to_string(), "Far");
        assert_eq!(PlayerFilter::All.to_string(), "All");
    }

    #[test]
    fn test_player_filter_indices() {
        assert_eq!(PlayerFilter::All.indices(2), vec![0, 1]);
        assert_eq!(PlayerFilter::Near.indices(2), vec![0]);
        assert_eq!(PlayerFilter::Far.indices(2), vec![1]);
        assert_eq!(PlayerFilter::Far.indices(1), Vec::<usize>::new());
        assert_eq!(PlayerFilter::All.indices(0), Vec::<usize>::new());
    }

    #[test]
    fn test_app_state_cycling() {
        assert_eq!(AppState::EventList.next(), AppState::Stats);
        assert_eq!(AppState::Stats.next(), AppState::WinCauses);
        assert_eq!(AppState::WinCauses.next(), AppState::LossCauses);
        assert_eq!(AppState::LossCauses.next(), AppState::EventList);

        assert_eq!(AppState::EventList.prev(), AppState::LossCauses);
        assert_eq!(AppState::Stats.prev(), AppState::EventList);
    }

    #[test]
    fn test_app_new_defaults() {
        let app = sample_app(&[]);

        assert_eq!(app.state, AppState::EventList);
        assert_eq!(app.players, vec![0, 1]);
        assert_eq!(app.active_player(), 0);
        assert_eq!(app.selected, 0);
        assert!(app.show_unjudged);
        assert_eq!(app.seek, None);
    }

    #[test]
    fn test_app_player_filter_flag() {
        let app = sample_app(&["-p", "far"]);
        assert_eq!(app.players, vec![1]);
        assert_eq!(app.active_player(), 1);
    }

    #[test]
    fn test_app_player_filter_falls_back_when_empty() {
        let cli = Cli::parse_from(["rallyview", "m.json", "-p", "far", "--no-history"]);
        let data = MatchData {
            fps: 1.0,
            players: vec![PlayerTimeline::default()],
        };
        let session = MatchSession::analyze("m.json", data);
        let app = App::new(&cli, &Config::default(), session, BTreeMap::new());

        assert_eq!(app.players, vec![0]);
    }

    #[test]
    fn test_app_config_player_used_without_flag() {
        let cli = Cli::parse_from(["rallyview", "match.json", "--no-history"]);
        let config = Config {
            player: "near".into(),
            ..Config::default()
        };
        let session = MatchSession::analyze("match.json", sample_data());
        let app = App::new(&cli, &config, session, BTreeMap::new());

        assert_eq!(app.players, vec![0]);
    }

    #[test]
    fn test_selection_navigation() {
        let mut app = sample_app(&[]);

        assert_eq!(app.visible_actions().len(), 4);

        app.select_next();
        assert_eq!(app.selected, 1);
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 3);
        // clamped at the end of the list
        app.select_next();
        assert_eq!(app.selected, 3);

        app.select_prev();
        assert_eq!(app.selected, 2);
        app.select_home();
        assert_eq!(app.selected, 0);
        app.select_prev();
        assert_eq!(app.selected, 0);

        app.select_page_down();
        assert_eq!(app.selected, 3);
        app.select_page_up();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_next_player_cycles_and_resets_selection() {
        let mut app = sample_app(&[]);
        app.select_next();
        app.seek_selected();
        assert!(app.seek.is_some());

        app.next_player();
        assert_eq!(app.active_player(), 1);
        assert_eq!(app.selected, 0);
        assert_eq!(app.seek, None);

        app.next_player();
        assert_eq!(app.active_player(), 0);
    }

    #[test]
    fn test_toggle_unjudged_filters_list() {
        let mut app = sample_app(&[]);
        assert_eq!(app.visible_actions().len(), 4);

        app.toggle_unjudged();
        // the terminal serve is unjudged and disappears
        assert_eq!(app.visible_actions().len(), 3);
        assert!(app
            .visible_actions()
            .iter()
            .all(|c| c.outcome != Outcome::Unjudged));

        app.toggle_unjudged();
        assert_eq!(app.visible_actions().len(), 4);
    }

    #[test]
    fn test_seek_selected_uses_action_start() {
        let mut app = sample_app(&[]);
        app.select_next(); // ロブ at 2.0
        app.seek_selected();

        assert_eq!(app.seek, Some(2.0));
        // fps 30 -> frame 60
        assert_eq!(app.seek_frame(), Some(60));
    }

    #[test]
    fn test_seek_with_no_actions() {
        let cli = Cli::parse_from(["rallyview", "m.json", "--no-history"]);
        let data = MatchData {
            fps: 1.0,
            players: vec![PlayerTimeline::default()],
        };
        let session = MatchSession::analyze("m.json", data);
        let mut app = App::new(&cli, &Config::default(), session, BTreeMap::new());

        app.seek_selected();
        assert_eq!(app.seek, None);
        assert_eq!(app.seek_frame(), None);
    }

    #[test]
    fn test_delta_for_is_per_player() {
        let mut deltas = BTreeMap::new();
        deltas.insert((0, "サーブ".to_string()), 4.5);

        let cli = Cli::parse_from(["rallyview", "match.json", "--no-history"]);
        let session = MatchSession::analyze("match.json", sample_data());
        let mut app = App::new(&cli, &Config::default(), session, deltas);

        assert_eq!(app.delta_for("サーブ"), Some(4.5));
        app.next_player();
        assert_eq!(app.delta_for("サーブ"), None);
    }

    #[test]
    fn test_handle_key_quit() {
        let mut app = sample_app(&[]);
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)
        ));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
        ));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_handle_key_view_switching() {
        let mut app = sample_app(&[]);

        assert!(!handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
        ));
        assert_eq!(app.state, AppState::Stats);

        handle_key(&mut app, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.state, AppState::EventList);

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(app.state, AppState::WinCauses);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
        assert_eq!(app.state, AppState::EventList);
    }

    #[test]
    fn test_handle_key_list_navigation() {
        let mut app = sample_app(&[]);

        handle_key(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(app.selected, 1);
        handle_key(&mut app, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(app.selected, 0);

        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.seek, Some(0.0));

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::NONE));
        assert_eq!(app.visible_actions().len(), 3);
    }

    #[test]
    fn test_handle_key_list_keys_ignored_on_other_screens() {
        let mut app = sample_app(&[]);
        app.state = AppState::Stats;

        handle_key(&mut app, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(app.selected, 0);
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.seek, None);
    }

    #[test]
    fn test_ui_renders_every_state() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = sample_app(&[]);
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        for state in AppState::ORDER {
            app.state = state;
            terminal.draw(|f| ui(&mut app, f)).unwrap();
        }
    }

    #[test]
    fn test_ui_renders_empty_session() {
        use ratatui::{backend::TestBackend, Terminal};

        let cli = Cli::parse_from(["rallyview", "empty.json", "--no-history"]);
        let data = MatchData {
            fps: 1.0,
            players: vec![PlayerTimeline::default()],
        };
        let session = MatchSession::analyze("empty.json", data);
        let mut app = App::new(&cli, &Config::default(), session, BTreeMap::new());

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();

        for state in AppState::ORDER {
            app.state = state;
            terminal.draw(|f| ui(&mut app, f)).unwrap();
        }
    }

    #[test]
    fn test_ui_event_list_shows_labels() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = sample_app(&[]);
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(&mut app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("スマッシュ"));
        assert!(content.contains("Near player"));
    }

    #[test]
    fn test_ui_stats_shows_delta_annotation() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut deltas = BTreeMap::new();
        deltas.insert((0, OVERALL_CATEGORY.to_string()), 6.0);

        let cli = Cli::parse_from(["rallyview", "match.json", "--no-history"]);
        let session = MatchSession::analyze("match.json", sample_data());
        let mut app = App::new(&cli, &Config::default(), session, deltas);
        app.state = AppState::Stats;

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(&mut app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("↑6.0"));
    }

    #[test]
    fn test_tick_rate_constant() {
        assert_eq!(TICK_RATE_MS, 100);

        const _: () = assert!(TICK_RATE_MS > 0);
        const _: () = assert!(TICK_RATE_MS <= 1000); // sub-second redraw latency
    }
}
