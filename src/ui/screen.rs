use ratatui::Frame;

use crate::ui::{causes_view::render_causes, stats_view::render_stats};
use crate::{App, AppState};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &mut App, f: &mut Frame);
}

/// Event list screen - renders via the App widget
pub struct EventListScreen;

impl Screen for EventListScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        f.render_widget(&*app, f.area());
    }
}

/// Per-category success rates for the active player
pub struct StatsScreen;

impl Screen for StatsScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        render_stats(app, f);
    }
}

/// Which actions directly preceded won points
pub struct WinCausesScreen;

impl Screen for WinCausesScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        let shares = app
            .active_report()
            .map(|r| r.win_causes.clone())
            .unwrap_or_default();
        render_causes(app, f, "Points won by", &shares);
    }
}

/// Which action pairs dropped points
pub struct LossCausesScreen;

impl Screen for LossCausesScreen {
    fn render(&self, app: &mut App, f: &mut Frame) {
        let shares = app
            .active_report()
            .map(|r| r.loss_causes.clone())
            .unwrap_or_default();
        render_causes(app, f, "Points lost by", &shares);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::EventList => Box::new(EventListScreen),
        AppState::Stats => Box::new(StatsScreen),
        AppState::WinCauses => Box::new(WinCausesScreen),
        AppState::LossCauses => Box::new(LossCausesScreen),
    }
}
