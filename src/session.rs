//! One loaded match and everything derived from it.

use std::collections::BTreeMap;

use crate::action::{Action, MatchData};
use crate::aggregate::{
    count_by_outcome, loss_cause_distribution, rate_by_category, win_cause_distribution,
    CategoryRate, CauseShare, OutcomeTally,
};
use crate::category::Category;
use crate::outcome::{classify, Outcome};

/// An action with its classification attached for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedAction {
    pub action: Action,
    pub outcome: Outcome,
}

/// Per-player analysis product consumed by every view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerReport {
    pub player: usize,
    /// File order, like the annotation list itself.
    pub classified: Vec<ClassifiedAction>,
    pub tally: OutcomeTally,
    pub rates: BTreeMap<Category, CategoryRate>,
    pub win_causes: Vec<CauseShare>,
    pub loss_causes: Vec<CauseShare>,
}

/// A loaded annotation file plus the full per-player analysis.
#[derive(Debug, Clone)]
pub struct MatchSession {
    pub source: String,
    pub data: MatchData,
    pub reports: Vec<PlayerReport>,
}

impl MatchSession {
    /// Classify and aggregate every player timeline. The whole report is
    /// recomputed from scratch; at a few hundred actions per match there
    /// is nothing worth caching.
    pub fn analyze(source: impl Into<String>, data: MatchData) -> Self {
        let reports = data
            .players
            .iter()
            .enumerate()
            .map(|(player, timeline)| analyze_player(player, &timeline.actions))
            .collect();

        Self {
            source: source.into(),
            data,
            reports,
        }
    }

    pub fn report(&self, player: usize) -> Option<&PlayerReport> {
        self.reports.get(player)
    }
}

fn analyze_player(player: usize, actions: &[Action]) -> PlayerReport {
    let classified = actions
        .iter()
        .map(|action| ClassifiedAction {
            action: action.clone(),
            outcome: classify(action, actions),
        })
        .collect();

    PlayerReport {
        player,
        classified,
        tally: count_by_outcome(actions),
        rates: rate_by_category(actions, |a| Category::of(&a.label)),
        win_causes: win_cause_distribution(actions),
        loss_causes: loss_cause_distribution(actions),
    }
}
