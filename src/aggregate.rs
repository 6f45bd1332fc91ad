//! Summary statistics over a classified timeline.
//!
//! Every view reads from here; none re-derives outcomes on its own. All
//! operations accept the timeline in any order and return zero-filled or
//! empty results for empty input.

use std::collections::BTreeMap;

use crate::action::Action;
use crate::category::{cause_label, OTHER_BUCKET};
use crate::outcome::{classify, sorted_by_start, Outcome, SERVE_MARKER};
use crate::util::percent;

/// Outcome counts across one timeline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeTally {
    pub win: usize,
    pub loss: usize,
    pub unjudged: usize,
    pub total: usize,
}

impl OutcomeTally {
    /// Wins as a share of all recorded actions, unjudged included.
    pub fn win_rate(&self) -> u8 {
        percent(self.win, self.total)
    }
}

/// Classify every action and tally the outcomes.
pub fn count_by_outcome(timeline: &[Action]) -> OutcomeTally {
    let mut tally = OutcomeTally::default();
    for action in timeline {
        tally.total += 1;
        match classify(action, timeline) {
            Outcome::Win => tally.win += 1,
            Outcome::Loss => tally.loss += 1,
            Outcome::Unjudged => tally.unjudged += 1,
        }
    }
    tally
}

/// Success rate for one category bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRate {
    pub total: usize,
    pub win_count: usize,
    /// Round-half-up percentage; 0 when the bucket is empty.
    pub rate: u8,
}

/// Group the timeline by the key the extractor derives from each action
/// and compute per-bucket win rates. Actions the extractor rejects are
/// skipped.
pub fn rate_by_category<K, F>(timeline: &[Action], extractor: F) -> BTreeMap<K, CategoryRate>
where
    K: Ord,
    F: Fn(&Action) -> Option<K>,
{
    let mut rates: BTreeMap<K, CategoryRate> = BTreeMap::new();
    for action in timeline {
        let Some(key) = extractor(action) else {
            continue;
        };
        let entry = rates.entry(key).or_default();
        entry.total += 1;
        if classify(action, timeline) == Outcome::Win {
            entry.win_count += 1;
        }
    }
    for rate in rates.values_mut() {
        rate.rate = percent(rate.win_count, rate.total);
    }
    rates
}

/// One slice of a cause distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseShare {
    pub category: String,
    pub count: usize,
    pub percentage: u8,
}

/// Share below which a cause is folded into the other bucket.
const COLLAPSE_THRESHOLD: f64 = 0.05;

/// Separator in loss-cause pair keys: preceding action, then the action
/// that dropped the rally.
pub const PAIR_SEPARATOR: &str = "→";

/// Which action categories directly preceded a won point.
///
/// Counts Win-classified actions whose successor in chronological order is
/// a serve-labeled action; the serve restarting play is the scoreboard
/// signal, so this is narrower than the Win tally itself.
pub fn win_cause_distribution(timeline: &[Action]) -> Vec<CauseShare> {
    let sorted = sorted_by_start(timeline);
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0;

    for (idx, action) in sorted.iter().enumerate() {
        let Some(next) = sorted.get(idx + 1) else {
            continue;
        };
        if !next.label.contains(SERVE_MARKER) {
            continue;
        }
        if classify(action, timeline) != Outcome::Win {
            continue;
        }
        *counts.entry(cause_label(&action.label).to_string()).or_insert(0) += 1;
        total += 1;
    }

    into_shares(counts, total)
}

/// Which action pairs led to a lost point.
///
/// Pairs each Loss-classified action with the action immediately before it
/// in chronological order, keyed `preceding→losing`. Only pairs whose
/// preceding action classified Win are counted, so one lost rally is not
/// attributed twice; the terminal action is never attributed at all.
pub fn loss_cause_distribution(timeline: &[Action]) -> Vec<CauseShare> {
    let sorted = sorted_by_start(timeline);
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0;

    for (idx, action) in sorted.iter().enumerate() {
        if idx == 0 || idx + 1 == sorted.len() {
            continue;
        }
        if classify(action, timeline) != Outcome::Loss {
            continue;
        }
        let preceding = sorted[idx - 1];
        if classify(preceding, timeline) != Outcome::Win {
            continue;
        }
        let key = format!(
            "{}{}{}",
            cause_label(&preceding.label),
            PAIR_SEPARATOR,
            cause_label(&action.label)
        );
        *counts.entry(key).or_insert(0) += 1;
        total += 1;
    }

    into_shares(counts, total)
}

/// Turn raw counts into ordered shares: sub-threshold categories collapse
/// into the other bucket (total count preserved), the rest sort by
/// descending count with label order breaking ties.
fn into_shares(counts: BTreeMap<String, usize>, total: usize) -> Vec<CauseShare> {
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<CauseShare> = Vec::new();
    let mut collapsed = 0usize;
    for (category, count) in counts {
        if (count as f64) / (total as f64) < COLLAPSE_THRESHOLD {
            collapsed += count;
        } else {
            shares.push(CauseShare {
                category,
                count,
                percentage: percent(count, total),
            });
        }
    }

    if collapsed > 0 {
        if let Some(other) = shares.iter_mut().find(|s| s.category == OTHER_BUCKET) {
            other.count += collapsed;
            other.percentage = percent(other.count, total);
        } else {
            shares.push(CauseShare {
                category: OTHER_BUCKET.to_string(),
                count: collapsed,
                percentage: percent(collapsed, total),
            });
        }
    }

    shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    shares
}
