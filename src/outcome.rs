//! Rally outcome classification.
//!
//! Every action is judged from its own player's timeline alone: a quick
//! follow-up means the rally kept going, a long gap before anything but a
//! serve means the rally was dropped, and a long gap before a serve means
//! the point was won. Cross-timeline (opponent response) judging is not
//! used here.

use itertools::Itertools;

use crate::action::Action;

/// Substring that marks a serve-type action label, the rally-boundary
/// signal.
pub const SERVE_MARKER: &str = "サーブ";

/// Substring that marks an explicit misplay in a label. Only consulted for
/// the final action of a timeline, where no follow-up exists to judge by.
pub const ERROR_MARKER: &str = "誤";

/// Seconds after an action's end within which a follow-up counts as an
/// immediate continuation of the rally.
pub const GRACE_WINDOW_SECS: f64 = 2.0;

/// Classification result for a single action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Unjudged,
}

impl Outcome {
    /// Icon shown next to the action in the event list.
    pub fn icon(self) -> &'static str {
        match self {
            Outcome::Win => "✓",
            Outcome::Loss => "✗",
            Outcome::Unjudged => "○",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Unjudged => "unjudged",
        }
    }
}

/// Timeline sorted by start time. The sort is stable, so ties on `start`
/// keep their file order.
pub(crate) fn sorted_by_start(timeline: &[Action]) -> Vec<&Action> {
    timeline
        .iter()
        .sorted_by(|a, b| a.start.total_cmp(&b.start))
        .collect()
}

/// Decide whether `action` won, lost, or cannot be judged, looking only at
/// the player's own timeline.
///
/// The timeline may arrive in any order and may hold copies rather than
/// the same allocation; the action is located by `(start, end, label)`
/// equality. Fully identical duplicates resolve to the first occurrence,
/// which can misjudge the later duplicate; a documented limitation.
/// The input is never mutated and the function never panics.
pub fn classify(action: &Action, timeline: &[Action]) -> Outcome {
    let sorted = sorted_by_start(timeline);
    let position = sorted.iter().position(|candidate| {
        candidate.start == action.start
            && candidate.end == action.end
            && candidate.label == action.label
    });

    // An action missing from its own timeline has nothing to look ahead
    // to; it is judged like a terminal action.
    let later = match position {
        Some(idx) => &sorted[idx + 1..],
        None => &[][..],
    };

    let deadline = action.end + GRACE_WINDOW_SECS;

    // A follow-up inside the grace window (boundary inclusive) means the
    // rally continued.
    if later.iter().any(|next| next.start <= deadline) {
        return Outcome::Win;
    }

    // Past the window the next action tells the story: a serve restarts
    // play, so the point was won before it; anything else is a loss.
    if let Some(next) = later.first() {
        if next.label.contains(SERVE_MARKER) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    } else if action.label.contains(ERROR_MARKER) {
        Outcome::Loss
    } else {
        Outcome::Unjudged
    }
}
