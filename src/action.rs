/// One labeled, timestamped event performed by a player.
///
/// Created once at annotation load time and never mutated afterwards.
/// `start` and `end` are seconds; `end >= start` is enforced at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl Action {
    pub fn new(label: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            start,
            // Inverted intervals are clamped so the grace-window arithmetic
            // never sees end < start.
            end: end.max(start),
        }
    }
}

/// A player's actions in file order.
///
/// The stored order is whatever the annotation file had; consumers that
/// need chronological order sort on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerTimeline {
    pub actions: Vec<Action>,
}

/// A full match annotation: frame rate plus one timeline per player.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchData {
    /// Frames per second of the companion video; 1.0 when timestamps are
    /// plain seconds.
    pub fps: f64,
    pub players: Vec<PlayerTimeline>,
}

impl MatchData {
    pub fn player(&self, idx: usize) -> Option<&PlayerTimeline> {
        self.players.get(idx)
    }
}

/// Display title for a player slot: camera-near first, camera-far second.
pub fn player_title(idx: usize) -> String {
    match idx {
        0 => "Near player".to_string(),
        1 => "Far player".to_string(),
        n => format!("Player {}", n + 1),
    }
}
