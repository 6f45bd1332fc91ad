//! Annotation file loading.
//!
//! Two wire formats are accepted. The primary format groups actions per
//! player under `gts`; the legacy format is a flat `action_results` list
//! from the older export pipeline. Both normalize into [`MatchData`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::action::{Action, MatchData, PlayerTimeline};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid annotation JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognized annotation format (expected `gts` or `action_results`)")]
    UnrecognizedFormat,
    #[error("annotation file contains no players")]
    Empty,
}

// Numeric label ids used by older annotation exports.
const LABEL_TABLE: [(&str, &str); 11] = [
    ("0", "サーブ"),
    ("1", "ロブ"),
    ("2", "ネット"),
    ("3", "ヘアピン"),
    ("4", "プッシュ"),
    ("5", "ドライブ"),
    ("6", "スマッシュレシーブ"),
    ("7", "ドロップ"),
    ("8", "スマッシュ"),
    ("9", "クリアー"),
    ("10", "ディフェンス"),
];

fn resolve_label(raw: &str) -> String {
    LABEL_TABLE
        .iter()
        .find(|(id, _)| *id == raw)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    fps: Option<f64>,
    gts: Option<Vec<RawPlayer>>,
    action_results: Option<Vec<RawLegacyAction>>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(default)]
    actions: Vec<RawAction>,
}

#[derive(Debug, Deserialize)]
struct RawAction {
    start_id: f64,
    end_id: f64,
    #[serde(default)]
    label_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawLegacyAction {
    start_time: f64,
    end_time: f64,
    #[serde(default)]
    label_name: String,
}

impl RawAction {
    fn into_action(self) -> Action {
        // Only the first label name carries the action type; extra entries
        // are auxiliary tags the viewer does not use.
        let label = self.label_names.into_iter().next().unwrap_or_default();
        Action::new(resolve_label(&label), self.start_id, self.end_id)
    }
}

/// Read and parse an annotation file from disk.
pub fn load_match(path: &Path) -> Result<MatchData, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_match(&bytes)
}

/// Parse annotation JSON, detecting the wire format by its top-level key.
pub fn parse_match(bytes: &[u8]) -> Result<MatchData, LoadError> {
    let raw: RawMatch = serde_json::from_slice(bytes)?;

    if let Some(gts) = raw.gts {
        if gts.is_empty() {
            return Err(LoadError::Empty);
        }
        let players = gts
            .into_iter()
            .map(|p| PlayerTimeline {
                actions: p.actions.into_iter().map(RawAction::into_action).collect(),
            })
            .collect();
        return Ok(MatchData {
            fps: raw.fps.unwrap_or(1.0),
            players,
        });
    }

    if let Some(results) = raw.action_results {
        // Legacy files describe a single player and carry timestamps that
        // are already seconds.
        let actions = results
            .into_iter()
            .map(|r| Action::new(resolve_label(&r.label_name), r.start_time, r.end_time))
            .collect();
        return Ok(MatchData {
            fps: 1.0,
            players: vec![PlayerTimeline { actions }],
        });
    }

    Err(LoadError::UnrecognizedFormat)
}
