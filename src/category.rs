//! Closed enumeration of rally action categories.
//!
//! Annotation labels are free-form Japanese strings that may carry
//! qualifiers in parentheses. Categories resolve by ordered substring
//! matching; the table puts narrower patterns ahead of broader ones so a
//! smash-receive label never falls into the smash bucket.

use std::fmt;

/// Rally action category. Variant order is the display order used by the
/// stats views (and by `BTreeMap` iteration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Serve,
    Smash,
    Clear,
    DropCut,
    Drive,
    NetHairpin,
    Push,
    SmashReceive,
    Defense,
    Lob,
    Judge,
}

impl Category {
    // Matching order, narrow before broad: "スマッシュレシーブ" contains
    // "スマッシュ" and must be tried first.
    const MATCHERS: [(Category, &'static [&'static str]); 11] = [
        (Category::SmashReceive, &["スマッシュレシーブ"]),
        (Category::Smash, &["スマッシュ"]),
        (Category::Serve, &["サーブ"]),
        (Category::Lob, &["ロブ"]),
        (Category::NetHairpin, &["ネット", "ヘアピン"]),
        (Category::Push, &["プッシュ"]),
        (Category::Drive, &["ドライブ"]),
        (Category::Clear, &["クリアー"]),
        (Category::DropCut, &["ドロップ", "カット"]),
        (Category::Defense, &["ディフェンス"]),
        (Category::Judge, &["ジャッジ"]),
    ];

    /// Resolve a label to its category; the first matcher in table order
    /// wins. Labels matching nothing (including empty labels) have no
    /// category and are skipped by grouping.
    pub fn of(label: &str) -> Option<Category> {
        Self::MATCHERS
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| label.contains(p)))
            .map(|(category, _)| *category)
    }

    /// Display name, matching the annotation vocabulary.
    pub fn name(self) -> &'static str {
        match self {
            Category::Serve => "サーブ",
            Category::Smash => "スマッシュ",
            Category::Clear => "クリアー",
            Category::DropCut => "ドロップ/カット",
            Category::Drive => "ドライブ",
            Category::NetHairpin => "ネット/ヘアピン",
            Category::Push => "プッシュ",
            Category::SmashReceive => "スマッシュレシーブ",
            Category::Defense => "ディフェンス",
            Category::Lob => "ロブ",
            Category::Judge => "ジャッジ",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared bucket for labels with no usable attribution key, and for
/// collapsed small shares in cause distributions.
pub const OTHER_BUCKET: &str = "その他";

/// Attribution key for cause distributions: the label prefix before the
/// first parenthesis, or the shared other bucket when that prefix is
/// empty.
pub fn cause_label(label: &str) -> &str {
    let base = label.split('(').next().unwrap_or("").trim();
    if base.is_empty() {
        OTHER_BUCKET
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smash_receive_takes_precedence_over_smash() {
        assert_eq!(Category::of("スマッシュレシーブ"), Some(Category::SmashReceive));
        assert_eq!(Category::of("スマッシュレシーブ(誤り)"), Some(Category::SmashReceive));
        assert_eq!(Category::of("スマッシュ"), Some(Category::Smash));
    }

    #[test]
    fn test_every_category_resolves() {
        assert_eq!(Category::of("サーブ"), Some(Category::Serve));
        assert_eq!(Category::of("ロブ"), Some(Category::Lob));
        assert_eq!(Category::of("ネット"), Some(Category::NetHairpin));
        assert_eq!(Category::of("ヘアピン"), Some(Category::NetHairpin));
        assert_eq!(Category::of("プッシュ"), Some(Category::Push));
        assert_eq!(Category::of("ドライブ"), Some(Category::Drive));
        assert_eq!(Category::of("クリアー"), Some(Category::Clear));
        assert_eq!(Category::of("ドロップ"), Some(Category::DropCut));
        assert_eq!(Category::of("カット"), Some(Category::DropCut));
        assert_eq!(Category::of("ディフェンス"), Some(Category::Defense));
        assert_eq!(Category::of("ジャッジ"), Some(Category::Judge));
    }

    #[test]
    fn test_qualified_labels_resolve_through_substring() {
        assert_eq!(Category::of("ショートサーブ"), Some(Category::Serve));
        assert_eq!(Category::of("クリアー(誤り)"), Some(Category::Clear));
    }

    #[test]
    fn test_unknown_and_empty_labels_have_no_category() {
        assert_eq!(Category::of("フットワーク"), None);
        assert_eq!(Category::of(""), None);
    }

    #[test]
    fn test_display_uses_annotation_vocabulary() {
        assert_eq!(Category::Serve.to_string(), "サーブ");
        assert_eq!(Category::NetHairpin.to_string(), "ネット/ヘアピン");
        assert_eq!(Category::DropCut.to_string(), "ドロップ/カット");
    }

    #[test]
    fn test_cause_label_strips_parenthesized_qualifier() {
        assert_eq!(cause_label("スマッシュ(誤り)"), "スマッシュ");
        assert_eq!(cause_label("サーブ"), "サーブ");
        assert_eq!(cause_label("ロブ (ネット際)"), "ロブ");
    }

    #[test]
    fn test_cause_label_empty_prefix_falls_into_other() {
        assert_eq!(cause_label(""), OTHER_BUCKET);
        assert_eq!(cause_label("(誤り)"), OTHER_BUCKET);
    }
}
