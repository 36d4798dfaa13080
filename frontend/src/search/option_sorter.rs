//! Display order for the category and player-count dropdowns.
//!
//! Values are split into three buckets: `"N対M"` pairs, `"N人"` counts, and
//! everything else. Pairs and counts sort numerically, the rest lexically, and
//! the buckets are emitted in that order. In the category list the catch-all
//! `"その他"` is always last.

use std::collections::BTreeSet;

pub const OTHER_CATEGORY: &str = "その他";
pub const CATEGORY_DEFAULTS: [&str; 2] = ["対人", OTHER_CATEGORY];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionContext {
    Category,
    PlayerCount,
}

impl OptionContext {
    /// Column name understood by `/get_unique_values/{column}`.
    pub fn column(&self) -> &'static str {
        match self {
            OptionContext::Category => "category_title",
            OptionContext::PlayerCount => "players",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            OptionContext::Category => "カテゴリを選択",
            OptionContext::PlayerCount => "プレイヤー数を選択",
        }
    }

    /// Options shown when the server has nothing (or fails).
    pub fn defaults(&self) -> Vec<String> {
        match self {
            OptionContext::Category => CATEGORY_DEFAULTS.iter().map(|v| v.to_string()).collect(),
            OptionContext::PlayerCount => Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Bucket {
    Pair(u64, u64),
    Count(u64),
    Other,
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn classify(value: &str) -> Bucket {
    if let Some((left, right)) = value.split_once('対') {
        if let (Some(a), Some(b)) = (parse_digits(left), parse_digits(right)) {
            return Bucket::Pair(a, b);
        }
    }
    if let Some(n) = value.strip_suffix('人').and_then(parse_digits) {
        return Bucket::Count(n);
    }
    Bucket::Other
}

pub fn sort_options<I, S>(values: I, context: OptionContext) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    // BTreeSet dedupes and gives lexical order, which doubles as the tie-break.
    let unique: BTreeSet<String> = values.into_iter().map(Into::into).collect();
    if unique.is_empty() {
        return context.defaults();
    }

    let mut pairs = Vec::new();
    let mut counts = Vec::new();
    let mut others = Vec::new();
    for value in unique {
        match classify(&value) {
            Bucket::Pair(a, b) => pairs.push(((a, b), value)),
            Bucket::Count(n) => counts.push((n, value)),
            Bucket::Other => others.push(value),
        }
    }

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    counts.sort_by(|a, b| a.0.cmp(&b.0));
    if context == OptionContext::Category {
        others.sort_by_key(|v| v == OTHER_CATEGORY);
    }

    pairs
        .into_iter()
        .map(|(_, v)| v)
        .chain(counts.into_iter().map(|(_, v)| v))
        .chain(others)
        .collect()
}
