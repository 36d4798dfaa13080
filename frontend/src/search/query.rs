use crate::config::{
    ALLOWED_SORT_KEYS, DEFAULT_LIMIT, MAX_FILTER_LEN, MAX_LIMIT, MAX_QUERY_LEN, SEARCH_PATH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    UploadDate,
    ViewCount,
    LikeCount,
}

impl SortKey {
    pub fn key(&self) -> &'static str {
        match self {
            SortKey::UploadDate => ALLOWED_SORT_KEYS[0],
            SortKey::ViewCount => ALLOWED_SORT_KEYS[1],
            SortKey::LikeCount => ALLOWED_SORT_KEYS[2],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::UploadDate => "アップロード日",
            SortKey::ViewCount => "再生回数",
            SortKey::LikeCount => "いいね数",
        }
    }

    pub fn all_variants() -> [Self; 3] {
        [SortKey::UploadDate, SortKey::ViewCount, SortKey::LikeCount]
    }

    /// Unknown keys fall back to upload date.
    pub fn from_key(key: &str) -> Self {
        Self::all_variants()
            .into_iter()
            .find(|sort| sort.key() == key)
            .unwrap_or_default()
    }
}

/// Raw values of the search controls, exactly as read from the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFilters {
    pub text: String,
    pub category: String,
    pub players: String,
    pub level: String,
    pub channel: String,
    pub sort: String,
    pub limit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub category: String,
    pub players: String,
    pub level: String,
    pub channel: String,
    pub sort: SortKey,
    pub limit: u32,
    pub offset: u64,
}

impl SearchQuery {
    /// Sanitises the raw control values for the given 1-based page.
    pub fn build(raw: &RawFilters, page: u32) -> Self {
        let limit = get_limit(&raw.limit);
        Self {
            text: clamp(&raw.text, MAX_QUERY_LEN),
            category: clamp(&raw.category, MAX_FILTER_LEN),
            players: clamp(&raw.players, MAX_FILTER_LEN),
            level: clamp(&raw.level, MAX_FILTER_LEN),
            channel: clamp(&raw.channel, MAX_FILTER_LEN),
            sort: SortKey::from_key(&raw.sort),
            limit,
            offset: u64::from(page.max(1) - 1) * u64::from(limit),
        }
    }

    pub fn to_path(&self) -> String {
        format!(
            "{}?q={}&type={}&players={}&level={}&channel={}&sort={}&limit={}&offset={}",
            SEARCH_PATH,
            urlencoding::encode(&self.text),
            urlencoding::encode(&self.category),
            urlencoding::encode(&self.players),
            urlencoding::encode(&self.level),
            urlencoding::encode(&self.channel),
            self.sort.key(),
            self.limit,
            self.offset
        )
    }
}

fn clamp(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

/// Page size from the limit control: 10 unless it holds a positive integer,
/// and never more than 10.
pub fn get_limit(raw: &str) -> u32 {
    match leading_int(raw) {
        Some(n) if n > 0 => n.min(i64::from(MAX_LIMIT)) as u32,
        _ => DEFAULT_LIMIT,
    }
}

// Accepts an optional sign followed by digits and ignores anything after them,
// so "5件" reads as 5.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    // Anything too long for i64 is certainly above the cap.
    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
