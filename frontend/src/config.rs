//! Fixed limits, delays and endpoint paths used across the client.

pub const MAX_QUERY_LEN: usize = 200;
pub const MAX_FILTER_LEN: usize = 100;

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 10;

pub const ALLOWED_SORT_KEYS: [&str; 3] = ["upload_date", "view_count", "like_count"];

/// Offsets from mount at which the dropdowns are (re)populated.
pub const POPULATE_OFFSETS_MS: [u32; 2] = [100, 5_000];

pub const CONFIRMATION_HIDE_MS: u32 = 5_000;

pub const TRUSTED_EMBED_PREFIXES: [&str; 2] = [
    "https://www.youtube.com/embed/",
    "https://youtube.com/embed/",
];

pub const CSRF_HEADER: &str = "X-CSRFToken";

pub const CSRF_TOKEN_PATH: &str = "/get-csrf-token";
pub const UNIQUE_VALUES_PATH: &str = "/get_unique_values";
pub const LEVELS_PATH: &str = "/get_levels";
pub const CHANNELS_PATH: &str = "/get_channels";
pub const SEARCH_PATH: &str = "/search";
pub const FEEDBACK_PATH: &str = "/submit-feedback";
