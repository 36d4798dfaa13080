use crate::config::TRUSTED_EMBED_PREFIXES;

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.unsigned_abs().to_string();
    let mut result = String::new();
    if number < 0 {
        result.push('-');
    }
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// `PT1H2M3S` -> `01:02:03`; anything that is not an ISO-8601 duration is returned as is.
pub fn format_iso8601_duration(duration: &str) -> String {
    let Some(body) = duration.strip_prefix("PT") else {
        return duration.to_string();
    };

    let (mut hours, mut minutes, mut seconds) = (0u32, 0u32, 0u32);
    let mut digits = String::new();
    for c in body.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'H' | 'M' | 'S' => {
                let Ok(value) = digits.parse::<u32>() else {
                    return duration.to_string();
                };
                match c {
                    'H' => hours = value,
                    'M' => minutes = value,
                    _ => seconds = value,
                }
                digits.clear();
            }
            _ => return duration.to_string(),
        }
    }
    if !digits.is_empty() {
        return duration.to_string();
    }

    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Only YouTube embed URLs may be loaded into a card's frame.
pub fn trusted_embed_url(url: &str) -> Option<&str> {
    TRUSTED_EMBED_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
        .then_some(url)
}

/// Link target for an externally supplied URL; non-http(s) values become `#`.
pub fn external_href(url: &str) -> &str {
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        "#"
    }
}
