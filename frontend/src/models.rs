use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One search hit as returned by `/search`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Activity {
    #[serde(default, deserialize_with = "text_or_number")]
    pub title: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub video_url: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub upload_date: String,
    #[serde(default)]
    pub view_count: Option<i64>,
    #[serde(default)]
    pub like_count: Option<i64>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub duration: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub channel_category: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub current_display_count: u64,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Channel {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub channel_name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub channel_link: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Level {
    #[serde(deserialize_with = "text_or_number")]
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct CsrfTokenResponse {
    pub csrf_token: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub category: String,
    pub message: String,
}

// The backend hands out ids and labels as strings or bare numbers depending on
// the column type; the page only ever displays them.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_ids_accept_numbers_and_strings() {
        let channels: Vec<Channel> = serde_json::from_str(
            r#"[{"id": 3, "channel_name": "A", "channel_link": "https://a"},
                {"id": "x9", "channel_name": "B", "channel_link": null}]"#,
        )
        .unwrap();
        assert_eq!(channels[0].id, "3");
        assert_eq!(channels[1].id, "x9");
        assert_eq!(channels[1].channel_link, "");
    }

    #[test]
    fn search_response_tolerates_missing_fields() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"activities": [{"title": "t"}], "total": 1}"#).unwrap();
        assert_eq!(response.activities[0].title, "t");
        assert_eq!(response.activities[0].view_count, None);
        assert_eq!(response.current_display_count, 0);
        assert!(response.error.is_none());
    }
}
