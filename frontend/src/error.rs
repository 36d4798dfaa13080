use thiserror::Error;

/// Every way a backend call can fail, as seen from the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Error field reported inside an otherwise successful payload.
    #[error("server reported: {0}")]
    Application(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }

    /// Message and optional detail line shown in the search error banner.
    pub fn search_message(&self) -> (String, Option<String>) {
        match self {
            ApiError::Status(500) => (
                "サーバーエラーが発生しました。しばらくしてから再度お試しください。".to_string(),
                None,
            ),
            ApiError::Status(400) => (
                "リクエストが無効です。検索条件を確認してください。".to_string(),
                None,
            ),
            ApiError::Status(code) => (
                format!("エラーが発生しました（ステータスコード: {code}）"),
                None,
            ),
            ApiError::Application(message) => (message.clone(), None),
            ApiError::Network(_) => (
                "ネットワークエラーが発生しました。".to_string(),
                Some("インターネット接続を確認してください。".to_string()),
            ),
            ApiError::Decode(_) => (
                "検索中にエラーが発生しました。".to_string(),
                Some("しばらくしてから再度お試しください。".to_string()),
            ),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_messages_are_classified_by_status() {
        assert!(ApiError::Status(500).search_message().0.contains("サーバーエラー"));
        assert!(ApiError::Status(400).search_message().0.contains("リクエストが無効"));
        assert_eq!(
            ApiError::Status(404).search_message().0,
            "エラーが発生しました（ステータスコード: 404）"
        );
    }

    #[test]
    fn application_error_text_is_shown_verbatim() {
        let (message, details) = ApiError::Application("DB down".into()).search_message();
        assert_eq!(message, "DB down");
        assert!(details.is_none());
    }

    #[test]
    fn network_errors_carry_a_detail_line() {
        let (_, details) = ApiError::Network("offline".into()).search_message();
        assert_eq!(details.as_deref(), Some("インターネット接続を確認してください。"));
    }

    #[test]
    fn only_400_counts_as_bad_request() {
        assert!(ApiError::Status(400).is_bad_request());
        assert!(!ApiError::Status(403).is_bad_request());
        assert!(!ApiError::Network("x".into()).is_bad_request());
    }
}
