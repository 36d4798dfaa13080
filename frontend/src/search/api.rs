use crate::error::ApiError;
use crate::http::{get_json, Transport};
use crate::models::{Activity, SearchResponse};
use crate::search::query::SearchQuery;

/// One page of results, ready to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPage {
    pub activities: Vec<Activity>,
    pub total: u64,
    pub current_display_count: u64,
}

pub async fn execute_search<T: Transport>(
    transport: &T,
    query: &SearchQuery,
) -> Result<SearchPage, ApiError> {
    let response: SearchResponse = get_json(transport, &query.to_path()).await?;

    if let Some(error) = response.error.filter(|e| !e.is_empty()) {
        return Err(ApiError::Application(error));
    }

    let mut activities = response.activities;
    activities.truncate(query.limit as usize);

    Ok(SearchPage {
        activities,
        total: response.total,
        current_display_count: response.current_display_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEARCH_PATH;
    use crate::http::mock::MockTransport;
    use crate::search::query::RawFilters;
    use futures::executor::block_on;

    fn query(limit: &str) -> SearchQuery {
        SearchQuery::build(
            &RawFilters {
                text: "ドリブル".into(),
                limit: limit.into(),
                ..Default::default()
            },
            1,
        )
    }

    #[test]
    fn successful_search_returns_page() {
        let transport = MockTransport::new();
        transport.respond(
            SEARCH_PATH,
            200,
            r#"{"activities": [{"title": "a"}, {"title": "b"}], "total": 25, "current_display_count": 2}"#,
        );

        let page = block_on(execute_search(&transport, &query("10"))).unwrap();
        assert_eq!(page.activities.len(), 2);
        assert_eq!(page.total, 25);
        assert_eq!(page.current_display_count, 2);

        let sent = transport.last_request().unwrap();
        assert!(sent.path.contains("limit=10&offset=0"));
    }

    #[test]
    fn results_are_capped_at_the_limit() {
        let transport = MockTransport::new();
        transport.respond(
            SEARCH_PATH,
            200,
            r#"{"activities": [{"title": "1"}, {"title": "2"}, {"title": "3"}], "total": 3}"#,
        );

        let page = block_on(execute_search(&transport, &query("2"))).unwrap();
        assert_eq!(page.activities.len(), 2);
    }

    #[test]
    fn error_field_in_success_payload_is_a_failure() {
        let transport = MockTransport::new();
        transport.respond(SEARCH_PATH, 200, r#"{"error": "検索に失敗しました"}"#);

        let result = block_on(execute_search(&transport, &query("")));
        assert_eq!(
            result,
            Err(ApiError::Application("検索に失敗しました".into()))
        );
    }

    #[test]
    fn empty_error_field_is_ignored() {
        let transport = MockTransport::new();
        transport.respond(SEARCH_PATH, 200, r#"{"activities": [], "total": 0, "error": ""}"#);

        assert!(block_on(execute_search(&transport, &query(""))).is_ok());
    }

    #[test]
    fn http_status_is_surfaced() {
        let transport = MockTransport::new();
        transport.respond(SEARCH_PATH, 500, "Internal Server Error");

        let result = block_on(execute_search(&transport, &query("")));
        assert_eq!(result, Err(ApiError::Status(500)));
    }
}
