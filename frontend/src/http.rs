use crate::error::ApiError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// The two request shapes the page needs. Paths are relative to the backend root.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError>;

    async fn post_json(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, ApiError>;
}

/// GET `path` and decode a 2xx body as `D`; any other status is an error.
pub async fn get_json<T, D>(transport: &T, path: &str) -> Result<D, ApiError>
where
    T: Transport,
    D: DeserializeOwned,
{
    let response = transport.get(path).await?;
    log::debug!("Response status for {}: {}", path, response.status);
    if !response.ok() {
        return Err(ApiError::Status(response.status));
    }
    response.json()
}

/// Browser `fetch` via gloo-net.
#[derive(Debug, Clone, PartialEq)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for GlooTransport {
    async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }

    async fn post_json(
        &self,
        path: &str,
        headers: &[(&str, &str)],
        body: &str,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = Request::post(&self.url(path)).header("Content-Type", "application/json");
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .body(body.to_string())
            .map_err(|e| ApiError::Network(format!("Request error: {e}")))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn get_json_rejects_non_success_status() {
        let transport = MockTransport::new();
        transport.respond("/get_levels", 503, "");
        let result: Result<Vec<String>, _> = block_on(get_json(&transport, "/get_levels"));
        assert_eq!(result, Err(ApiError::Status(503)));
    }

    #[test]
    fn get_json_reports_shape_mismatch_as_decode_error() {
        let transport = MockTransport::new();
        transport.respond("/get_levels", 200, r#"{"error": "nope"}"#);
        let result: Result<Vec<String>, _> = block_on(get_json(&transport, "/get_levels"));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
