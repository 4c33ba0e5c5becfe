//! Reqwest-backed user listing source.
//!
//! Owns transport details only: the GET request, timeout and status mapping,
//! and JSON decoding into [`RawUser`]s.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, instrument};

use super::{FetchError, RawUser, UserSource};

/// Listing source that issues one HTTP GET against a fixed endpoint.
pub struct HttpUserSource {
    client: Client,
    endpoint: Url,
}

impl HttpUserSource {
    /// Build a source using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    #[instrument(name = "fetch_users", fields(endpoint = %self.endpoint), skip(self))]
    async fn fetch_users(&self) -> Result<Vec<RawUser>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        check_status(status)?;

        let users = parse_users(body.as_ref())?;
        debug!(count = users.len(), bytes = body.len(), "User listing decoded");
        Ok(users)
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Transport(format!("request timed out: {error}"))
    } else {
        FetchError::Transport(error.to_string())
    }
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<RawUser>, FetchError> {
    serde_json::from_slice(body).map_err(|error| FetchError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_users_accepts_array() {
        let users = parse_users(br#"[{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]"#).unwrap();
        let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_parse_users_is_all_or_nothing() {
        let result = parse_users(br#"[{"id": 1, "name": "A"}, {"id": "two"}]"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));

        let result = parse_users(br#"{"users": []}"#);
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_non_success_status_is_rejected() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(
            check_status(StatusCode::SERVICE_UNAVAILABLE),
            Err(FetchError::Status(503))
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_transport_error() {
        // A port that was free a moment ago has no listener now.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/users")).unwrap();
        let source = HttpUserSource::new(endpoint, Duration::from_secs(2)).unwrap();

        let result = source.fetch_users().await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
