//! Firebase Realtime Database backend over its REST API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::{DocumentPath, DocumentStore, DomainError};

/// Error body returned by the REST API, e.g. `{"error": "Permission denied"}`
#[derive(Debug, Deserialize)]
struct FirebaseErrorBody {
    error: String,
}

/// Document store backed by a Firebase Realtime Database
#[derive(Debug, Clone)]
pub struct FirebaseRealtimeStore {
    client: reqwest::Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl FirebaseRealtimeStore {
    pub fn new(
        database_url: &str,
        auth_token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let base_url = Url::parse(database_url).map_err(|e| {
            DomainError::configuration(format!("Invalid database URL '{}': {}", database_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Database URL '{}' cannot hold document paths",
                database_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            DomainError::configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url,
            auth_token,
        })
    }

    /// `{base}/{segments..}.json`, with every segment percent-encoded
    fn document_url(&self, path: &DocumentPath) -> Result<Url, DomainError> {
        let (last, parents) = path
            .segments()
            .split_last()
            .ok_or_else(|| DomainError::storage("Empty document path"))?;

        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| DomainError::configuration("Database URL cannot hold paths"))?;
            segments.pop_if_empty();
            segments.extend(parents);
            segments.push(&format!("{}.json", last));
        }

        if let Some(ref token) = self.auth_token {
            url.query_pairs_mut().append_pair("auth", token);
        }

        Ok(url)
    }

    /// Turn a non-2xx response into a storage error carrying the server's text
    async fn check(response: Response) -> Result<Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<FirebaseErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.is_empty() => format!("HTTP {}", status),
            Err(_) => format!("HTTP {}: {}", status, body),
        };

        Err(DomainError::storage(message))
    }
}

fn transport_error(err: reqwest::Error) -> DomainError {
    DomainError::storage(err.to_string())
}

#[async_trait]
impl DocumentStore for FirebaseRealtimeStore {
    async fn read(&self, path: &DocumentPath) -> Result<Option<Value>, DomainError> {
        let url = self.document_url(path)?;
        debug!(path = %path, "Reading document");

        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let value: Value = Self::check(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        // The database answers `null` for locations holding nothing
        Ok(if value.is_null() { None } else { Some(value) })
    }

    async fn write(&self, path: &DocumentPath, document: &Value) -> Result<(), DomainError> {
        let url = self.document_url(path)?;
        debug!(path = %path, "Writing document");

        let response = self
            .client
            .put(url)
            .query(&[("print", "silent")])
            .json(document)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check(response).await.map(|_| ())
    }

    async fn merge(
        &self,
        path: &DocumentPath,
        partial: &Map<String, Value>,
    ) -> Result<(), DomainError> {
        let url = self.document_url(path)?;
        debug!(path = %path, fields = partial.len(), "Merging document");

        let response = self
            .client
            .patch(url)
            .query(&[("print", "silent")])
            .json(partial)
            .send()
            .await
            .map_err(transport_error)?;

        Self::check(response).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path as url_path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn doc_path(key: &str) -> DocumentPath {
        DocumentPath::new("userconfig", key).unwrap()
    }

    fn store_for(server: &MockServer, token: Option<&str>) -> FirebaseRealtimeStore {
        FirebaseRealtimeStore::new(&server.uri(), token.map(String::from), None).unwrap()
    }

    #[test]
    fn test_invalid_database_url() {
        let result = FirebaseRealtimeStore::new("not a url", None, None);
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_document_url_encodes_segments() {
        let store =
            FirebaseRealtimeStore::new("https://demo.firebaseio.com/", Some("s3cr3t".into()), None)
                .unwrap();

        let url = store.document_url(&doc_path("john doe")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.firebaseio.com/userconfig/john%20doe.json?auth=s3cr3t"
        );
    }

    #[tokio::test]
    async fn test_read_existing_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/userconfig/42.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id_user": 42,
                "active_status": true,
                "avatar": "a.png"
            })))
            .mount(&server)
            .await;

        let value = store_for(&server, None).read(&doc_path("42")).await.unwrap();
        assert_eq!(value.unwrap()["id_user"], json!(42));
    }

    #[tokio::test]
    async fn test_read_null_is_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(url_path("/userconfig/7.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .mount(&server)
            .await;

        let value = store_for(&server, None).read(&doc_path("7")).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_error_body_message_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Permission denied"})),
            )
            .mount(&server)
            .await;

        let err = store_for(&server, None)
            .read(&doc_path("1"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Storage { .. }));
        assert_eq!(err.to_string(), "Permission denied");
    }

    #[tokio::test]
    async fn test_write_puts_full_document_with_auth() {
        let server = MockServer::start().await;
        let document = json!({"id_user": "u1", "active_status": false, "avatar": "x"});

        Mock::given(method("PUT"))
            .and(url_path("/userconfig/u1.json"))
            .and(query_param("auth", "token-1"))
            .and(query_param("print", "silent"))
            .and(body_json(&document))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        store_for(&server, Some("token-1"))
            .write(&doc_path("u1"), &document)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_merge_patches_only_given_fields() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(url_path("/userconfig/u1.json"))
            .and(body_json(json!({"active_status": true})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let mut partial = Map::new();
        partial.insert("active_status".to_string(), json!(true));

        store_for(&server, None)
            .merge(&doc_path("u1"), &partial)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = store_for(&server, None)
            .write(&doc_path("1"), &json!({}))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("upstream down"));
    }
}
