use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use bp_types::Blueprint;

use crate::error::{ServiceError, ServiceResult};
use crate::traits::{DataService, Deleted};

/// HTTP adapter for the real blueprints API.
///
/// Talks to `<base_url>/api/v1/blueprints[/{author}[/{name}]]` with author
/// and name percent-encoded as path segments. A bearer token is attached
/// when configured. Response bodies may arrive enveloped (`{"data": ...}`)
/// or bare; both are accepted.
pub struct RemoteDataService {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl RemoteDataService {
    /// Build an adapter against the given base URL with a request timeout.
    pub fn new(base_url: &str, timeout: Duration, token: Option<String>) -> ServiceResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let base_url =
            Url::parse(base_url).map_err(|e| ServiceError::Config(format!("base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ServiceError::Config(format!(
                "base URL has no path: {base_url}"
            )));
        }
        Ok(Self {
            client,
            base_url,
            token: token.filter(|t| !t.is_empty()),
        })
    }

    /// Join `/api/v1/blueprints` plus the given segments onto the base URL,
    /// percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base URL validated in new()");
            path.pop_if_empty()
                .extend(["api", "v1", "blueprints"])
                .extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> ServiceResult<Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        request
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }

    /// Map the response status, then decode the body (enveloped or bare).
    async fn decode<T: DeserializeOwned>(
        &self,
        response: Response,
        key: Option<(&str, &str)>,
    ) -> ServiceResult<T> {
        let status = response.status();
        if let Some(err) = status_error(status, key) {
            return Err(err);
        }
        debug!(%status, url = %response.url(), "blueprints api response");
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(envelope.into_inner())
    }
}

#[async_trait]
impl DataService for RemoteDataService {
    async fn get_all(&self) -> ServiceResult<Vec<Blueprint>> {
        let response = self.send(self.client.get(self.endpoint(&[]))).await?;
        self.decode(response, None).await
    }

    async fn get_by_author(&self, author: &str) -> ServiceResult<Vec<Blueprint>> {
        let response = self.send(self.client.get(self.endpoint(&[author]))).await?;
        self.decode(response, None).await
    }

    async fn get_by_author_and_name(&self, author: &str, name: &str) -> ServiceResult<Blueprint> {
        let response = self
            .send(self.client.get(self.endpoint(&[author, name])))
            .await?;
        self.decode(response, Some((author, name))).await
    }

    async fn create(&self, payload: Blueprint) -> ServiceResult<Blueprint> {
        let key = (payload.author.clone(), payload.name.clone());
        let response = self
            .send(self.client.post(self.endpoint(&[])).json(&payload))
            .await?;
        self.decode(response, Some((&key.0, &key.1))).await
    }

    async fn update(
        &self,
        author: &str,
        name: &str,
        payload: Blueprint,
    ) -> ServiceResult<Blueprint> {
        let response = self
            .send(self.client.put(self.endpoint(&[author, name])).json(&payload))
            .await?;
        self.decode(response, Some((author, name))).await
    }

    async fn remove(&self, author: &str, name: &str) -> ServiceResult<Deleted> {
        let response = self
            .send(self.client.delete(self.endpoint(&[author, name])))
            .await?;
        self.decode(response, Some((author, name))).await
    }
}

impl std::fmt::Debug for RemoteDataService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteDataService")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

/// Map an HTTP status onto the service error taxonomy.
///
/// `key` carries the blueprint identity for operations that have one, so
/// 404 and 409 can surface as domain failures instead of bare statuses.
fn status_error(status: StatusCode, key: Option<(&str, &str)>) -> Option<ServiceError> {
    if status.is_success() {
        return None;
    }
    match key {
        Some((author, name)) if status == StatusCode::NOT_FOUND => {
            Some(ServiceError::not_found(author, name))
        }
        Some((author, name)) if status == StatusCode::CONFLICT => {
            Some(ServiceError::already_exists(author, name))
        }
        _ => Some(ServiceError::Server(format!("unexpected status {status}"))),
    }
}

/// Response body, either wrapped as `{"data": ...}` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } | Envelope::Bare(data) => data,
        }
    }
}
