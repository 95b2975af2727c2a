//! Oneshot HTTP client - in-process calls
//!
//! Requires the "in-process" feature.

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::{HttpClient, decode};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Sends each request straight into a Router through tower's `oneshot`,
/// so the full middleware stack runs without a socket.
///
/// # Example
///
/// ```ignore
/// use directory_client::OneshotHttpClient;
/// use directory_server::{AppState, build_app};
///
/// let client = OneshotHttpClient::new(build_app(AppState::in_memory(), &[]));
/// let employees: Vec<Employee> = client.get("/employees").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn request(method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Request<Body>> {
        let uri = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(bytes) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(bytes)),
            None => builder.body(Body::empty()),
        };
        request.map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    /// Run the request and return the success body
    async fn execute(&self, request: Request<Body>) -> ClientResult<Bytes> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        if !status.is_success() {
            return Err(ClientError::from_response(status, &body));
        }
        Ok(body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::request(Method::GET, path, None)?;
        decode(&self.execute(request).await?)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::request(Method::POST, path, Some(serde_json::to_vec(body)?))?;
        decode(&self.execute(request).await?)
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::request(Method::PUT, path, Some(serde_json::to_vec(body)?))?;
        decode(&self.execute(request).await?)
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = Self::request(Method::DELETE, path, None)?;
        self.execute(request).await?;
        Ok(())
    }
}
