use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::sync::RwLock;
use thiserror::Error;

use crate::session::SessionStore;

/// Internal failure taxonomy. Callers outside this module never branch on
/// the variant: every kind collapses to the same "no result" rendering.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("Access denied")]
    Forbidden,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Server error: {0}")]
    Server(String),
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    client: Client,
    session: SessionStore,
    on_unauthorized: RwLock<Option<UnauthorizedHook>>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        // On wasm, we can't use timeout
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: base_url.trim_end_matches('/').to_string(),
                client,
                session,
                on_unauthorized: RwLock::new(None),
            }),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Runs after any 401, once the session store has been cleared. The app
    /// wires this to drop the global auth signal so the UI lands on login.
    pub fn set_unauthorized_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        let mut guard = self.inner.on_unauthorized.write().unwrap();
        *guard = Some(Arc::new(hook));
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        match self.inner.session.access_token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authed(self.inner.client.get(self.url(path)));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authed(self.inner.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.authed(self.inner.client.post(self.url(path)));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authed(self.inner.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.authed(self.inner.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        self.handle_response(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.authed(self.inner.client.delete(self.url(path)));
        let response = request.send().await?;
        self.handle_empty_response(response).await
    }

    /// Any 401, from any endpoint, ends the session: the store is wiped
    /// before the caller sees the error.
    fn handle_unauthorized(&self) {
        self.inner.session.clear();
        let hook = self.inner.on_unauthorized.read().unwrap().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        match status {
            StatusCode::OK
            | StatusCode::CREATED
            | StatusCode::ACCEPTED
            | StatusCode::NO_CONTENT => Ok(()),
            StatusCode::UNAUTHORIZED => {
                self.handle_unauthorized();
                Err(ApiError::Unauthorized)
            }
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            StatusCode::NOT_FOUND => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::NotFound(text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::Server(format!("{}: {}", status, text)))
            }
        }
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string())),
            StatusCode::UNAUTHORIZED => {
                self.handle_unauthorized();
                Err(ApiError::Unauthorized)
            }
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
            StatusCode::NOT_FOUND => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::NotFound(text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ApiError::Server(format!("{}: {}", status, text)))
            }
        }
    }
}

// Global API client instance
static API_CLIENT: std::sync::OnceLock<ApiClient> = std::sync::OnceLock::new();

pub fn init_api_client(base_url: &str, session: SessionStore) {
    let _ = API_CLIENT.set(ApiClient::new(base_url, session));
}

pub fn api_client() -> &'static ApiClient {
    API_CLIENT
        .get()
        .expect("API client not initialized. Call init_api_client first.")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::{AuthTokens, Role, User};
    use crate::session::{
        MemoryStorage, SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY,
    };
    use crate::session::StorageBackend;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{delete, get, post};
    use axum::{Json, Router};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn stand_in_backend() -> Router {
        Router::new()
            .route(
                "/api/auth/me/",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    Json(serde_json::json!({ "authorization": auth }))
                }),
            )
            .route(
                "/api/echo-body/",
                post(|Json(body): Json<serde_json::Value>| async move { Json(body) }),
            )
            .route(
                "/api/admin/dashboard/",
                get(|| async {
                    (StatusCode::UNAUTHORIZED, "token expired").into_response()
                }),
            )
            .route(
                "/api/admin/stations/{id}/",
                delete(|| async { StatusCode::NO_CONTENT }),
            )
            .route(
                "/api/broken/",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
            )
    }

    async fn spawn_backend() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stand_in_backend()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn seeded_session(backend: Arc<MemoryStorage>) -> SessionStore {
        let session = SessionStore::new(backend);
        session.save_tokens(&AuthTokens {
            access: "tok-123".to_string(),
            refresh: "ref-456".to_string(),
        });
        session.save_user(&User {
            id: "u-1".to_string(),
            phone: "+251900000000".to_string(),
            full_name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            role: Role::Admin,
            profile_image: None,
            station: None,
        });
        session
    }

    #[tokio::test]
    async fn bearer_header_sent_exactly_when_token_present() {
        let base_url = spawn_backend().await;
        let client = ApiClient::new(
            &base_url,
            seeded_session(Arc::new(MemoryStorage::default())),
        );

        let echoed: serde_json::Value = client.get("/api/auth/me/").await.unwrap();
        assert_eq!(echoed["authorization"], "Bearer tok-123");
    }

    #[tokio::test]
    async fn no_authorization_header_without_token() {
        let base_url = spawn_backend().await;
        let client = ApiClient::new(&base_url, SessionStore::in_memory());

        let echoed: serde_json::Value = client.get("/api/auth/me/").await.unwrap();
        assert_eq!(echoed["authorization"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn post_sends_json_body() {
        let base_url = spawn_backend().await;
        let client = ApiClient::new(&base_url, SessionStore::in_memory());

        let body = serde_json::json!({ "username": "admin@x.com", "password": "pw" });
        let echoed: serde_json::Value = client.post("/api/echo-body/", &body).await.unwrap();
        assert_eq!(echoed, body);
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_fires_hook() {
        let base_url = spawn_backend().await;
        let backend = Arc::new(MemoryStorage::default());
        let client = ApiClient::new(&base_url, seeded_session(backend.clone()));

        static HOOK_FIRED: AtomicBool = AtomicBool::new(false);
        client.set_unauthorized_hook(|| HOOK_FIRED.store(true, Ordering::SeqCst));

        let result: Result<serde_json::Value, ApiError> =
            client.get("/api/admin/dashboard/").await;

        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert!(backend.get(ACCESS_TOKEN_KEY).is_none());
        assert!(backend.get(REFRESH_TOKEN_KEY).is_none());
        assert!(backend.get(USER_KEY).is_none());
        assert!(HOOK_FIRED.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn delete_accepts_no_content() {
        let base_url = spawn_backend().await;
        let client = ApiClient::new(
            &base_url,
            seeded_session(Arc::new(MemoryStorage::default())),
        );

        client.delete("/api/admin/stations/st-1/").await.unwrap();
    }

    #[tokio::test]
    async fn server_error_leaves_session_intact() {
        let base_url = spawn_backend().await;
        let backend = Arc::new(MemoryStorage::default());
        let client = ApiClient::new(&base_url, seeded_session(backend.clone()));

        let result: Result<serde_json::Value, ApiError> = client.get("/api/broken/").await;

        assert!(matches!(result, Err(ApiError::Server(_))));
        assert_eq!(backend.get(ACCESS_TOKEN_KEY).as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn unreachable_backend_reports_network_error() {
        // Nothing listens on this port
        let client = ApiClient::new("http://127.0.0.1:9", SessionStore::in_memory());

        let result: Result<serde_json::Value, ApiError> = client.get("/api/health").await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }
}
