//! HTTP client for the AjiMemo REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::error::ApiError;
use super::session::{LOGIN_ROUTE, Session, SessionObserver};
use super::store::TokenStore;
use crate::types::{
    Ack, ApiKey, ApiResponse, AuthResponse, ChangePasswordRequest, CheckoutRequest,
    CheckoutSession, CreateApiKeyRequest, ForgotPasswordRequest, LoginRequest,
    MAX_QUERY_LIMIT, Memory, MemoryQuery, PaidTier, ProfileUpdate, RegisterRequest,
    ResetPasswordRequest, SaveMemoryRequest, SubscriptionInfo, User,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Paths whose 401 means "wrong credentials", not "session gone".
const CREDENTIAL_PATHS: [&str; 2] = ["/auth/login", "/auth/register"];

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Authenticated client for the AjiMemo API.
///
/// Every request carries `Authorization: Bearer <token>` while a token is
/// known. A 401 from any endpoint other than login/register tears the
/// session down and tells the [`SessionObserver`].
///
/// Each domain method issues exactly one request. Nothing is retried,
/// queued or de-duplicated.
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: Session,
    observer: Arc<dyn SessionObserver>,
}

impl ApiClient {
    pub fn new(
        options: ClientOptions,
        store: Arc<dyn TokenStore>,
        observer: Arc<dyn SessionObserver>,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(&options.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(cannot_be_base(&base_url));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(options.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url,
            session: Session::new(store),
            observer,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Use `token` for all subsequent requests and persist it.
    pub fn set_auth(&self, token: &str) -> Result<(), ApiError> {
        self.session.set(token)?;
        info!("auth token set");
        Ok(())
    }

    /// Drop the token from memory and from the store.
    pub fn clear_auth(&self) -> Result<(), ApiError> {
        self.session.clear()?;
        info!("auth token cleared");
        Ok(())
    }

    // Authentication

    /// Exchange credentials for a token. The token is not stored; call
    /// [`set_auth`](Self::set_auth) with it.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse<AuthResponse>, ApiError> {
        self.post("/api/v1/auth/login", &LoginRequest { email, password })
            .await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<ApiResponse<AuthResponse>, ApiError> {
        self.post(
            "/api/v1/auth/register",
            &RegisterRequest {
                email,
                password,
                name,
            },
        )
        .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<Ack, ApiError> {
        self.post("/api/v1/auth/forgot-password", &ForgotPasswordRequest { email })
            .await
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<Ack, ApiError> {
        self.post(
            "/api/v1/auth/reset-password",
            &ResetPasswordRequest { token, password },
        )
        .await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<Ack, ApiError> {
        self.post(
            "/api/v1/auth/change-password",
            &ChangePasswordRequest {
                current_password,
                new_password,
            },
        )
        .await
    }

    // User

    pub async fn get_profile(&self) -> Result<ApiResponse<User>, ApiError> {
        self.get("/api/v1/auth/me").await
    }

    pub async fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> Result<ApiResponse<User>, ApiError> {
        let url = self.endpoint("/api/v1/user/profile", &[])?;
        self.send(Method::PUT, url, Some(update)).await
    }

    // API keys

    pub async fn get_api_keys(&self) -> Result<ApiResponse<Vec<ApiKey>>, ApiError> {
        self.get("/api/v1/user/api-keys").await
    }

    pub async fn create_api_key(&self, name: &str) -> Result<ApiResponse<ApiKey>, ApiError> {
        self.post("/api/v1/user/api-keys", &CreateApiKeyRequest { name })
            .await
    }

    pub async fn delete_api_key(&self, id: &str) -> Result<Ack, ApiError> {
        // Dot segments are dropped when appended, which would hit the list endpoint.
        if matches!(id.trim(), "" | "." | "..") {
            return Err(ApiError::InvalidRequest(format!(
                "invalid API key id: {:?}",
                id
            )));
        }
        let url = self.endpoint("/api/v1/user/api-keys", &[id])?;
        self.send::<(), _>(Method::DELETE, url, None).await
    }

    // Subscription

    pub async fn get_subscription(&self) -> Result<ApiResponse<SubscriptionInfo>, ApiError> {
        self.get("/api/v1/user/subscription").await
    }

    pub async fn create_checkout_session(
        &self,
        tier: PaidTier,
    ) -> Result<ApiResponse<CheckoutSession>, ApiError> {
        self.post("/api/v1/billing/checkout", &CheckoutRequest { tier })
            .await
    }

    // Memories

    pub async fn save_memory(
        &self,
        request: &SaveMemoryRequest,
    ) -> Result<ApiResponse<Memory>, ApiError> {
        if request.text.trim().is_empty() {
            return Err(ApiError::InvalidRequest(
                "memory text must not be empty".to_string(),
            ));
        }
        self.post("/api/v1/memory/save", request).await
    }

    pub async fn query_memories(
        &self,
        query: &MemoryQuery,
    ) -> Result<ApiResponse<Vec<Memory>>, ApiError> {
        if !query.limit_in_range() {
            return Err(ApiError::InvalidRequest(format!(
                "limit must be between 1 and {}, got {}",
                MAX_QUERY_LIMIT, query.limit
            )));
        }
        self.post("/api/v1/memory/query", query).await
    }

    // Transport

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let url = self.endpoint(path, &[])?;
        self.send::<(), _>(Method::GET, url, None).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, &[])?;
        self.send(Method::POST, url, Some(body)).await
    }

    async fn send<B, T>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let path = url.path().to_owned();
        let path = path.as_str();
        let mut request = self.http.request(method.clone(), url);

        let token = self.session.current()?;
        if let Some(token) = &token {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, path, authenticated = token.is_some(), "sending request");
        let response = request.send().await?;
        let status = response.status();
        debug!(%method, path, %status, "received response");

        if status == StatusCode::UNAUTHORIZED {
            let message = error_message(response).await;
            return Err(self.unauthorized(path, message));
        }

        if !status.is_success() {
            let message = error_message(response).await;
            return Err(ApiError::Status { status, message });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Append a fixed API path and caller-supplied segments to the base URL,
    /// keeping any path prefix the base URL carries.
    ///
    /// Each entry of `params` becomes exactly one percent-encoded segment, so
    /// `/`, `?` and `#` inside an id cannot change the endpoint.
    fn endpoint(&self, path: &str, params: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| cannot_be_base(&self.base_url))?
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()))
            .extend(params);
        Ok(url)
    }

    fn unauthorized(&self, path: &str, message: Option<String>) -> ApiError {
        if is_credential_request(path) {
            return ApiError::InvalidCredentials { message };
        }

        warn!(path, "token rejected, clearing session");
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "failed to clear stored token");
        }
        self.observer.session_invalidated(LOGIN_ROUTE);

        ApiError::SessionExpired {
            path: path.to_string(),
        }
    }
}

fn cannot_be_base(url: &Url) -> ApiError {
    ApiError::InvalidRequest(format!("base URL cannot carry a path: {}", url))
}

fn is_credential_request(path: &str) -> bool {
    CREDENTIAL_PATHS.iter().any(|p| path.contains(p))
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers errors with `{"detail": ...}`; envelopes use
/// `message`. Anything else is passed through as text.
async fn error_message(response: Response) -> Option<String> {
    let text = response.text().await.ok()?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return Some(text.to_string());
    };

    for field in ["detail", "message"] {
        match value.get(field) {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }
    }

    Some(text.to_string())
}
