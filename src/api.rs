//! Client for the notes API.
//!
//! The API owns persistence and id assignment; the widget only proxies
//! create/update/delete and reads the collection back.

use crate::config::WidgetConfig;
use crate::models::{ApiErrorBody, Note, NoteId, NotePayload};
use async_trait::async_trait;
use reqwest::{header::COOKIE, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use tracing::debug;
use url::Url;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

const NOTES_PATH: &str = "api/notes";

/// Name of the session cookie the notes API issues at login.
pub const SESSION_COOKIE: &str = "session";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ApiError {
    /// The collection read came back 401; the session is gone.
    #[error("not authenticated")]
    Unauthorized,
    /// Any other non-success status. `message` is the body's `error` field.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Id that cannot be addressed as a path segment.
    #[error("note id {0:?} cannot be used in a URL")]
    InvalidId(String),
}

impl ApiError {
    /// Message to show the user for a rejected mutation, if the server sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// True for failures the server answered; false for transport/parse.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. } | ApiError::Unauthorized)
    }
}

// ============================================================================
// API Trait
// ============================================================================

#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `GET /api/notes`
    async fn list(&self) -> Result<Vec<Note>, ApiError>;

    /// `POST /api/notes`
    async fn create(&self, payload: &NotePayload) -> Result<(), ApiError>;

    /// `PUT /api/notes/{id}`
    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<(), ApiError>;

    /// `DELETE /api/notes/{id}`
    async fn delete(&self, id: &NoteId) -> Result<(), ApiError>;
}

// ============================================================================
// HTTP Implementation
// ============================================================================

pub struct HttpNotesApi {
    client: reqwest::Client,
    base: Url,
    session: Option<String>,
}

impl HttpNotesApi {
    /// Client with transport defaults and no session cookie.
    pub fn new(base: Url) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, base, None))
    }

    pub fn from_config(config: &WidgetConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(
            client,
            config.api_base.clone(),
            config.session.clone(),
        ))
    }

    pub fn with_client(client: reqwest::Client, mut base: Url, session: Option<String>) -> Self {
        // Without a trailing slash `join` would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self {
            client,
            base,
            session,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn collection_url(&self) -> Result<Url, ApiError> {
        Ok(self.base.join(NOTES_PATH)?)
    }

    pub fn note_url(&self, id: &NoteId) -> Result<Url, ApiError> {
        // Percent-encoding does not help here: `%2E%2E` is still a dot-segment.
        if id.is_dot_segment() {
            return Err(ApiError::InvalidId(id.to_string()));
        }
        let segment = urlencoding::encode(&id.to_string()).into_owned();
        Ok(self.base.join(&format!("{}/{}", NOTES_PATH, segment))?)
    }

    fn with_session(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Some(token) => request.header(COOKIE, format!("{}={}", SESSION_COOKIE, token)),
            None => request,
        }
    }

    async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}

/// Turn a non-success response into `Rejected`, reading `{error}` if present.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    ApiError::Rejected { status, message }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let url = self.collection_url()?;
        debug!(%url, "fetching notes");
        let response = self.with_session(self.client.get(url)).send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn create(&self, payload: &NotePayload) -> Result<(), ApiError> {
        let url = self.collection_url()?;
        debug!(%url, "creating note");
        let response = self
            .with_session(self.client.post(url).json(payload))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn update(&self, id: &NoteId, payload: &NotePayload) -> Result<(), ApiError> {
        let url = self.note_url(id)?;
        debug!(%url, "updating note");
        let response = self
            .with_session(self.client.put(url).json(payload))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn delete(&self, id: &NoteId) -> Result<(), ApiError> {
        let url = self.note_url(id)?;
        debug!(%url, "deleting note");
        let response = self.with_session(self.client.delete(url)).send().await?;
        Self::expect_success(response).await
    }
}
