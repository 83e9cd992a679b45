//! Tests for the HTTP notes API client.
//!
//! Each test runs a small axum router on an ephemeral port that behaves like
//! the notes API: session check on reads, `{error}` bodies on failures.

use super::*;
use axum::{
    extract::{Path, State},
    http::{header::COOKIE as AXUM_COOKIE, HeaderMap, StatusCode as AxumStatus},
    response::{IntoResponse, Response as AxumResponse},
    routing::{get, put},
    Json, Router,
};
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Server
// ============================================================================

#[derive(Clone, Default)]
struct ServerState {
    notes: Arc<Mutex<Vec<Note>>>,
    requests: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<String>>>,
    session: Option<String>,
    garbage_list: bool,
}

impl ServerState {
    fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(notes)),
            ..Default::default()
        }
    }

    fn log(&self, line: String) {
        self.requests.lock().unwrap().push(line);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        match &self.session {
            None => true,
            Some(token) => headers
                .get(AXUM_COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(|v| v == format!("session={}", token))
                .unwrap_or(false),
        }
    }
}

fn error_body(status: AxumStatus, message: &str) -> AxumResponse {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

async fn list_notes(State(state): State<ServerState>, headers: HeaderMap) -> AxumResponse {
    state.log("GET /api/notes".to_string());
    if !state.authorized(&headers) {
        return error_body(AxumStatus::UNAUTHORIZED, "Unauthorized");
    }
    if state.garbage_list {
        return (AxumStatus::OK, "definitely not json").into_response();
    }
    Json(state.notes.lock().unwrap().clone()).into_response()
}

async fn create_note(State(state): State<ServerState>, body: String) -> AxumResponse {
    state.log("POST /api/notes".to_string());
    state.bodies.lock().unwrap().push(body.clone());
    let payload: serde_json::Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return error_body(AxumStatus::BAD_REQUEST, "JSON invalide"),
    };

    let mut notes = state.notes.lock().unwrap();
    let note = Note {
        id: NoteId::Int(notes.len() as i64 + 1),
        title: payload["title"].as_str().unwrap_or_default().to_string(),
        content: payload["content"].as_str().unwrap_or_default().to_string(),
    };
    notes.push(note.clone());
    (AxumStatus::CREATED, Json(note)).into_response()
}

async fn update_note(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<NotePayload>,
) -> AxumResponse {
    state.log(format!("PUT /api/notes/{}", id));
    let id = NoteId::parse(&id);
    let mut notes = state.notes.lock().unwrap();
    match notes.iter_mut().find(|n| Some(&n.id) == id.as_ref()) {
        Some(note) => {
            note.title = payload.title;
            note.content = payload.content;
            Json(note.clone()).into_response()
        }
        None => error_body(AxumStatus::NOT_FOUND, "Note introuvable"),
    }
}

async fn delete_note(State(state): State<ServerState>, Path(id): Path<String>) -> AxumResponse {
    state.log(format!("DELETE /api/notes/{}", id));
    if id == "500" {
        return (AxumStatus::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    let id = NoteId::parse(&id);
    state
        .notes
        .lock()
        .unwrap()
        .retain(|n| Some(&n.id) != id.as_ref());
    Json(serde_json::json!({ "success": true })).into_response()
}

async fn spawn_server(state: ServerState) -> Url {
    let app = Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{}", addr)).unwrap()
}

fn note(id: i64, title: &str, content: &str) -> Note {
    Note {
        id: NoteId::Int(id),
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn payload(title: &str, content: &str) -> NotePayload {
    NotePayload {
        title: title.to_string(),
        content: content.to_string(),
    }
}

// ============================================================================
// URL Building
// ============================================================================

#[test]
fn test_urls_keep_base_path() {
    let api = HttpNotesApi::new(Url::parse("http://h.example/app").unwrap()).unwrap();
    assert_eq!(api.base().as_str(), "http://h.example/app/");
    assert_eq!(
        api.collection_url().unwrap().as_str(),
        "http://h.example/app/api/notes"
    );
    assert_eq!(
        api.note_url(&NoteId::Int(5)).unwrap().as_str(),
        "http://h.example/app/api/notes/5"
    );
}

#[test]
fn test_text_ids_are_percent_encoded() {
    let api = HttpNotesApi::new(Url::parse("http://h.example").unwrap()).unwrap();
    assert_eq!(
        api.note_url(&NoteId::from("a b/c?")).unwrap().as_str(),
        "http://h.example/api/notes/a%20b%2Fc%3F"
    );
}

#[test]
fn test_dot_segment_ids_are_refused() {
    let api = HttpNotesApi::new(Url::parse("http://h.example").unwrap()).unwrap();
    for raw in [".", ".."] {
        let err = api.note_url(&NoteId::from(raw)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidId(ref id) if id == raw));
        assert!(!err.is_rejection());
    }
    assert_eq!(
        api.note_url(&NoteId::from("v1.2")).unwrap().as_str(),
        "http://h.example/api/notes/v1.2"
    );
}

#[tokio::test]
async fn test_delete_dot_segment_id_sends_nothing() {
    let state = ServerState::with_notes(vec![note(1, "a", "b")]);
    let api = HttpNotesApi::new(spawn_server(state.clone()).await).unwrap();

    let err = api.delete(&NoteId::from("..")).await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidId(_)));
    assert!(state.requests().is_empty());
    assert_eq!(state.notes.lock().unwrap().len(), 1);
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_list_returns_notes_in_server_order() {
    let state = ServerState::with_notes(vec![note(2, "b", "y"), note(1, "a", "x")]);
    let api = HttpNotesApi::new(spawn_server(state.clone()).await).unwrap();

    let notes = api.list().await.unwrap();
    assert_eq!(notes, vec![note(2, "b", "y"), note(1, "a", "x")]);
    assert_eq!(state.requests(), vec!["GET /api/notes"]);
}

#[tokio::test]
async fn test_list_401_is_unauthorized() {
    let state = ServerState {
        session: Some("tok".to_string()),
        ..Default::default()
    };
    let base = spawn_server(state).await;

    let anonymous = HttpNotesApi::new(base.clone()).unwrap();
    assert!(matches!(anonymous.list().await, Err(ApiError::Unauthorized)));

    let client = reqwest::Client::new();
    let signed_in = HttpNotesApi::with_client(client, base, Some("tok".to_string()));
    assert!(signed_in.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_garbage_body_is_decode_error() {
    let state = ServerState {
        garbage_list: true,
        ..Default::default()
    };
    let api = HttpNotesApi::new(spawn_server(state).await).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!err.is_rejection());
}

#[tokio::test]
async fn test_create_posts_exact_payload() {
    let state = ServerState::default();
    let api = HttpNotesApi::new(spawn_server(state.clone()).await).unwrap();

    api.create(&payload("T", "C")).await.unwrap();

    assert_eq!(state.requests(), vec!["POST /api/notes"]);
    assert_eq!(
        state.bodies.lock().unwrap().clone(),
        vec![r#"{"title":"T","content":"C"}"#.to_string()]
    );
    assert_eq!(api.list().await.unwrap(), vec![note(1, "T", "C")]);
}

#[tokio::test]
async fn test_update_puts_to_note_url() {
    let state = ServerState::with_notes(vec![note(5, "old", "old")]);
    let api = HttpNotesApi::new(spawn_server(state.clone()).await).unwrap();

    api.update(&NoteId::Int(5), &payload("new", "body")).await.unwrap();

    assert_eq!(state.requests(), vec!["PUT /api/notes/5"]);
    assert_eq!(state.notes.lock().unwrap()[0], note(5, "new", "body"));
}

#[tokio::test]
async fn test_update_missing_note_carries_server_message() {
    let state = ServerState::default();
    let api = HttpNotesApi::new(spawn_server(state).await).unwrap();

    let err = api
        .update(&NoteId::Int(9), &payload("t", "c"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
    assert_eq!(err.server_message(), Some("Note introuvable"));
}

#[tokio::test]
async fn test_delete_and_non_json_failure() {
    let state = ServerState::with_notes(vec![note(1, "a", "b"), note(2, "c", "d")]);
    let api = HttpNotesApi::new(spawn_server(state.clone()).await).unwrap();

    api.delete(&NoteId::Int(1)).await.unwrap();
    assert_eq!(state.notes.lock().unwrap().clone(), vec![note(2, "c", "d")]);

    let err = api.delete(&NoteId::Int(500)).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Rejected {
            status: 500,
            message: None
        }
    ));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpNotesApi::new(Url::parse(&format!("http://{}", addr)).unwrap()).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.server_message().is_none());
}
