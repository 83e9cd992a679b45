//! Notes widget - renders a server-owned list of notes and lets the admin
//! role create, edit and delete them.
//!
//! The library is organized into the following modules:
//!
//! - `models`: Note, identifiers, payloads and the role flag
//! - `text`: HTML escaping and URL linkification
//! - `templates`: Notes region markup and user-facing strings
//! - `editor`: Editing identifier and submission validation
//! - `api`: Notes API trait and its HTTP client
//! - `page`: The UI surface the controller mutates
//! - `controller`: Load / render / save / edit / delete sequencing
//! - `config`: Environment configuration

pub mod api;
pub mod config;
pub mod controller;
pub mod editor;
pub mod models;
pub mod page;
pub mod templates;
pub mod text;

// ============================================================================
// Configuration
// ============================================================================

/// Notes API base URL when `NOTES_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "notes_widget=info";

// Re-export commonly used types
pub use api::{ApiError, HttpNotesApi, NotesApi, SESSION_COOKIE};
pub use config::{ConfigError, WidgetConfig};
pub use controller::{DeleteOutcome, EditOutcome, LoadOutcome, NoteDisplayController, SaveOutcome};
pub use editor::{validate_submission, EditMode, EditorState, SaveTarget, ValidationError};
pub use models::{ApiErrorBody, Note, NoteId, NotePayload, Role};
pub use page::{MemoryPage, Page, Status};
pub use templates::{empty_state_html, render_note_card, render_notes, NoteAction};
pub use text::{html_escape, linkify, render_content};
