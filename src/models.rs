//! Data models for the notes widget.
//!
//! Notes are owned by the notes API; these types only describe what travels
//! over the wire and what the widget holds for a single render pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Core Note Types
// ============================================================================

/// Opaque note identifier assigned by the store.
///
/// The API may hand out integers, other JSON numbers or strings; all
/// round-trip unchanged. Two ids are equal when they render the same, since
/// markup only carries the rendered form back (`Int(42)` equals `Text("42")`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    /// Numbers outside `i64`: floats, values above `i64::MAX`.
    Number(serde_json::Number),
    Text(String),
}

impl NoteId {
    /// Parse an identifier coming back from markup (a `data-id` attribute or
    /// a typed command). Only canonical integers become `Int`, so `"007"`
    /// stays text and keeps its rendered form.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => NoteId::Int(n),
            _ => NoteId::Text(raw.to_string()),
        })
    }

    /// `.` and `..` would be resolved away as path segments.
    pub fn is_dot_segment(&self) -> bool {
        matches!(self, NoteId::Text(s) if s == "." || s == "..")
    }
}

impl PartialEq for NoteId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NoteId::Int(a), NoteId::Int(b)) => a == b,
            (NoteId::Text(a), NoteId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for NoteId {}

impl Hash for NoteId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Int(n) => write!(f, "{}", n),
            NoteId::Number(n) => write!(f, "{}", n),
            NoteId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NoteId {
    fn from(n: i64) -> Self {
        NoteId::Int(n)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

/// Request body for create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub content: String,
}

/// Error body returned by the notes API on non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================================================
// Role
// ============================================================================

/// Ambient role flag injected into the page.
///
/// Only gates which controls are rendered; the API authorizes mutations on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    #[default]
    Reader,
}

impl Role {
    /// Anything other than `admin` is a reader.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim() == "admin" {
            Role::Admin
        } else {
            Role::Reader
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}
