//! Editor state: which note, if any, the input fields are bound to.

use crate::models::{NoteId, NotePayload};
use crate::templates::{SAVE_LABEL_CREATE, SAVE_LABEL_UPDATE};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update,
}

impl EditMode {
    /// Text shown on the save button.
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Create => SAVE_LABEL_CREATE,
            EditMode::Update => SAVE_LABEL_UPDATE,
        }
    }
}

/// Where a save goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(NoteId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    editing_id: Option<NoteId>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing_id(&self) -> Option<&NoteId> {
        self.editing_id.as_ref()
    }

    pub fn mode(&self) -> EditMode {
        if self.editing_id.is_some() {
            EditMode::Update
        } else {
            EditMode::Create
        }
    }

    pub fn save_target(&self) -> SaveTarget {
        match &self.editing_id {
            Some(id) => SaveTarget::Update(id.clone()),
            None => SaveTarget::Create,
        }
    }

    pub fn begin_edit(&mut self, id: NoteId) {
        self.editing_id = Some(id);
    }

    /// Back to composing a new note.
    pub fn reset(&mut self) {
        self.editing_id = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("content is empty")]
    EmptyContent,
}

/// Trim both fields and require each to be non-empty.
pub fn validate_submission(title: &str, content: &str) -> Result<NotePayload, ValidationError> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(NotePayload {
        title: title.to_string(),
        content: content.to_string(),
    })
}
